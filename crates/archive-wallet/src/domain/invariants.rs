//! # Domain Invariants
//!
//! Business rules for wallet/contract identity.

use archive_types::Address;

/// Invariant: address equality is case-insensitive.
///
/// Wallet agents report EIP-55 checksum casing while contracts typically
/// return lowercase; the same address in either form must compare equal.
/// Comparison happens on parsed bytes, falling back to a case-insensitive
/// string compare when either side is not well-formed hex.
pub fn same_address(a: &str, b: &str) -> bool {
    match (Address::parse(a), Address::parse(b)) {
        (Ok(left), Ok(right)) => left == right,
        _ => a.eq_ignore_ascii_case(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_addresses_match() {
        let addr = "0x16f52e327e57ceb124db335306c3e15d4ef5650b";
        assert!(same_address(addr, addr));
    }

    #[test]
    fn test_mixed_case_addresses_match() {
        assert!(same_address(
            "0x16F52E327e57cEB124Db335306c3E15D4EF5650b",
            "0x16f52e327e57ceb124db335306c3e15d4ef5650b"
        ));
    }

    #[test]
    fn test_different_addresses_do_not_match() {
        assert!(!same_address(
            "0x16f52e327e57ceb124db335306c3e15d4ef5650b",
            "0x1234567890123456789012345678901234567890"
        ));
    }

    #[test]
    fn test_non_hex_falls_back_to_ascii_compare() {
        assert!(same_address("not-an-address", "NOT-AN-ADDRESS"));
        assert!(!same_address("not-an-address", "something-else"));
    }
}
