//! Deterministic L1 → L2 address remapping.
//!
//! When a contract-controlled account's funds are credited on L2, the bridge
//! shifts the L1 address by a fixed offset so it cannot collide with an
//! address a private key controls there. The transform is addition mod
//! 2^160: a bijection over the whole address space, exactly invertible by
//! subtracting the same offset.

use alloy_primitives::{Address, U160};

use crate::constants::ALIAS_OFFSET;

/// Returns the L2 address credited for a contract account at `l1`.
#[inline]
pub fn apply_l1_to_l2_alias(l1: Address) -> Address {
    Address::from(U160::from_be_bytes(l1.0 .0).wrapping_add(ALIAS_OFFSET))
}

/// Inverse of [`apply_l1_to_l2_alias`]: recovers the L1 address an aliased
/// L2 address was derived from.
#[inline]
pub fn undo_l1_to_l2_alias(l2: Address) -> Address {
    Address::from(U160::from_be_bytes(l2.0 .0).wrapping_sub(ALIAS_OFFSET))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::L1_TO_L2_ALIAS_OFFSET;
    use alloy_primitives::address;

    #[test]
    fn test_zero_address_aliases_to_offset() {
        assert_eq!(apply_l1_to_l2_alias(Address::ZERO), L1_TO_L2_ALIAS_OFFSET);
        assert_eq!(undo_l1_to_l2_alias(L1_TO_L2_ALIAS_OFFSET), Address::ZERO);
    }

    #[test]
    fn test_known_mapping() {
        let l1 = address!("0x1234567890123456789012345678901234567890");
        let l2 = address!("0x23455678901234567890123456789012345689a1");
        assert_eq!(apply_l1_to_l2_alias(l1), l2);
        assert_eq!(undo_l1_to_l2_alias(l2), l1);
    }

    #[test]
    fn test_addition_wraps_at_160_bits() {
        let max = address!("0xffffffffffffffffffffffffffffffffffffffff");
        let wrapped = address!("0x1111000000000000000000000000000000001110");
        assert_eq!(apply_l1_to_l2_alias(max), wrapped);
        assert_eq!(undo_l1_to_l2_alias(wrapped), max);
    }

    #[test]
    fn test_round_trip_identity() {
        let fixtures = [
            Address::ZERO,
            address!("0x0000000000000000000000000000000000000001"),
            address!("0x1111000000000000000000000000000000001111"),
            address!("0x4200000000000000000000000000000000000015"),
            address!("0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef"),
            address!("0xeeeeffffffffffffffffffffffffffffffffeeee"),
            address!("0xffffffffffffffffffffffffffffffffffffffff"),
        ];
        for l1 in fixtures {
            assert_eq!(undo_l1_to_l2_alias(apply_l1_to_l2_alias(l1)), l1);
            assert_eq!(apply_l1_to_l2_alias(undo_l1_to_l2_alias(l1)), l1);
        }
    }

    #[test]
    fn test_alias_never_fixes_a_point() {
        // The offset is nonzero, so aliasing can never map an address to
        // itself.
        for byte in 0u8..32 {
            let l1 = Address::repeat_byte(byte);
            assert_ne!(apply_l1_to_l2_alias(l1), l1);
        }
    }
}
