//! Constants for the bridge core.

use alloy_primitives::{address, uint, Address, U160};

/// Magic prefix of a delegation designator (`0xef0100`).
///
/// An account-abstraction authorization step sets a delegated account's code
/// to this prefix followed by the delegate address.
pub const DELEGATION_MAGIC: [u8; 3] = [0xef, 0x01, 0x00];

/// Total length of a delegation designator: 3-byte magic + 20-byte delegate
/// address.
pub const DELEGATION_CODE_LEN: usize = 23;

/// Offset added (mod 2^160) to a contract's L1 address when its deposit is
/// credited on L2.
///
/// Must match the aliasing constant published by the rollup bit-for-bit for
/// compatibility tests against the live bridge to be meaningful.
pub const L1_TO_L2_ALIAS_OFFSET: Address = address!("0x1111000000000000000000000000000000001111");

/// [`L1_TO_L2_ALIAS_OFFSET`] as a 160-bit integer, the form the aliasing
/// arithmetic runs on.
pub(crate) const ALIAS_OFFSET: U160 = uint!(0x1111000000000000000000000000000000001111_U160);
