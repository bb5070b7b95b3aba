//! The delegation designator format.
//!
//! A delegated account does not carry its own bytecode. Its code slot holds a
//! fixed 23-byte designator: the [`DELEGATION_MAGIC`] prefix followed by the
//! 20-byte address of the delegate whose logic the account runs. The
//! designator is installed and cleared by the ledger's account-abstraction
//! mechanism; this crate only encodes and decodes the format.

use alloy_primitives::{Address, FixedBytes};

use crate::constants::{DELEGATION_CODE_LEN, DELEGATION_MAGIC};

/// Errors decoding a delegation designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DelegationDecodeError {
    /// The code is not exactly [`DELEGATION_CODE_LEN`] bytes long.
    #[error("delegation designator must be 23 bytes, got {len}")]
    InvalidLength {
        /// Length of the rejected code.
        len: usize,
    },
    /// The code does not start with the [`DELEGATION_MAGIC`] prefix.
    #[error("delegation designator must start with 0xef0100")]
    InvalidMagic,
}

/// Encodes the designator pointing at `delegate`.
///
/// Always exactly 23 bytes, deterministic, infallible.
pub fn encode_delegation(delegate: Address) -> FixedBytes<DELEGATION_CODE_LEN> {
    FixedBytes::from(DELEGATION_MAGIC).concat_const(delegate.0)
}

/// Decodes a designator, returning the delegate address.
///
/// The trailing 20 bytes are reinterpreted as an address without any
/// validation of the delegate itself; a designator pointing at the zero
/// address decodes like any other.
pub fn decode_delegation(code: &[u8]) -> Result<Address, DelegationDecodeError> {
    if code.len() != DELEGATION_CODE_LEN {
        return Err(DelegationDecodeError::InvalidLength { len: code.len() });
    }
    if code[..DELEGATION_MAGIC.len()] != DELEGATION_MAGIC {
        return Err(DelegationDecodeError::InvalidMagic);
    }
    Ok(Address::from_slice(&code[DELEGATION_MAGIC.len()..]))
}

/// Returns true iff `code` is a well-formed delegation designator.
#[inline]
pub fn is_delegation(code: &[u8]) -> bool {
    code.len() == DELEGATION_CODE_LEN && code[..DELEGATION_MAGIC.len()] == DELEGATION_MAGIC
}
