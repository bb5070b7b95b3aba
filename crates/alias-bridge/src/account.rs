//! Account-shape classification over raw bytecode.
//!
//! Classification is a pure function of the code bytes alone: no external
//! state, no history, and it never fails. Every byte sequence maps to exactly
//! one [`AccountKind`].

use alloy_primitives::{Address, Bytes};
use auto_impl::auto_impl;

use crate::delegation::{decode_delegation, is_delegation};

/// The three account shapes the bridge distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AccountKind {
    /// Externally owned account with an empty code slot.
    Eoa,
    /// Externally owned account whose code slot holds a delegation designator.
    Delegated,
    /// Account carrying genuine contract bytecode.
    Contract,
}

impl AccountKind {
    /// Classifies raw code bytes.
    ///
    /// The checks run in this order, and the order is load-bearing: an empty
    /// code slot is always [`Eoa`](Self::Eoa), and a 23-byte code is only
    /// [`Delegated`](Self::Delegated) when the magic prefix matches — a
    /// 23-byte code with any other prefix is a contract like any other.
    pub fn classify(code: &[u8]) -> Self {
        if code.is_empty() {
            Self::Eoa
        } else if is_delegation(code) {
            Self::Delegated
        } else {
            Self::Contract
        }
    }

    /// True only for genuine contract bytecode. This is the predicate the
    /// aliasing decision must be based on.
    pub const fn is_contract(&self) -> bool {
        matches!(self, Self::Contract)
    }

    /// True for an account running under a delegation designator.
    pub const fn is_delegated(&self) -> bool {
        matches!(self, Self::Delegated)
    }

    /// True for a plain externally owned account.
    pub const fn is_eoa(&self) -> bool {
        matches!(self, Self::Eoa)
    }

    /// Compact numeric form used in the wire-level event schema.
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Eoa => 0,
            Self::Delegated => 1,
            Self::Contract => 2,
        }
    }
}

/// The predicate the legacy router used in place of classification: any
/// nonzero code length "looks like a contract".
///
/// This collapses the three-way classification into a binary one and loses
/// the delegated case — a delegated account carries 23 bytes of designator
/// and satisfies it. Kept as the documented behavior of
/// [`LegacyDepositRouter`](crate::LegacyDepositRouter).
#[inline]
pub const fn has_code(code_len: usize) -> bool {
    code_len > 0
}

/// Read access to account code on the ledger.
///
/// Reads are synchronous and consistent at invocation time; code is mutated
/// only by the ledger's own account-management rules, never through this
/// crate.
#[auto_impl(&, Box, Arc)]
pub trait CodeSource {
    /// Current code bytes of `address`. Empty for accounts without code.
    fn account_code(&self, address: Address) -> Bytes;
}

/// A depositor account as observed when its deposit is routed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccountSnapshot {
    /// The account's L1 address.
    pub address: Address,
    /// Raw code bytes, possibly empty.
    pub code: Bytes,
}

impl AccountSnapshot {
    /// Snapshot of `address` with the given code bytes.
    pub const fn new(address: Address, code: Bytes) -> Self {
        Self { address, code }
    }

    /// Snapshot of an account with an empty code slot.
    pub fn empty(address: Address) -> Self {
        Self { address, code: Bytes::new() }
    }

    /// Reads the current code of `address` through `source`.
    pub fn load(source: &impl CodeSource, address: Address) -> Self {
        Self { address, code: source.account_code(address) }
    }

    /// Length of the code bytes.
    pub fn code_len(&self) -> usize {
        self.code.len()
    }

    /// Classification of this account's code.
    pub fn kind(&self) -> AccountKind {
        AccountKind::classify(&self.code)
    }

    /// The delegate address, for a delegated account.
    pub fn delegate(&self) -> Option<Address> {
        decode_delegation(&self.code).ok()
    }
}
