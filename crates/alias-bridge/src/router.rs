//! Deposit routing: deciding which L2 address a deposit credits.
//!
//! Two router variants share one signature. [`LegacyDepositRouter`] aliases
//! whenever the depositor has code of any length, which misroutes delegated
//! accounts. [`DepositRouter`] classifies the depositor first and aliases
//! only genuine contracts. Neither variant moves value; the ledger's native
//! transfer mechanism acts on the returned decision.

use alloy_primitives::{Address, U256};
use tracing::debug;

use crate::{
    account::{has_code, AccountSnapshot},
    alias::apply_l1_to_l2_alias,
    events::{DepositRecord, DepositSink, LegacyDepositRecord},
};

/// Routing failure shared by both router variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DepositError {
    /// Deposits of zero value are rejected before a recipient is computed.
    #[error("deposit amount must be nonzero")]
    ZeroDepositAmount,
}

/// Outcome of routing one deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DepositDecision {
    /// The L2 address the deposit is credited to.
    pub recipient: Address,
    /// Whether the aliasing transform was applied to the depositor address.
    pub aliased: bool,
}

/// The deposit router predating account classification.
///
/// It treats any account with nonzero code length as a contract. A delegated
/// account carries a 23-byte designator, so its deposit gets aliased and
/// credits an L2 address the depositor's key does not control. Kept for the
/// legacy event schema and as the regression baseline for [`DepositRouter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacyDepositRouter;

impl LegacyDepositRouter {
    /// Routes `amount` from `depositor`, aliasing whenever the account has
    /// code. Appends one legacy-schema record to `sink`.
    pub fn route(
        &self,
        depositor: &AccountSnapshot,
        amount: U256,
        sink: &mut impl DepositSink,
    ) -> Result<DepositDecision, DepositError> {
        if amount.is_zero() {
            return Err(DepositError::ZeroDepositAmount);
        }

        let aliased = has_code(depositor.code_len());
        let recipient =
            if aliased { apply_l1_to_l2_alias(depositor.address) } else { depositor.address };
        debug!(depositor = %depositor.address, %recipient, aliased, "routed deposit (legacy)");

        sink.legacy_deposit(LegacyDepositRecord {
            depositor: depositor.address,
            recipient,
            amount,
        });
        Ok(DepositDecision { recipient, aliased })
    }
}

/// Configuration for [`DepositRouter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DepositRouterConfig {
    /// Also append the legacy (kind-less) record next to the current one,
    /// for consumers that still ingest the old schema.
    pub emit_legacy_schema: bool,
}

/// The corrected deposit router.
///
/// Classifies the depositor first and applies the alias only to genuine
/// contract accounts; plain and delegated accounts keep their own address on
/// L2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepositRouter {
    config: DepositRouterConfig,
}

impl DepositRouter {
    /// Router with the given configuration.
    pub const fn new(config: DepositRouterConfig) -> Self {
        Self { config }
    }

    /// Routes `amount` from `depositor`, aliasing only when the depositor
    /// classifies as a contract. Appends one current-schema record to `sink`
    /// (plus a legacy record when configured).
    pub fn route(
        &self,
        depositor: &AccountSnapshot,
        amount: U256,
        sink: &mut impl DepositSink,
    ) -> Result<DepositDecision, DepositError> {
        if amount.is_zero() {
            return Err(DepositError::ZeroDepositAmount);
        }

        let kind = depositor.kind();
        let aliased = kind.is_contract();
        let recipient =
            if aliased { apply_l1_to_l2_alias(depositor.address) } else { depositor.address };
        debug!(depositor = %depositor.address, %recipient, aliased, ?kind, "routed deposit");

        if self.config.emit_legacy_schema {
            sink.legacy_deposit(LegacyDepositRecord {
                depositor: depositor.address,
                recipient,
                amount,
            });
        }
        sink.deposit(DepositRecord { depositor: depositor.address, recipient, amount, kind });
        Ok(DepositDecision { recipient, aliased })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{delegation::encode_delegation, test_utils::RecordingSink};
    use alloy_primitives::address;

    #[test]
    fn test_both_routers_reject_zero_amount() {
        let depositor =
            AccountSnapshot::empty(address!("0x00000000000000000000000000000000000000aa"));
        let mut sink = RecordingSink::default();

        assert_eq!(
            LegacyDepositRouter.route(&depositor, U256::ZERO, &mut sink),
            Err(DepositError::ZeroDepositAmount)
        );
        assert_eq!(
            DepositRouter::default().route(&depositor, U256::ZERO, &mut sink),
            Err(DepositError::ZeroDepositAmount)
        );
        // Nothing reached the sink.
        assert!(sink.legacy_deposits.is_empty());
        assert!(sink.deposits.is_empty());
    }

    #[test]
    fn test_legacy_router_aliases_delegated_depositor() {
        let owner = address!("0x00000000000000000000000000000000000000aa");
        let delegate = address!("0x00000000000000000000000000000000000000bb");
        let depositor = AccountSnapshot::new(owner, encode_delegation(delegate).to_vec().into());
        let mut sink = RecordingSink::default();

        let decision =
            LegacyDepositRouter.route(&depositor, U256::from(1), &mut sink).unwrap();
        assert!(decision.aliased);
        assert_ne!(decision.recipient, owner);
    }

    #[test]
    fn test_corrected_router_keeps_delegated_depositor() {
        let owner = address!("0x00000000000000000000000000000000000000aa");
        let delegate = address!("0x00000000000000000000000000000000000000bb");
        let depositor = AccountSnapshot::new(owner, encode_delegation(delegate).to_vec().into());
        let mut sink = RecordingSink::default();

        let decision =
            DepositRouter::default().route(&depositor, U256::from(1), &mut sink).unwrap();
        assert!(!decision.aliased);
        assert_eq!(decision.recipient, owner);
    }

    #[test]
    fn test_corrected_router_emits_legacy_schema_when_configured() {
        let depositor =
            AccountSnapshot::empty(address!("0x00000000000000000000000000000000000000aa"));
        let router = DepositRouter::new(DepositRouterConfig { emit_legacy_schema: true });
        let mut sink = RecordingSink::default();

        router.route(&depositor, U256::from(5), &mut sink).unwrap();
        assert_eq!(sink.legacy_deposits.len(), 1);
        assert_eq!(sink.deposits.len(), 1);
        assert_eq!(sink.legacy_deposits[0].recipient, sink.deposits[0].recipient);
    }
}
