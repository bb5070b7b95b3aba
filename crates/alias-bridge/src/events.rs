//! Observable records appended to the ledger's log sink.
//!
//! The routers and the batch executor do not move value themselves; their
//! observable output is the decision they return and the records they append.
//! Each record type has a typed in-memory form and an ABI-encoded wire form
//! declared with `sol!`.

use alloy_primitives::{Address, Bytes, LogData, U256};
use alloy_sol_types::{sol, SolEvent};
use auto_impl::auto_impl;

use crate::account::AccountKind;

sol! {
    /// Wire form of the legacy deposit record. Predates classification, so it
    /// carries no account-kind field; the schema difference is intentional and
    /// consumers of the old schema rely on it.
    event DepositRouted(address indexed depositor, address indexed recipient, uint256 amount);

    /// Wire form of the current deposit record, carrying the classification
    /// the routing decision was made on.
    event DepositRoutedV2(address indexed depositor, address indexed recipient, uint256 amount, uint8 kind);

    /// Wire form of one successfully executed call of a batch.
    event CallExecuted(address indexed target, uint256 value, bytes payload);
}

/// Legacy deposit record, without the account kind.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LegacyDepositRecord {
    /// The depositing L1 account.
    pub depositor: Address,
    /// The L2 address the deposit credits.
    pub recipient: Address,
    /// The deposited amount.
    pub amount: U256,
}

impl LegacyDepositRecord {
    /// ABI-encoded wire form ([`DepositRouted`]).
    pub fn to_log_data(&self) -> LogData {
        DepositRouted {
            depositor: self.depositor,
            recipient: self.recipient,
            amount: self.amount,
        }
        .encode_log_data()
    }
}

/// Current deposit record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DepositRecord {
    /// The depositing L1 account.
    pub depositor: Address,
    /// The L2 address the deposit credits.
    pub recipient: Address,
    /// The deposited amount.
    pub amount: U256,
    /// Classification of the depositor at routing time.
    pub kind: AccountKind,
}

impl DepositRecord {
    /// ABI-encoded wire form ([`DepositRoutedV2`]).
    pub fn to_log_data(&self) -> LogData {
        DepositRoutedV2 {
            depositor: self.depositor,
            recipient: self.recipient,
            amount: self.amount,
            kind: self.kind.as_u8(),
        }
        .encode_log_data()
    }
}

/// Record of one call executed within a batch.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CallRecord {
    /// Address the call was sent to.
    pub target: Address,
    /// Native value transferred with the call.
    pub value: U256,
    /// Payload passed through to the target.
    pub payload: Bytes,
}

impl CallRecord {
    /// ABI-encoded wire form ([`CallExecuted`]).
    pub fn to_log_data(&self) -> LogData {
        CallExecuted { target: self.target, value: self.value, payload: self.payload.clone() }
            .encode_log_data()
    }
}

/// Append-only sink for deposit records.
#[auto_impl(&mut, Box)]
pub trait DepositSink {
    /// Appends a legacy-schema record.
    fn legacy_deposit(&mut self, record: LegacyDepositRecord);

    /// Appends a current-schema record.
    fn deposit(&mut self, record: DepositRecord);
}

/// Append-only sink for per-call records of a batch.
#[auto_impl(&mut, Box)]
pub trait CallSink {
    /// Appends the record of one successfully executed call.
    fn call_executed(&mut self, record: CallRecord);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_event_signatures() {
        assert_eq!(DepositRouted::SIGNATURE, "DepositRouted(address,address,uint256)");
        assert_eq!(DepositRoutedV2::SIGNATURE, "DepositRoutedV2(address,address,uint256,uint8)");
        assert_eq!(CallExecuted::SIGNATURE, "CallExecuted(address,uint256,bytes)");
    }

    #[test]
    fn test_legacy_record_wire_form_has_no_kind() {
        let record = LegacyDepositRecord {
            depositor: address!("0x00000000000000000000000000000000000000aa"),
            recipient: address!("0x00000000000000000000000000000000000000bb"),
            amount: U256::from(7),
        };
        let log = record.to_log_data();

        // Selector topic plus the two indexed addresses; the data section is
        // the single 32-byte amount word.
        assert_eq!(log.topics().len(), 3);
        assert_eq!(log.topics()[0], DepositRouted::SIGNATURE_HASH);
        assert_eq!(log.data.len(), 32);
    }

    #[test]
    fn test_current_record_wire_form_carries_kind() {
        let record = DepositRecord {
            depositor: address!("0x00000000000000000000000000000000000000aa"),
            recipient: address!("0x00000000000000000000000000000000000000bb"),
            amount: U256::from(7),
            kind: AccountKind::Delegated,
        };
        let log = record.to_log_data();

        assert_eq!(log.topics()[0], DepositRoutedV2::SIGNATURE_HASH);
        // Amount word plus the kind word.
        assert_eq!(log.data.len(), 64);
        assert_eq!(log.data[63], AccountKind::Delegated.as_u8());
    }

    #[test]
    fn test_call_record_wire_form() {
        let record = CallRecord {
            target: address!("0x00000000000000000000000000000000000000cc"),
            value: U256::ZERO,
            payload: Bytes::from_static(&[0xde, 0xad]),
        };
        let log = record.to_log_data();

        assert_eq!(log.topics().len(), 2);
        assert_eq!(log.topics()[0], CallExecuted::SIGNATURE_HASH);
    }
}
