//! Test utilities: in-memory stand-ins for the ledger collaborators.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use alloy_primitives::{
    map::{HashMap, HashSet},
    Address, Bytes,
};

use crate::{
    account::CodeSource,
    events::{CallRecord, CallSink, DepositRecord, DepositSink, LegacyDepositRecord},
    executor::{Call, CallRunner},
};

/// In-memory ledger: account code plus a scriptable outbound call primitive.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    code: HashMap<Address, Bytes>,
    failing: HashSet<Address>,
    calls: Vec<Call>,
}

impl MemoryLedger {
    /// Sets the code bytes of `address`.
    pub fn set_code(&mut self, address: Address, code: Bytes) -> &mut Self {
        self.code.insert(address, code);
        self
    }

    /// Marks `address` so every call to it fails.
    pub fn set_failing(&mut self, address: Address) -> &mut Self {
        self.failing.insert(address);
        self
    }

    /// Every call the runner has seen, in order, including failed ones.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }
}

impl CodeSource for MemoryLedger {
    fn account_code(&self, address: Address) -> Bytes {
        self.code.get(&address).cloned().unwrap_or_default()
    }
}

/// Failure the in-memory runner reports for targets scripted to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("target {target} reverted")]
pub struct MemoryCallError {
    /// The target whose invocation failed.
    pub target: Address,
}

impl CallRunner for MemoryLedger {
    type Error = MemoryCallError;

    fn run(&mut self, call: &Call) -> Result<Bytes, MemoryCallError> {
        self.calls.push(call.clone());
        if self.failing.contains(&call.target) {
            Err(MemoryCallError { target: call.target })
        } else {
            Ok(Bytes::new())
        }
    }
}

/// Sink keeping every appended record, for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Legacy-schema deposit records, in append order.
    pub legacy_deposits: Vec<LegacyDepositRecord>,
    /// Current-schema deposit records, in append order.
    pub deposits: Vec<DepositRecord>,
    /// Per-call batch records, in append order.
    pub calls: Vec<CallRecord>,
}

impl DepositSink for RecordingSink {
    fn legacy_deposit(&mut self, record: LegacyDepositRecord) {
        self.legacy_deposits.push(record);
    }

    fn deposit(&mut self, record: DepositRecord) {
        self.deposits.push(record);
    }
}

impl CallSink for RecordingSink {
    fn call_executed(&mut self, record: CallRecord) {
        self.calls.push(record);
    }
}
