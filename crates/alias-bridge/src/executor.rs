//! Owner-gated atomic execution of call batches.
//!
//! This is the minimal account logic a delegated account points its
//! designator at: the key that authorized the delegation can run an ordered
//! list of outbound calls as one unit. Either every call succeeds, in order,
//! or the whole batch is discarded — partial application is never observable.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use alloy_primitives::{Address, Bytes, U256};
use auto_impl::auto_impl;
use tracing::{debug, trace};

use crate::events::{CallRecord, CallSink};

/// One unit of outbound work within a batch.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Call {
    /// Address the call is sent to.
    pub target: Address,
    /// Native value transferred with the call.
    pub value: U256,
    /// Opaque payload passed through to the target.
    pub payload: Bytes,
}

/// An ordered list of calls executed as one atomic unit.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    derive_more::Deref,
    derive_more::From,
    derive_more::IntoIterator,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Batch(pub Vec<Call>);

/// The ledger's outbound call primitive.
///
/// Invokes a target with value and payload; the success/failure signal and
/// any returned data are passed through unchanged. State effects of calls
/// that already ran are rolled back by the ledger's transaction revert when
/// the batch fails — the runner does not need its own rollback.
#[auto_impl(&mut, Box)]
pub trait CallRunner {
    /// Error surfaced when an invocation does not succeed.
    type Error;

    /// Invokes `call.target` with `call.value` and `call.payload`, returning
    /// the data the target returned.
    fn run(&mut self, call: &Call) -> Result<Bytes, Self::Error>;
}

/// Failures of [`BatchExecutor::execute_batch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchExecutionError<E> {
    /// The caller is not the owner bound at construction. Checked before any
    /// call runs.
    #[error("caller {caller} is not the executor owner {owner}")]
    Unauthorized {
        /// Identity that attempted the batch.
        caller: Address,
        /// The owner bound at construction.
        owner: Address,
    },
    /// A call did not succeed; the whole batch is discarded.
    #[error("call {index} of the batch failed")]
    ExecutionFailed {
        /// Position of the failing call within the batch.
        index: usize,
        /// The runner's failure, passed through unchanged.
        reason: E,
    },
}

/// The minimal account code of a delegated account: a single owner, bound at
/// construction, may execute batches of outbound calls.
///
/// The executor is active from construction on; there is no teardown and no
/// transfer of ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchExecutor {
    owner: Address,
}

impl BatchExecutor {
    /// Binds `owner` as the only identity allowed to execute batches.
    pub const fn new(owner: Address) -> Self {
        Self { owner }
    }

    /// The owner bound at construction.
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Executes `batch` strictly in order through `runner`.
    ///
    /// Call N+1 observes the state effects of call N (the runner's ledger
    /// guarantees this within one transaction). Records are buffered and only
    /// flushed to `sink` once every call has succeeded: a failure at any
    /// index discards the whole batch and nothing reaches the sink, matching
    /// the ledger-side revert of the calls that already ran.
    pub fn execute_batch<R: CallRunner>(
        &self,
        caller: Address,
        batch: &Batch,
        runner: &mut R,
        sink: &mut impl CallSink,
    ) -> Result<(), BatchExecutionError<R::Error>> {
        if caller != self.owner {
            debug!(%caller, owner = %self.owner, "rejected batch from non-owner");
            return Err(BatchExecutionError::Unauthorized { caller, owner: self.owner });
        }

        let mut records = Vec::with_capacity(batch.len());
        for (index, call) in batch.iter().enumerate() {
            match runner.run(call) {
                Ok(_) => {
                    trace!(index, target = %call.target, "batch call succeeded");
                    records.push(CallRecord {
                        target: call.target,
                        value: call.value,
                        payload: call.payload.clone(),
                    });
                }
                Err(reason) => {
                    debug!(index, target = %call.target, "batch call failed, discarding batch");
                    return Err(BatchExecutionError::ExecutionFailed { index, reason });
                }
            }
        }

        for record in records {
            sink.call_executed(record);
        }
        Ok(())
    }

    /// No-op receive path: the executor accepts unsolicited value transfers
    /// at any time, independent of batch execution.
    pub fn receive(&self, from: Address, value: U256) {
        trace!(%from, %value, "received unsolicited value transfer");
    }
}
