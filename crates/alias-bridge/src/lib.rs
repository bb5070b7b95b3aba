//! Account classification and deposit aliasing for the L2 bridge.
//!
//! The bridge must tell three account shapes apart from raw L1 bytecode: a
//! plain externally owned account, an account whose code slot holds a
//! delegation designator, and a genuine contract. That classification decides
//! whether a deposit's recipient address is shifted by the aliasing offset
//! when it is credited on L2. The crate also carries the minimal owner-gated
//! batch executor a delegated account installs as its code.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg_attr(not(feature = "std"), macro_use)]
#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod constants;

mod account;
pub use account::*;

mod alias;
pub use alias::*;

mod delegation;
pub use delegation::*;

mod events;
pub use events::*;

mod executor;
pub use executor::*;

mod router;
pub use router::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
