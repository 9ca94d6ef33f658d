//! Browser Bindings
//!
//! localStorage-backed services and the remote task fetch, organized by concern.

mod remote;
mod storage;

pub use remote::*;
pub use storage::*;
