// Licensed under the Apache-2.0 license

//! OS Abstraction Layer (OSAL) for crypti2c
//!
//! Small set of host facilities the upper layers build on:
//!
//! - [`OctetBuffer`]: owned, length-tagged byte buffer that is wiped when released
//! - [`StdDelay`]: blocking delay provider backed by the standard library
//! - [`OsalError`]: errors raised by these facilities

pub mod error;
pub mod memory;
pub mod time;

// Re-export core types
pub use error::{OsalError, OsalResult};
pub use memory::OctetBuffer;
pub use time::StdDelay;

/// Get OSAL version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
