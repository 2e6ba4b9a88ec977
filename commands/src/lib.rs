// Licensed under the Apache-2.0 license

//! crypti2c Commands Layer
//!
//! Host-side MAC reproduction for challenge-response verification, and the high-level
//! command API built on a session.

// Re-export command types for convenience
pub use crypti2c_command_types::*;

pub mod api;
pub mod challenge_response;
pub mod digest;

pub use challenge_response::{
    compute_challenge_response_digest, verify_default_challenge_response,
    ChallengeResponseEngine,
};
pub use digest::{DigestProvider, Sha256Provider, DIGEST_SIZE};
