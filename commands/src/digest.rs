// Licensed under the Apache-2.0 license

//! Digest provider

use sha2::{Digest, Sha256};
use std::io::{self, Read};

/// Output length of the device's hash
pub const DIGEST_SIZE: usize = 32;

const READ_CHUNK_SIZE: usize = 4096;

/// Computes SHA-256 over buffers and streams
pub trait DigestProvider {
    fn digest(&self, data: &[u8]) -> [u8; DIGEST_SIZE];

    fn digest_reader(&self, reader: &mut dyn Read) -> io::Result<[u8; DIGEST_SIZE]>;
}

/// Software SHA-256 from the `sha2` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Provider;

impl DigestProvider for Sha256Provider {
    fn digest(&self, data: &[u8]) -> [u8; DIGEST_SIZE] {
        Sha256::digest(data).into()
    }

    fn digest_reader(&self, reader: &mut dyn Read) -> io::Result<[u8; DIGEST_SIZE]> {
        let mut hasher = Sha256::new();
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => hasher.update(&chunk[..n]),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(hasher.finalize().into())
    }
}
