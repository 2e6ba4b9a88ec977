// Licensed under the Apache-2.0 license

//! Owned byte buffers
//!
//! [`OctetBuffer`] is the unit of data exchange between the layers: command payloads,
//! device responses, digests and key material all travel in one. The buffer owns its
//! bytes, its length is always the number of bytes it holds, and the contents are
//! zeroized when the owner releases it.

use crate::error::{OsalError, OsalResult};
use core::fmt;
use core::ops::Range;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Owned, length-tagged byte buffer that is wiped on release
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct OctetBuffer {
    data: Vec<u8>,
}

impl OctetBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a buffer of `len` zero bytes
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0u8; len],
        }
    }

    /// Create a buffer holding a copy of `bytes`
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }

    /// Take ownership of `data`
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Copy a sub-range of this buffer into a new buffer
    pub fn slice(&self, range: Range<usize>) -> OsalResult<Self> {
        let len = self.data.len();
        self.data
            .get(range.clone())
            .map(Self::from_slice)
            .ok_or(OsalError::OutOfBounds {
                start: range.start,
                end: range.end,
                len,
            })
    }

    /// Append bytes to the end of the buffer
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Get buffer data as slice
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get buffer data as mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get current buffer size
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Overwrite the contents with zeros, keeping the length
    pub fn wipe(&mut self) {
        self.data.as_mut_slice().zeroize();
    }

    /// Copy the contents into a fixed-size array
    pub fn to_array<const N: usize>(&self) -> OsalResult<[u8; N]> {
        self.data
            .as_slice()
            .try_into()
            .map_err(|_| OsalError::InvalidParameter("buffer length does not match array size"))
    }

    /// Compare against `other` in time independent of where the contents differ
    ///
    /// Buffers of different lengths compare unequal; the length itself is not secret.
    pub fn ct_eq(&self, other: &[u8]) -> bool {
        constant_time_eq::constant_time_eq(&self.data, other)
    }
}

impl AsRef<[u8]> for OctetBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for OctetBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for OctetBuffer {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_slice(&bytes)
    }
}

impl From<Vec<u8>> for OctetBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::from_vec(data)
    }
}

// Contents may be key material, so only the length is printed.
impl fmt::Debug for OctetBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OctetBuffer")
            .field("len", &self.data.len())
            .finish()
    }
}
