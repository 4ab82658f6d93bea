//! Content hashing compatible with git blob object ids
//!
//! digest = SHA-1("blob " || decimal(len) || NUL || content)
//!
//! The header carries the content length, so the whole buffer must be known before
//! hashing begins. This reproduces git's addressing so a manifest can be checked
//! against any git object store externally.

use sha1::{Digest, Sha1};
use std::fmt;

/// Length of a blob digest in bytes (160-bit SHA-1).
pub const DIGEST_LEN: usize = 20;

/// A git blob object id.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct BlobDigest([u8; DIGEST_LEN]);

impl BlobDigest {
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex, 40 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 40-character hex digest (either case).
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for BlobDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlobDigest({})", self.to_hex())
    }
}

impl fmt::Display for BlobDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the blob digest of `content`.
pub fn compute_blob_digest(content: &[u8]) -> BlobDigest {
    let mut hasher = Sha1::new();
    hasher.update(b"blob ");
    hasher.update(content.len().to_string().as_bytes());
    hasher.update([0u8]);
    hasher.update(content);
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&hasher.finalize());
    BlobDigest(bytes)
}

/// Compute the blob digest of `content` as lowercase hex.
pub fn hash_blob(content: &[u8]) -> String {
    compute_blob_digest(content).to_hex()
}
