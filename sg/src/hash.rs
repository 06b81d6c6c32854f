//! HashEngine - hex digests of UTF-8 text

use std::str::FromStr;

use digest::Digest;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use tracing::debug;

use crate::{GenError, Result};

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Length of the hex digest in characters
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
            Self::Sha512 => 128,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(GenError::UnsupportedAlgorithm { name: s.to_string() }),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text to hash and the algorithm to hash it with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestRequest {
    pub text: String,
    #[serde(default)]
    pub algorithm: HashAlgorithm,
}

impl DigestRequest {
    pub fn new(text: impl Into<String>, algorithm: HashAlgorithm) -> Self {
        Self {
            text: text.into(),
            algorithm,
        }
    }
}

/// Lowercase hex digest of `request.text`
pub fn compute_digest(request: &DigestRequest) -> String {
    debug!(algorithm = %request.algorithm, len = request.text.len(), "compute_digest: called");
    let bytes = request.text.as_bytes();
    match request.algorithm {
        HashAlgorithm::Md5 => hex_digest::<Md5>(bytes),
        HashAlgorithm::Sha1 => hex_digest::<Sha1>(bytes),
        HashAlgorithm::Sha256 => hex_digest::<Sha256>(bytes),
        HashAlgorithm::Sha512 => hex_digest::<Sha512>(bytes),
    }
}

/// Hash `text` with the algorithm named by `algorithm`
pub fn hash_text(text: &str, algorithm: &str) -> Result<String> {
    let algorithm = algorithm.parse::<HashAlgorithm>()?;
    Ok(compute_digest(&DigestRequest::new(text, algorithm)))
}

fn hex_digest<D: Digest>(bytes: &[u8]) -> String {
    hex::encode(D::digest(bytes))
}
