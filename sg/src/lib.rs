//! SecureGen - credential generation and sandboxed arithmetic
//!
//! Produces passwords, API keys, hex tokens, PINs, UUIDs and digests from a
//! cryptographically secure random source, and evaluates arithmetic
//! expressions against a closed allow-list without any dynamic execution.
//!
//! # Modules
//!
//! - [`random`] - CSPRNG wrapper with bias-free sampling
//! - [`charset`] - Fixed character class tables
//! - [`credential`] - Password, API key, token, PIN and UUID generation
//! - [`hash`] - Hex digests (md5, sha1, sha256, sha512)
//! - [`expr`] - Tokenize / parse / validate / evaluate pipeline
//! - [`batch`] - Repeated generation with per-slot failure isolation
//!
//! # Example
//!
//! ```
//! use securegen::{CredentialGenerator, PasswordSpec, evaluate_expression};
//!
//! let mut generator = CredentialGenerator::new();
//! let password = generator.generate_password(&PasswordSpec::default()).unwrap();
//! assert_eq!(password.len(), 16);
//!
//! let value = evaluate_expression("sqrt(144) + pow(2, 3)").unwrap();
//! assert_eq!(value.as_f64(), 20.0);
//! ```

pub mod batch;
pub mod charset;
pub mod credential;
mod error;
pub mod expr;
pub mod hash;
pub mod random;

pub use batch::{BatchItem, BatchItemError, BatchResult, run_batch, run_requests};
pub use charset::CharacterClass;
pub use credential::{
    CredentialGenerator, CredentialKind, DEFAULT_API_KEY_LENGTH, DEFAULT_PASSWORD_LENGTH, DEFAULT_PIN_LENGTH,
    DEFAULT_TOKEN_BYTES, DEFAULT_UUID_VERSION, GeneratedCredential, GeneratorRequest, MIN_API_KEY_LENGTH,
    MIN_PASSWORD_LENGTH, MIN_PIN_LENGTH, PasswordSpec,
};
pub use error::{GenError, Result};
pub use expr::{Number, Program, evaluate_expression};
pub use hash::{DigestRequest, HashAlgorithm, compute_digest, hash_text};
pub use random::RandomSource;
