//! CredentialGenerator - passwords, API keys, tokens, PINs and UUIDs
//!
//! All randomness comes from a [`RandomSource`]. Each generator owns its source
//! exclusively; create one per call or per worker thread.

use rand::rngs::ThreadRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::charset::{ALPHANUMERIC, CharacterClass};
use crate::random::RandomSource;
use crate::{GenError, Result};

/// Default UUID version
pub const DEFAULT_UUID_VERSION: u8 = 4;

/// Default password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Default API key length
pub const DEFAULT_API_KEY_LENGTH: usize = 32;

/// Default token length in bytes (hex output is twice as long)
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Default PIN length
pub const DEFAULT_PIN_LENGTH: usize = 6;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_API_KEY_LENGTH: usize = 16;
pub const MIN_PIN_LENGTH: usize = 4;

/// Password length and the character classes it must draw from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordSpec {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordSpec {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordSpec {
    /// Spec of the given length with every class selected
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Selected classes in seeding order
    pub fn classes(&self) -> Vec<CharacterClass> {
        let flags = [self.uppercase, self.lowercase, self.digits, self.symbols];
        CharacterClass::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(class, selected)| selected.then_some(class))
            .collect()
    }

    /// Check the length minimum and that at least one class is selected
    pub fn validate(&self) -> Result<()> {
        if self.length < MIN_PASSWORD_LENGTH {
            return Err(GenError::InvalidSpec(format!(
                "Password length must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if self.classes().is_empty() {
            return Err(GenError::InvalidSpec(
                "At least one character type must be selected".to_string(),
            ));
        }
        Ok(())
    }
}

/// Kind of credential produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKind {
    Password,
    ApiKey,
    Token,
    Pin,
    Uuid,
}

impl CredentialKind {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::ApiKey => "api_key",
            Self::Token => "token",
            Self::Pin => "pin",
            Self::Uuid => "uuid",
        }
    }
}

impl std::fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A generator selector together with its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorRequest {
    Uuid { version: u8 },
    Password(PasswordSpec),
    ApiKey { length: usize },
    Token { length_bytes: usize },
    Pin { length: usize },
}

impl GeneratorRequest {
    pub fn kind(&self) -> CredentialKind {
        match self {
            Self::Uuid { .. } => CredentialKind::Uuid,
            Self::Password(_) => CredentialKind::Password,
            Self::ApiKey { .. } => CredentialKind::ApiKey,
            Self::Token { .. } => CredentialKind::Token,
            Self::Pin { .. } => CredentialKind::Pin,
        }
    }
}

/// A produced credential and the request it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCredential {
    kind: CredentialKind,
    value: String,
    source: GeneratorRequest,
}

impl GeneratedCredential {
    pub fn kind(&self) -> CredentialKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> &GeneratorRequest {
        &self.source
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl std::fmt::Display for GeneratedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Generates credentials from an exclusively owned random source
#[derive(Debug)]
pub struct CredentialGenerator<R = ThreadRng> {
    source: RandomSource<R>,
}

impl CredentialGenerator<ThreadRng> {
    /// Generator backed by the thread-local CSPRNG
    pub fn new() -> Self {
        Self {
            source: RandomSource::new(),
        }
    }
}

impl Default for CredentialGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> CredentialGenerator<R> {
    pub fn with_source(source: RandomSource<R>) -> Self {
        Self { source }
    }

    /// Canonical hyphenated UUID, version 1 (time-based) or 4 (random)
    pub fn generate_uuid(&mut self, version: u8) -> Result<String> {
        debug!(version, "generate_uuid: called");
        match version {
            1 => {
                // No hardware address is read; a random node id must have the multicast bit set
                let mut node = [0u8; 6];
                self.source.fill_bytes(&mut node);
                node[0] |= 0x01;
                Ok(Uuid::now_v1(&node).to_string())
            }
            4 => {
                let mut bytes = [0u8; 16];
                self.source.fill_bytes(&mut bytes);
                Ok(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
            }
            other => Err(GenError::UnsupportedVersion { version: other }),
        }
    }

    /// Password of exactly `spec.length` characters containing every selected class
    ///
    /// One character is drawn from each selected class, the rest from the union
    /// of selected classes, and the whole buffer is then Fisher-Yates shuffled
    /// so the mandatory characters land at uniformly random positions.
    pub fn generate_password(&mut self, spec: &PasswordSpec) -> Result<String> {
        debug!(length = spec.length, "generate_password: called");
        spec.validate()?;

        let classes = spec.classes();
        let pool: Vec<u8> = classes.iter().flat_map(|class| class.chars().iter().copied()).collect();

        let mut buf = Vec::with_capacity(spec.length);
        for class in &classes {
            buf.push(self.source.choose_one(class.chars())?);
        }
        while buf.len() < spec.length {
            buf.push(self.source.choose_one(&pool)?);
        }

        for i in (1..buf.len()).rev() {
            let j = self.source.uniform_index(i + 1)?;
            buf.swap(i, j);
        }

        Ok(ascii_string(buf))
    }

    /// Alphanumeric API key of exactly `length` characters
    pub fn generate_api_key(&mut self, length: usize) -> Result<String> {
        debug!(length, "generate_api_key: called");
        if length < MIN_API_KEY_LENGTH {
            return Err(GenError::InvalidSpec(format!(
                "API key length must be at least {} characters",
                MIN_API_KEY_LENGTH
            )));
        }
        self.draw(ALPHANUMERIC, length)
    }

    /// Hex token from `length_bytes` random bytes (`2 * length_bytes` characters)
    pub fn generate_token(&mut self, length_bytes: usize) -> Result<String> {
        debug!(length_bytes, "generate_token: called");
        if length_bytes == 0 {
            return Err(GenError::InvalidArgument("Token length must be at least 1 byte".to_string()));
        }
        self.source.hex_bytes(length_bytes)
    }

    /// Numeric PIN of exactly `length` digits
    pub fn generate_pin(&mut self, length: usize) -> Result<String> {
        debug!(length, "generate_pin: called");
        if length < MIN_PIN_LENGTH {
            return Err(GenError::InvalidSpec(format!(
                "PIN length must be at least {} digits",
                MIN_PIN_LENGTH
            )));
        }
        self.draw(CharacterClass::Digit.chars(), length)
    }

    /// Run the operation named by `request`
    pub fn generate(&mut self, request: &GeneratorRequest) -> Result<GeneratedCredential> {
        let value = match request {
            GeneratorRequest::Uuid { version } => self.generate_uuid(*version)?,
            GeneratorRequest::Password(spec) => self.generate_password(spec)?,
            GeneratorRequest::ApiKey { length } => self.generate_api_key(*length)?,
            GeneratorRequest::Token { length_bytes } => self.generate_token(*length_bytes)?,
            GeneratorRequest::Pin { length } => self.generate_pin(*length)?,
        };
        Ok(GeneratedCredential {
            kind: request.kind(),
            value,
            source: request.clone(),
        })
    }

    fn draw(&mut self, alphabet: &[u8], length: usize) -> Result<String> {
        let buf = (0..length)
            .map(|_| self.source.choose_one(alphabet))
            .collect::<Result<Vec<u8>>>()?;
        Ok(ascii_string(buf))
    }
}

// Every table is ASCII, so each byte maps to one char
fn ascii_string(buf: Vec<u8>) -> String {
    buf.into_iter().map(char::from).collect()
}
