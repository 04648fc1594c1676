//! Version-4 identifier credentials.
//!
//! # Responsibility
//! - Provide the `is_valid_credential` predicate gating login.
//! - Provide a typed `Credential` holding the canonical token.
//!
//! # Invariants
//! - Hyphens are stripped before any check; their positions are ignored.
//! - Only version `4` with variant nibble `8|9|a|b` is accepted.
//!
//! # See also
//! - RFC 4122 section 4.4

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use uuid::Uuid;

static HEX32_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{32}$").expect("valid hex32 regex"));

const VERSION_NIBBLE_INDEX: usize = 12;
const VARIANT_NIBBLE_INDEX: usize = 16;

/// Reason a raw token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// Input is empty after trimming.
    Empty,
    /// Not exactly 32 hex digits once hyphens are removed.
    Malformed,
    /// Version nibble is not `4`.
    UnsupportedVersion(char),
    /// Variant nibble is not one of `8|9|a|b`.
    UnsupportedVariant(char),
}

impl Display for CredentialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "credential is empty"),
            Self::Malformed => write!(f, "credential must contain exactly 32 hex digits"),
            Self::UnsupportedVersion(value) => {
                write!(f, "credential version `{value}` is not supported")
            }
            Self::UnsupportedVariant(value) => {
                write!(f, "credential variant `{value}` is not supported")
            }
        }
    }
}

impl Error for CredentialError {}

/// Validated access token.
///
/// `Debug` is redacted so the token never reaches logs by accident.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credential(Uuid);

impl Credential {
    /// Validates `raw` and returns its canonical form.
    ///
    /// # Errors
    /// - Returns the first failing check, in order: empty, shape, version,
    ///   variant.
    pub fn parse(raw: &str) -> Result<Self, CredentialError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty);
        }

        let stripped = trimmed.replace('-', "");
        if !HEX32_RE.is_match(&stripped) {
            return Err(CredentialError::Malformed);
        }

        let stripped = stripped.to_ascii_lowercase();
        let nibbles = stripped.as_bytes();
        let version = char::from(nibbles[VERSION_NIBBLE_INDEX]);
        if version != '4' {
            return Err(CredentialError::UnsupportedVersion(version));
        }
        let variant = char::from(nibbles[VARIANT_NIBBLE_INDEX]);
        if !matches!(variant, '8' | '9' | 'a' | 'b') {
            return Err(CredentialError::UnsupportedVariant(variant));
        }

        Uuid::try_parse(&stripped)
            .map(Self)
            .map_err(|_| CredentialError::Malformed)
    }

    /// UUID version nibble; always 4 for a parsed credential.
    pub fn version(&self) -> usize {
        self.0.get_version_num()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Returns whether `raw` is an acceptable login credential.
pub fn is_valid_credential(raw: &str) -> bool {
    Credential::parse(raw).is_ok()
}
