//! Phone number normalization.
//!
//! Numbers are parsed twice if needed: first as if they carried an explicit
//! `+<country code>` prefix, then again assuming the configured default region.
//! The canonical form is the country calling code immediately followed by the
//! national significant number, digits only.

use std::fmt::Display;
use std::str::FromStr;

use phonenumber::{PhoneNumber, country};

use crate::error::{Result, SmsNormError};

/// Region assumed for numbers written without a country code.
pub const DEFAULT_REGION: &str = "US";

/// Parses and formats phone numbers against a fixed default region.
///
/// # Example
///
/// ```rust
/// use smsnorm::normalize::PhoneNormalizer;
///
/// let phones = PhoneNormalizer::default();
/// assert_eq!(phones.normalize("+12129876543").unwrap(), "12129876543");
/// assert_eq!(phones.normalize("(212) 987-6543").unwrap(), "12129876543");
/// assert!(!phones.is_valid("Jun 1 2015"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PhoneNormalizer {
    region: country::Id,
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self {
            region: country::Id::US,
        }
    }
}

impl PhoneNormalizer {
    /// Creates a normalizer that falls back to `region` (ISO 3166 alpha-2).
    pub fn new(region: &str) -> Result<Self> {
        let region = country::Id::from_str(&region.trim().to_uppercase())
            .map_err(|_| SmsNormError::InvalidRegion(region.to_string()))?;
        Ok(Self { region })
    }

    /// Returns the fallback region.
    pub fn region(&self) -> country::Id {
        self.region
    }

    fn parse(&self, raw: &str) -> Result<PhoneNumber> {
        phonenumber::parse(None, raw)
            .or_else(|_| phonenumber::parse(Some(self.region), raw))
            .map_err(|e| SmsNormError::phone_number(raw, e))
    }

    /// Normalizes a phone number to `{country code}{national number}`.
    ///
    /// Accepts anything with a textual form, so numeric inputs such as
    /// `2608941966u64` behave like their decimal string.
    ///
    /// Fails if parsing would drop significant digits: everything before the
    /// national number must be the country code plus at most one trunk digit.
    pub fn normalize(&self, raw: impl Display) -> Result<String> {
        let raw = raw.to_string();
        let number = self.parse(&raw)?;
        let code = number.code().value().to_string();
        let national = number.national().value().to_string();

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let dropped = digits
            .strip_suffix(national.as_str())
            .map(|prefix| prefix.strip_prefix(code.as_str()).unwrap_or(prefix));
        match dropped {
            Some(extra) if extra.len() <= 1 => Ok(format!("{code}{national}")),
            _ => Err(SmsNormError::phone_number(
                raw.as_str(),
                format!("digits lost in normalization to +{code} {national}"),
            )),
        }
    }

    /// Returns `true` if `raw` parses and is a valid, dialable number.
    ///
    /// Never fails: parse errors count as invalid.
    pub fn is_valid(&self, raw: impl Display) -> bool {
        self.parse(&raw.to_string())
            .map(|number| phonenumber::is_valid(&number))
            .unwrap_or(false)
    }
}

/// Normalizes a phone number using the default region.
pub fn normalize_phone_number(raw: impl Display) -> Result<String> {
    PhoneNormalizer::default().normalize(raw)
}

/// Checks a phone number against the default region. Never fails.
pub fn is_valid_phone_number(raw: impl Display) -> bool {
    PhoneNormalizer::default().is_valid(raw)
}
