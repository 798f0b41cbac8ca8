//! # Identity newtypes
//!
//! Domain-primitive newtypes for the values that go to the NVI KPS Public
//! verification service. String-based identifiers validate format at
//! construction time; a constructed value is always transmittable.
//!
//! ## Format reference
//!
//! - TC Kimlik No: Turkish national identity number, 11 decimal digits
//! - Birth year: 4 decimal digits (1000–9999)
//! - Person names: trimmed, upper-cased, non-empty

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Turkish national identity number (TC Kimlik No).
///
/// First-class identifier for NVI KPS integration. Validated at
/// construction to be exactly 11 decimal digits.
///
/// # Validation
///
/// - Must be exactly 11 digits (0-9)
/// - Must not start with `0`: the number is an 11-digit unsigned integer,
///   so a leading zero cannot occur in its rendered form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TcKimlikNo(String);

impl_validating_deserialize!(TcKimlikNo);

impl TcKimlikNo {
    /// Create a TC Kimlik No from a string value, validating the 11-digit
    /// format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIdentityNumber`] if the string is
    /// not exactly 11 digits or starts with a zero.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.len() != 11 || !s.bytes().all(|b| b.is_ascii_digit()) || s.starts_with('0') {
            return Err(ValidationError::InvalidIdentityNumber(s));
        }
        Ok(Self(s))
    }

    /// Create a TC Kimlik No from its numeric form, validating that it
    /// renders as exactly 11 decimal digits.
    pub fn from_u64(value: u64) -> Result<Self, ValidationError> {
        Self::new(value.to_string())
    }

    /// Access the identity number as its 11-digit string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TcKimlikNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person name in the normalized form the KPS service expects.
///
/// Stored trimmed and upper-cased; normalization is idempotent, so
/// re-constructing from `as_str()` yields the same value. Upper-casing
/// uses Unicode case mapping, locale-independent rather than Turkish
/// locale rules: `i` maps to `I`, never `İ`.
///
/// The service interpolates name text verbatim into its XML envelope, so
/// values containing markup-breaking characters (`<`, `&`) are the
/// caller's responsibility to avoid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PersonName(String);

impl_validating_deserialize!(PersonName);

impl PersonName {
    /// Create a normalized person name: trim surrounding whitespace,
    /// upper-case, reject blank results.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankName`] if the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let normalized = value.into().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(Self(normalized))
    }

    /// Access the normalized (trimmed, upper-cased) name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A birth year that renders as exactly 4 decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthYear(u16);

impl BirthYear {
    /// Create a birth year, validating the 4-digit range (1000–9999).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBirthYear`] if the year is
    /// outside the range.
    pub fn new(year: u16) -> Result<Self, ValidationError> {
        if !(1000..=9999).contains(&year) {
            return Err(ValidationError::InvalidBirthYear(year));
        }
        Ok(Self(year))
    }

    /// Access the year value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl<'de> Deserialize<'de> for BirthYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u16::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for BirthYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- TcKimlikNo -------------------------------------------------------------

    #[test]
    fn tc_kimlik_no_accepts_11_digits() {
        let id = TcKimlikNo::new("12345678901").expect("valid identity number");
        assert_eq!(id.as_str(), "12345678901");
    }

    #[test]
    fn tc_kimlik_no_rejects_too_short() {
        let result = TcKimlikNo::new("1234567890");
        assert!(matches!(
            result,
            Err(ValidationError::InvalidIdentityNumber(_))
        ));
    }

    #[test]
    fn tc_kimlik_no_rejects_too_long() {
        assert!(TcKimlikNo::new("123456789012").is_err());
    }

    #[test]
    fn tc_kimlik_no_rejects_non_digits() {
        assert!(TcKimlikNo::new("1234567890a").is_err());
    }

    #[test]
    fn tc_kimlik_no_rejects_leading_zero() {
        assert!(TcKimlikNo::new("01234567890").is_err());
    }

    #[test]
    fn tc_kimlik_no_from_u64() {
        let id = TcKimlikNo::from_u64(12345678901).expect("valid");
        assert_eq!(id.as_str(), "12345678901");
    }

    #[test]
    fn tc_kimlik_no_from_u64_rejects_short_number() {
        // Renders as 10 digits.
        assert!(TcKimlikNo::from_u64(1234567890).is_err());
    }

    #[test]
    fn tc_kimlik_no_error_message() {
        let err = TcKimlikNo::new("123").unwrap_err();
        assert_eq!(err.to_string(), "identity number must be 11 digits");
    }

    #[test]
    fn tc_kimlik_no_validating_deserialize_rejects_invalid() {
        let result: Result<TcKimlikNo, _> = serde_json::from_str(r#""123""#);
        assert!(result.is_err());
    }

    #[test]
    fn tc_kimlik_no_serde_round_trip() {
        let id = TcKimlikNo::new("12345678901").expect("valid");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, r#""12345678901""#);
        let back: TcKimlikNo = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    // -- PersonName -------------------------------------------------------------

    #[test]
    fn person_name_trims_and_upper_cases() {
        let name = PersonName::new(" ali ").expect("valid name");
        assert_eq!(name.as_str(), "ALI");
    }

    #[test]
    fn person_name_rejects_blank() {
        assert!(matches!(
            PersonName::new(""),
            Err(ValidationError::BlankName)
        ));
        assert!(PersonName::new("   ").is_err());
        assert!(PersonName::new("\t\n").is_err());
    }

    #[test]
    fn person_name_normalization_is_idempotent() {
        let once = PersonName::new(" veli ").expect("valid");
        let twice = PersonName::new(once.as_str()).expect("still valid");
        assert_eq!(once, twice);
    }

    #[test]
    fn person_name_keeps_turkish_letters() {
        let name = PersonName::new("yılmaz").expect("valid");
        assert_eq!(name.as_str(), "YILMAZ");
    }

    #[test]
    fn person_name_dotless_i_maps_to_ascii_i() {
        // Locale-independent case mapping, not tr-TR: 'i' -> 'I'.
        let name = PersonName::new("ali").expect("valid");
        assert_eq!(name.as_str(), "ALI");
    }

    #[test]
    fn person_name_uses_full_case_mapping() {
        // Full Unicode case mapping may grow the string.
        let name = PersonName::new("straße").expect("valid");
        assert_eq!(name.as_str(), "STRASSE");
    }

    // -- BirthYear --------------------------------------------------------------

    #[test]
    fn birth_year_accepts_4_digit_years() {
        assert!(BirthYear::new(1000).is_ok());
        assert!(BirthYear::new(1990).is_ok());
        assert!(BirthYear::new(9999).is_ok());
    }

    #[test]
    fn birth_year_rejects_out_of_range() {
        assert!(matches!(
            BirthYear::new(999),
            Err(ValidationError::InvalidBirthYear(999))
        ));
        assert!(BirthYear::new(0).is_err());
    }

    #[test]
    fn birth_year_error_message() {
        let err = BirthYear::new(99).unwrap_err();
        assert_eq!(err.to_string(), "birth year must be 4 digits");
    }

    #[test]
    fn birth_year_display_renders_4_digits() {
        let year = BirthYear::new(1990).expect("valid");
        assert_eq!(year.to_string(), "1990");
    }

    #[test]
    fn birth_year_validating_deserialize_rejects_invalid() {
        let result: Result<BirthYear, _> = serde_json::from_str("42");
        assert!(result.is_err());
        let ok: BirthYear = serde_json::from_str("1990").expect("valid year");
        assert_eq!(ok.as_u16(), 1990);
    }
}
