//! # KPS Public Integration Adapter Interface
//!
//! Defines the adapter interface for KPS Public (Kimlik Paylaşım Sistemi),
//! the public citizen identity verification endpoint operated by NVI
//! (Nüfus ve Vatandaşlık İşleri, Turkey's civil registry directorate).
//!
//! ## Architecture
//!
//! The `KpsPublicAdapter` trait abstracts over the verification backend.
//! Production deployments implement it against the live SOAP endpoint via
//! [`HttpKpsPublicAdapter`](crate::http_adapter::HttpKpsPublicAdapter);
//! test environments use [`MockKpsPublicAdapter`]. This separation allows
//! callers to compose identity verification without coupling to a specific
//! transport.
//!
//! ## Input validation
//!
//! All four fields are validated by [`CitizenQuery::new`] before any
//! request reaches an adapter: identity number first, then first name,
//! last name, birth year — the first failing check is the error that
//! surfaces. A constructed `CitizenQuery` is always transmittable.

use serde::{Deserialize, Serialize};

use nvi_core::{BirthYear, PersonName, TcKimlikNo, ValidationError};

use crate::error::KpsError;

/// A validated citizen verification query.
///
/// Immutable value owned by a single verification call. Construction
/// enforces every field format, so a `CitizenQuery` that exists has
/// already passed validation and may be sent to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenQuery {
    /// TC identity number (11 digits).
    pub identity_no: TcKimlikNo,
    /// First name, normalized to trimmed upper-case.
    pub first_name: PersonName,
    /// Last name, normalized to trimmed upper-case.
    pub last_name: PersonName,
    /// Birth year (4 digits).
    pub birth_year: BirthYear,
}

impl CitizenQuery {
    /// Validate and assemble a query.
    ///
    /// Checks run in a fixed order and stop at the first violation:
    /// identity number, first name, last name, birth year.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first failing field.
    pub fn new(
        identity_no: u64,
        first_name: &str,
        last_name: &str,
        birth_year: u16,
    ) -> Result<Self, ValidationError> {
        let identity_no = TcKimlikNo::from_u64(identity_no)?;
        let first_name =
            PersonName::new(first_name).map_err(|_| ValidationError::FirstNameRequired)?;
        let last_name =
            PersonName::new(last_name).map_err(|_| ValidationError::LastNameRequired)?;
        let birth_year = BirthYear::new(birth_year)?;
        Ok(Self {
            identity_no,
            first_name,
            last_name,
            birth_year,
        })
    }
}

/// Adapter trait for KPS Public citizen verification.
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks behind an `Arc`. The trait is object-safe to support
/// runtime adapter selection (mock vs. live).
pub trait KpsPublicAdapter: Send + Sync {
    /// Run one verification exchange for an already-validated query.
    ///
    /// Returns `Ok(true)` if the registry confirms the tuple matches a
    /// registered citizen, `Ok(false)` if it does not. The service does
    /// not distinguish "not found" from "mismatch". Transport and parse
    /// failures surface as indeterminate [`KpsError`] variants.
    fn verify_citizen(&self, query: &CitizenQuery) -> Result<bool, KpsError>;

    /// Return the human-readable name of this adapter implementation
    /// (e.g. "MockKpsPublicAdapter", "HttpKpsPublicAdapter").
    fn adapter_name(&self) -> &str;

    /// Validate the four inputs and run one verification exchange.
    ///
    /// This is the single library operation: input validation fails fast
    /// with [`KpsError::InvalidInput`] before any network activity.
    fn verify(
        &self,
        identity_no: u64,
        first_name: &str,
        last_name: &str,
        birth_year: u16,
    ) -> Result<bool, KpsError> {
        let query = CitizenQuery::new(identity_no, first_name, last_name, birth_year)?;
        self.verify_citizen(&query)
    }

    /// Like [`verify`](Self::verify), but collapse indeterminate outcomes
    /// (service unreachable, timeout, unparseable response) into
    /// `Ok(false)`, reproducing the legacy behavior of the original
    /// implementation. [`KpsError::InvalidInput`] still propagates.
    ///
    /// Inherited legacy semantics: a `false` from this method cannot be
    /// told apart from "registry says no match". Prefer
    /// [`verify`](Self::verify) where the distinction matters.
    fn verify_lenient(
        &self,
        identity_no: u64,
        first_name: &str,
        last_name: &str,
        birth_year: u16,
    ) -> Result<bool, KpsError> {
        match self.verify(identity_no, first_name, last_name, birth_year) {
            Ok(verified) => Ok(verified),
            Err(e) if e.is_indeterminate() => {
                tracing::warn!("KPS verification indeterminate, reporting false: {e}");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

/// Mock KPS Public adapter for testing and development.
///
/// Deterministic convention: genuine TC Kimlik numbers always carry an
/// even check digit, so queries whose identity number ends in an even
/// digit verify `true` and odd-final-digit numbers verify `false`.
#[derive(Debug, Clone)]
pub struct MockKpsPublicAdapter;

impl KpsPublicAdapter for MockKpsPublicAdapter {
    fn verify_citizen(&self, query: &CitizenQuery) -> Result<bool, KpsError> {
        let last_digit = query
            .identity_no
            .as_str()
            .as_bytes()
            .last()
            .copied()
            .unwrap_or(b'1');
        Ok((last_digit - b'0') % 2 == 0)
    }

    fn adapter_name(&self) -> &str {
        "MockKpsPublicAdapter"
    }
}
