//! Validation errors for the civil-registry identifier newtypes.

/// Errors from identifier construction.
///
/// Display strings are stable: callers match on them in user-facing
/// diagnostics, so changes here are breaking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The identity number does not render as exactly 11 decimal digits.
    #[error("identity number must be 11 digits")]
    InvalidIdentityNumber(String),

    /// The first name is blank after trimming.
    #[error("first name required")]
    FirstNameRequired,

    /// The last name is blank after trimming.
    #[error("last name required")]
    LastNameRequired,

    /// The birth year does not render as exactly 4 decimal digits.
    #[error("birth year must be 4 digits")]
    InvalidBirthYear(u16),

    /// A name is blank after trimming. Produced by the shared
    /// [`PersonName`](crate::identity::PersonName) constructor when the
    /// field position (first/last) is not known.
    #[error("name must not be blank")]
    BlankName,
}
