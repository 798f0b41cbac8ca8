//! # nvi-core — identifier newtypes for Turkish civil-registry integrations
//!
//! Domain primitives shared by the NVI client crates. Each identifier is a
//! distinct type validated at construction — you cannot put an unchecked
//! string where a [`TcKimlikNo`] is expected, and a value that exists has
//! already passed its format checks.

pub mod error;
pub mod identity;

pub use error::ValidationError;
pub use identity::{BirthYear, PersonName, TcKimlikNo};
