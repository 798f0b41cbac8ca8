//! # nvi-kps-client -- Typed Rust client for the NVI KPS Public service
//!
//! Verifies whether a (TC identity number, first name, last name, birth
//! year) tuple is recognized by KPS Public, the citizen verification
//! endpoint of Turkey's civil registry directorate (NVI). One call is one
//! synchronous SOAP 1.2 exchange; nothing is cached, retried, or kept
//! between calls.
//!
//! ## Architecture
//!
//! - [`kps::CitizenQuery`] validates the four inputs at construction, so
//!   nothing unvalidated can reach the wire.
//! - [`kps::KpsPublicAdapter`] is the transport seam: production code
//!   uses [`http_adapter::HttpKpsPublicAdapter`], tests use
//!   [`kps::MockKpsPublicAdapter`] or a wiremock server.
//! - [`soap`] holds the fixed envelope template and response parsing.
//!
//! ## Wire convention
//!
//! POST to `https://tckimlik.nvi.gov.tr/Service/KPSPublic.asmx` with
//! `Content-Type: application/soap+xml; charset=utf-8`; the response
//! carries the boolean in a `TCKimlikNoDogrulaResult` element.

pub mod error;
pub mod http_adapter;
pub mod kps;
pub mod soap;

pub use error::KpsError;
pub use http_adapter::{HttpKpsPublicAdapter, KpsPublicConfig};
pub use kps::{CitizenQuery, KpsPublicAdapter, MockKpsPublicAdapter};
pub use soap::KPS_PUBLIC_ENDPOINT;
