//! Types shared between the DriveMatch frontend and its launcher.
//!
//! - `model`: read-only DTOs received from the DriveMatch API, plus the
//!   launcher's `AppConfig`.
//! - `requests`: one request type per API operation, each knowing its path,
//!   its query parameters and the shape of its response.
//! - `endpoint`: base endpoint normalisation and request URL construction.
//! - `view`: the presentational model (`ListEntry`) and display formatting.
//! - `error`: the error type every API call resolves to on failure.

pub mod endpoint;
pub mod error;
pub mod model;
pub mod requests;
pub mod view;
