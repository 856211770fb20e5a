//! Core domain models for vleas
//!
//! - Coordinates extracted from manifest text
//! - Dependencies paired with their latest registry version
//! - Classification results
//! - Per-run summary

mod classification;
mod dependency;
mod summary;

pub use classification::Classification;
pub use dependency::{Coordinate, Dependency};
pub use summary::{CheckSummary, LookupFailure};
