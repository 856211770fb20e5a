//! vleas - dependency checker library
//!
//! This library provides the core functionality for checking the
//! `group:name:version` coordinates declared in a build manifest
//! (typically `build.gradle`) against the latest releases published
//! on Maven Central.

pub mod check;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
