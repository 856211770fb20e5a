//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading the manifest file
//! - RegistryError: Issues with package registry communication
//! - ConfigError: Issues with the config file or CLI options
//! - CommandError: Operations that are not available

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Command related errors
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Registry answered with a non-success status
    #[error("{registry} returned HTTP {status} for '{package}'")]
    HttpStatus {
        package: String,
        registry: String,
        status: u16,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },

    /// HTTP client could not be built
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown keys
    #[error("failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Option value out of range
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors related to commands
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command exists on the surface but is not implemented
    #[error("'{command}' is not supported yet: {message}")]
    Unsupported { command: String, message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl RegistryError {
    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new HttpStatus error
    pub fn http_status(package: impl Into<String>, registry: impl Into<String>, status: u16) -> Self {
        RegistryError::HttpStatus {
            package: package.into(),
            registry: registry.into(),
            status,
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidValue error
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl CommandError {
    /// Creates a new Unsupported error
    pub fn unsupported(command: impl Into<String>, message: impl Into<String>) -> Self {
        CommandError::Unsupported {
            command: command.into(),
            message: message.into(),
        }
    }
}
