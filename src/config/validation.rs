//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Provider name must be usable as a C string
//! - Log filter must parse as an `EnvFilter` directive
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProbeConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::ProbeConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("provider.name must not be empty")]
    EmptyProviderName,

    #[error("provider.name must not contain NUL bytes")]
    ProviderNameContainsNul,

    #[error("logging.filter is invalid: {0}")]
    InvalidLogFilter(String),
}

/// Check a parsed configuration.
pub fn validate_config(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = &config.provider.name;
    if name.trim().is_empty() {
        errors.push(ValidationError::EmptyProviderName);
    }
    if name.contains('\0') {
        errors.push(ValidationError::ProviderNameContainsNul);
    }

    if let Err(e) = EnvFilter::try_new(&config.logging.filter) {
        errors.push(ValidationError::InvalidLogFilter(e.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
