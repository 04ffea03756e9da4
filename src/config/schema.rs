//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the probe.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Provider under test.
    pub provider: ProviderConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider name passed to the library's loader (e.g., "legacy").
    pub name: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: "legacy".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "provider_lifecycle_probe=warn".to_string(),
        }
    }
}
