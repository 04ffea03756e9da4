//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! probe.toml (optional, --config)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProbeConfig (validated, immutable)
//!     → command-line overrides applied in main
//! ```
//!
//! # Design Decisions
//! - No file means defaults; the probe needs no configuration to run
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LoggingConfig, ProbeConfig, ProviderConfig};
pub use validation::ValidationError;
