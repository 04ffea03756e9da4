//! Error types for the probe.

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::library::ExitHook;

/// Errors surfaced by a probe run.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The named provider could not be located or initialized.
    ///
    /// `report` holds the library's error queue, one entry per line.
    #[error("failed to load provider \"{name}\"")]
    ProviderLoad { name: String, report: Vec<String> },

    /// The library refused to register an exit hook.
    ///
    /// Log-only: the driver reports it and carries on, so it never decides
    /// the process exit status.
    #[error("could not register unload callback via {0}")]
    HookRegistration(ExitHook),

    /// Configuration file could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ProbeError {
    /// Process exit code for an error that ends the run.
    ///
    /// `None` for errors that are only logged.
    pub fn exit_code(&self) -> Option<u8> {
        match self {
            ProbeError::ProviderLoad { .. } => Some(1),
            ProbeError::Config(_) => Some(2),
            ProbeError::HookRegistration(_) => None,
        }
    }
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;
