//! The cryptography library under test.
//!
//! # Data Flow
//! ```text
//! driver
//!     → CryptoLibrary (contract consumed, not designed here)
//!     → libcrypto.rs (the openssl crate + raw symbols)
//! ```
//!
//! # Design Decisions
//! - The driver only sees this trait, so the timeline can be checked
//!   against a recording fake in tests
//! - Exactly two exit-hook mechanisms, mirroring what libcrypto offers
//! - A parked provider belongs to process teardown, never to the driver

pub mod libcrypto;
mod sys;

use std::fmt;

use crate::error::ProbeResult;

pub use self::libcrypto::OpenSsl;

/// Mechanism used to run the unload callback at process teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitHook {
    /// The C runtime's `atexit`.
    Process,
    /// libcrypto's own `OPENSSL_atexit`.
    Library,
}

impl fmt::Display for ExitHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitHook::Process => write!(f, "atexit"),
            ExitHook::Library => write!(f, "OPENSSL_atexit"),
        }
    }
}

/// Operations the probe needs from the cryptography library.
pub trait CryptoLibrary {
    /// Handle of a loaded provider. The driver ends its life only through
    /// [`unload`] or [`park`].
    ///
    /// [`unload`]: CryptoLibrary::unload
    /// [`park`]: CryptoLibrary::park
    type Provider;

    /// Load error strings and register all ciphers and digests.
    fn initialize(&mut self);

    /// Version and CPU info line printed on stdout.
    fn version_line(&self) -> String;

    /// Register the unload-parked-provider callback with `hook`.
    fn register_exit_hook(&mut self, hook: ExitHook) -> ProbeResult<()>;

    /// Load `name` from the default library context.
    fn load_provider(&mut self, name: &str) -> ProbeResult<Self::Provider>;

    /// Unload a provider right now.
    fn unload(&mut self, provider: Self::Provider);

    /// Hand a provider over to process teardown.
    fn park(&mut self, provider: Self::Provider);

    /// Release every library-global resource.
    fn cleanup(&mut self);
}
