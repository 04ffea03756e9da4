//! OpenSSL provider lifecycle probe library.

pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod lifecycle;
pub mod observability;

pub use config::ProbeConfig;
pub use error::{ProbeError, ProbeResult};
pub use lifecycle::{run, Mode};
