//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! driver, library backend
//!     → tracing events (structured fields)
//!     → logging.rs subscriber
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - stdout carries only the version line, so every log goes to stderr
//! - Quiet by default: warnings and errors only

pub mod logging;

pub use logging::init_logging;
