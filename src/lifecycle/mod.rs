//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! argv[1]
//!     → mode.rs (lenient parse, out-of-range → 0)
//!     → plan.rs (LifecyclePlan: hook, inline unload, cleanup)
//!     → driver.rs (fixed timeline against a CryptoLibrary)
//! ```
//!
//! # Design Decisions
//! - The mode is read once; the plan is fixed before any side effect
//! - One timeline for all modes, branching only on plan fields
//! - Provider load failure is the only fatal error

pub mod driver;
pub mod mode;
pub mod plan;

pub use driver::run;
pub use mode::Mode;
pub use plan::{HookPoint, LifecyclePlan};
