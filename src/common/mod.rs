//! Common types and utilities shared across the crate.

// Submodule declarations
pub mod clock;
pub mod error;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
