//! Unified error types for export operations.
//!
//! Failures raised by document sink implementations are treated as opaque:
//! they are wrapped once and propagated to the caller unchanged.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
