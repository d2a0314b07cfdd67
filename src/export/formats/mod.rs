//! Concrete document sink implementations.

pub mod delimited;

// Re-export common types
pub use delimited::{DelimitedConfig, DelimitedDocumentFactory};

#[cfg(test)]
mod tests;
