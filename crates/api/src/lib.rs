//! Public API traits and types for the curvecrypt library
//!
//! This crate provides the public API surface shared by the curvecrypt
//! crates: the top-level error type and the trait definitions that the
//! algorithm and scheme crates implement.

pub mod error;
pub mod traits;

pub use error::{Error, Result};

pub use traits::{HybridEncryption, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{pke, serialize};
