//! Trait definitions shared across the curvecrypt crates

pub mod pke;
pub mod serialize;

pub use pke::HybridEncryption;
pub use serialize::{Serialize, SerializeSecret};
