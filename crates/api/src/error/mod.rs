//! Error handling for the curvecrypt ecosystem

pub mod types;

pub use types::{Error, Result};
