//! Constant values for the curvecrypt library
//!
//! Curve domain parameters and symmetric primitive sizes live here so that
//! the algorithm and scheme crates agree on them.

#![no_std]

pub mod traditional;
pub mod utils;
