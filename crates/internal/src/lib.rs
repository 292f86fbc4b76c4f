//! Internal utilities for the curvecrypt library
//!
//! Not part of the public API; helpers here are shared by the algorithm
//! and scheme crates.

#![forbid(unsafe_code)]

pub mod constant_time;
