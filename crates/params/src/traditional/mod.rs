//! Constants for elliptic-curve based algorithms

pub mod curves;
