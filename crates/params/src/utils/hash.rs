//! Constants for hash functions and MACs

/// SHA-256 output size in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// HMAC-SHA-256 tag size in bytes
pub const HMAC_SHA256_TAG_SIZE: usize = SHA256_OUTPUT_SIZE;
