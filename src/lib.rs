//! Fixed-width, big-endian 4-byte length prefixes.

pub mod bits;
pub mod proto;
