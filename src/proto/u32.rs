//! This module provides base primitives for encoding and decoding u32 length
//! prefixes.
//!
//! It centralizes the knowledge that length prefixes are 4 bytes long and
//! use big-endian (network) byte order.

use std::convert::TryFrom;
use std::io;

use log::trace;
use thiserror::Error;

/// Length of an encoded 32-bit integer in bytes.
pub const U32_BYTE_LEN: usize = 4;

#[derive(Debug, Error, PartialEq)]
pub enum LengthEncodeError {
    #[error("length {length} does not fit in 4 bytes")]
    ValueTooLarge {
        /// The length that could not be encoded.
        length: usize,
    },
}

impl From<LengthEncodeError> for io::Error {
    fn from(error: LengthEncodeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, format!("{}", error))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LengthDecodeError {
    #[error("not enough bytes to decode length: expected {expected}, found {remaining}")]
    NotEnoughData {
        /// The number of bytes the decoder expected to read.
        ///
        /// Invariant: `remaining < expected`.
        expected: usize,

        /// The number of bytes available in the input.
        remaining: usize,
    },
}

impl From<LengthDecodeError> for io::Error {
    fn from(error: LengthDecodeError) -> Self {
        io::Error::new(io::ErrorKind::UnexpectedEof, format!("{}", error))
    }
}

/// Writes the big-endian representation of `length` into the first 4 bytes
/// of `buffer`.
///
/// Only the low 32 bits of `length` are encoded. Use `try_encode_length()` to
/// reject larger values instead.
///
/// # Panics
///
/// Panics if `buffer` is shorter than `U32_BYTE_LEN`.
pub fn encode_length(length: usize, buffer: &mut [u8]) {
    let buffer = &mut buffer[..U32_BYTE_LEN];
    buffer[0] = ((length >> 24) & 0xFF) as u8;
    buffer[1] = ((length >> 16) & 0xFF) as u8;
    buffer[2] = ((length >> 8) & 0xFF) as u8;
    buffer[3] = (length & 0xFF) as u8;
}

/// Returns the byte representation of the given integer value.
pub fn encode_u32(value: u32) -> [u8; U32_BYTE_LEN] {
    let mut bytes = [0; U32_BYTE_LEN];
    encode_length(value as usize, &mut bytes);
    bytes
}

/// Returns the integer value corresponding to the given bytes.
pub fn decode_u32(bytes: [u8; U32_BYTE_LEN]) -> u32 {
    let mut value: u32 = 0;
    for byte in bytes.iter() {
        value <<= 8;
        value |= u32::from(*byte);
    }
    value
}

/// Encodes `length`, failing instead of truncating if it needs more than 32
/// bits.
pub fn try_encode_length(
    length: usize,
) -> Result<[u8; U32_BYTE_LEN], LengthEncodeError> {
    match u32::try_from(length) {
        Ok(value) => Ok(encode_u32(value)),
        Err(_) => Err(LengthEncodeError::ValueTooLarge { length }),
    }
}

/// Decodes a length from the first 4 bytes of `bytes`.
///
/// Any bytes past the prefix are ignored.
pub fn decode_length(bytes: &[u8]) -> Result<u32, LengthDecodeError> {
    if bytes.len() < U32_BYTE_LEN {
        return Err(LengthDecodeError::NotEnoughData {
            expected: U32_BYTE_LEN,
            remaining: bytes.len(),
        });
    }

    let mut array = [0; U32_BYTE_LEN];
    array.copy_from_slice(&bytes[..U32_BYTE_LEN]);
    let length = decode_u32(array);
    trace!("Decoded length prefix {:?} as {}", array, length);
    Ok(length)
}
