//! Utility module for reading and writing length prefixes on `bytes`
//! buffers.

use bytes::{Buf, BufMut};
use log::debug;

use crate::proto::u32::{decode_u32, encode_u32, U32_BYTE_LEN};

/// Appends the 4-byte big-endian prefix for `length` to `buffer`.
pub fn put_length<B: BufMut>(buffer: &mut B, length: u32) {
    buffer.put_slice(&encode_u32(length));
}

/// Attempts to consume a length prefix from the front of `buffer`.
///
/// Returns `Some(length)` if successful, in which case the prefix's bytes have
/// been advanced past.
///
/// Returns `None` if fewer than 4 bytes are available, in which case `buffer`
/// is untouched.
pub fn get_length<B: Buf>(buffer: &mut B) -> Option<u32> {
    if buffer.remaining() < U32_BYTE_LEN {
        debug!(
            "Need {} bytes for length prefix, have {}",
            U32_BYTE_LEN,
            buffer.remaining()
        );
        return None; // Not enough bytes yet.
    }

    let mut array = [0; U32_BYTE_LEN];
    buffer.copy_to_slice(&mut array);
    Some(decode_u32(array))
}

#[cfg(test)]
mod tests {
    use bytes::{BufMut, BytesMut};

    use super::{get_length, put_length};

    #[test]
    fn put_appends() {
        let mut buffer = BytesMut::new();
        buffer.put_u8(13);

        put_length(&mut buffer, 42);
        put_length(&mut buffer, 239841928);

        assert_eq!(
            buffer,
            vec![
                13, // Junk byte.
                0, 0, 0, 42, // Big-endian prefix.
                0x0E, 0x4B, 0xB2, 0x88, // Repeated.
            ]
        );
    }

    #[test]
    fn get_not_enough_data() {
        let initial_bytes = vec![
            0, 0, 4, // Incomplete 32-bit length prefix.
        ];

        let mut buffer = BytesMut::new();
        buffer.extend_from_slice(&initial_bytes);

        assert_eq!(get_length(&mut buffer), None);
        assert_eq!(buffer, initial_bytes); // Untouched.
    }

    #[test]
    fn get_consumes_prefix_only() {
        let mut buffer = BytesMut::new();
        buffer.extend_from_slice(&[
            0, 0, 0, 2, // Length 2.
            4, 2, // Payload.
        ]);

        assert_eq!(get_length(&mut buffer), Some(2));
        assert_eq!(buffer, vec![4, 2]);
    }

    #[test]
    fn get_from_slice() {
        let mut bytes: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(get_length(&mut bytes), Some(u32::MAX));
        assert!(bytes.is_empty());
    }

    #[test]
    fn roundtrip() {
        let mut buffer = BytesMut::new();
        put_length(&mut buffer, 1337);
        assert_eq!(get_length(&mut buffer), Some(1337));
        assert_eq!(buffer, vec![]);
    }
}
