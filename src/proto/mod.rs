mod prefix;
mod u32;

pub use self::prefix::{get_length, put_length};
pub use self::u32::{
    decode_length, decode_u32, encode_length, encode_u32, try_encode_length,
    LengthDecodeError, LengthEncodeError, U32_BYTE_LEN,
};
