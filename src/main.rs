mod config;

use log::info;

use lenprefix::bits::{format_binary, format_bytes};
use lenprefix::proto::{decode_u32, encode_length, U32_BYTE_LEN};

fn main() {
    env_logger::init();

    let length = config::SAMPLE_LENGTH;
    println!("{}", format_binary(length));

    let mut array = [0; U32_BYTE_LEN];
    encode_length(length as usize, &mut array);
    info!("Encoded {} as {:?}", length, array);
    println!("{}", format_bytes(&array));

    let parsed_length = decode_u32(array);
    info!("Decoded {:?} as {}", array, parsed_length);
    println!("{}", format_binary(parsed_length));
}
