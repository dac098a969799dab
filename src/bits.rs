//! Helpers for printing integers and byte arrays as binary digits.

/// Formats `value` as 32 zero-padded binary digits followed by its decimal
/// value in parentheses.
pub fn format_binary(value: u32) -> String {
    format!("{:032b} ({})", value, value)
}

/// Formats each byte as 8 zero-padded binary digits, separated by spaces.
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{:08b}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}
