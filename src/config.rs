// 00001110 01001011 10110010 10001000
pub const SAMPLE_LENGTH: u32 = 239841928;
