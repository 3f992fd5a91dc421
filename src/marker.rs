//! PackStream marker byte constants.

// Null
pub const NULL: u8 = 0xC0;

// Boolean
pub const FALSE: u8 = 0xC2;
pub const TRUE: u8 = 0xC3;

// Float (IEEE 754 double-precision)
pub const FLOAT_64: u8 = 0xC1;

// Integer (beyond TINY_INT range)
pub const INT_8: u8 = 0xC8;
pub const INT_16: u8 = 0xC9;
pub const INT_32: u8 = 0xCA;
pub const INT_64: u8 = 0xCB;

// TINY_INT: single byte, range -16..=127
// Positive: 0x00..=0x7F (0..127)
// Negative: 0xF0..=0xFF (-16..-1)
pub const TINY_INT_MAX: i64 = 127;
pub const TINY_INT_MIN: i64 = -16;

// Bytes (no tiny form)
pub const BYTES_8: u8 = 0xCC;
pub const BYTES_16: u8 = 0xCD;
pub const BYTES_32: u8 = 0xCE;

// String
// TINY_STRING: 0x80..=0x8F (high nibble 0x8, low = byte length 0..15)
pub const STRING_8: u8 = 0xD0;
pub const STRING_16: u8 = 0xD1;
pub const STRING_32: u8 = 0xD2;

// List
// TINY_LIST: 0x90..=0x9F (high nibble 0x9, low = item count 0..15)
pub const LIST_8: u8 = 0xD4;
pub const LIST_16: u8 = 0xD5;
pub const LIST_32: u8 = 0xD6;
/// Streamed list: elements follow, terminated by `END_OF_STREAM`.
pub const LIST_STREAM: u8 = 0xD7;

// Dictionary (Map)
// TINY_DICT: 0xA0..=0xAF (high nibble 0xA, low = entry count 0..15)
pub const DICT_8: u8 = 0xD8;
pub const DICT_16: u8 = 0xD9;
pub const DICT_32: u8 = 0xDA;
/// Streamed map: key/value pairs follow, terminated by `END_OF_STREAM`.
pub const DICT_STREAM: u8 = 0xDB;

// Structure
// TINY_STRUCT: 0xB0..=0xBF (high nibble 0xB, low = field count 0..15)
pub const STRUCT_8: u8 = 0xDC;
pub const STRUCT_16: u8 = 0xDD;

/// Terminates a streamed list or map. Not a value in its own right.
pub const END_OF_STREAM: u8 = 0xDF;

// High-nibble masks for tiny types.
pub const TINY_STRING_NIBBLE: u8 = 0x80;
pub const TINY_LIST_NIBBLE: u8 = 0x90;
pub const TINY_DICT_NIBBLE: u8 = 0xA0;
pub const TINY_STRUCT_NIBBLE: u8 = 0xB0;

/// Returns the low nibble of a tiny marker, i.e. its embedded size (0..15).
pub fn tiny_size(marker: u8) -> usize {
    (marker & 0x0F) as usize
}

/// True if `value` is in the positive tiny-int range (`0x00..=0x7F`).
pub fn is_plus_tiny_int(value: u8) -> bool {
    value <= 0x7F
}

/// True if `value` is in the negative tiny-int range (`0xF0..=0xFF`).
pub fn is_minus_tiny_int(value: u8) -> bool {
    value >= 0xF0
}
