//! Integer band selection (encode) and overflow-checked narrowing (decode), §4.3.

use bytes::{Buf, BufMut};

use crate::error::{PackStreamError, Result};
use crate::marker;

/// The five integer width categories a signed 64-bit value can be packed
/// into, narrowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntBand {
    Tiny,
    Int8,
    Int16,
    Int32,
    Int64,
}

/// Selects the narrowest band that losslessly carries `value`, in the order
/// specified by §4.3 (first match wins; tiny wins ties with int8's positive
/// range).
pub fn select_band(value: i64) -> IntBand {
    if (marker::TINY_INT_MIN..=marker::TINY_INT_MAX).contains(&value) {
        IntBand::Tiny
    } else if i64::from(i8::MIN) <= value && value < marker::TINY_INT_MIN {
        IntBand::Int8
    } else if i64::from(i16::MIN) <= value && value <= i64::from(i16::MAX) {
        IntBand::Int16
    } else if i64::from(i32::MIN) <= value && value <= i64::from(i32::MAX) {
        IntBand::Int32
    } else {
        IntBand::Int64
    }
}

/// Encodes `value` using the narrowest PackStream integer representation.
pub fn encode_int(buf: &mut impl BufMut, value: i64) {
    match select_band(value) {
        IntBand::Tiny => buf.put_u8(value as u8),
        IntBand::Int8 => {
            buf.put_u8(marker::INT_8);
            buf.put_i8(value as i8);
        }
        IntBand::Int16 => {
            buf.put_u8(marker::INT_16);
            buf.put_i16(value as i16);
        }
        IntBand::Int32 => {
            buf.put_u8(marker::INT_32);
            buf.put_i32(value as i32);
        }
        IntBand::Int64 => {
            buf.put_u8(marker::INT_64);
            buf.put_i64(value);
        }
    }
}

/// Reads the payload for a given non-tiny integer marker and sign-extends it
/// to `i64`. `marker` must be one of `INT_8`/`INT_16`/`INT_32`/`INT_64`.
pub fn decode_int_payload(buf: &mut impl Buf, marker: u8) -> Result<i64> {
    let needed = match marker {
        crate::marker::INT_8 => 1,
        crate::marker::INT_16 => 2,
        crate::marker::INT_32 => 4,
        crate::marker::INT_64 => 8,
        _ => unreachable!("decode_int_payload called with non-integer marker"),
    };
    if buf.remaining() < needed {
        return Err(PackStreamError::Truncated {
            needed,
            available: buf.remaining(),
        });
    }
    Ok(match marker {
        crate::marker::INT_8 => i64::from(buf.get_i8()),
        crate::marker::INT_16 => i64::from(buf.get_i16()),
        crate::marker::INT_32 => i64::from(buf.get_i32()),
        crate::marker::INT_64 => buf.get_i64(),
        _ => unreachable!(),
    })
}

/// Overflow-checked narrowing of a decoded wire integer into an unsigned
/// target width, per §4.3's decode-side narrowing rules.
pub fn narrow_to_u64(value: i64, target_bits: u32) -> Result<u64> {
    if value < 0 {
        return Err(PackStreamError::TypeMismatch {
            expected: "unsigned integer",
            found: "negative integer",
        });
    }
    let value = value as u64;
    let max = if target_bits >= 64 {
        u64::MAX
    } else {
        (1u64 << target_bits) - 1
    };
    if value > max {
        return Err(PackStreamError::TypeMismatch {
            expected: "narrower integer",
            found: "integer exceeding target width",
        });
    }
    Ok(value)
}

/// Overflow-checked narrowing of a decoded wire integer into a signed target
/// width, per §4.3's decode-side narrowing rules.
pub fn narrow_to_i64(value: i64, target_bits: u32) -> Result<i64> {
    if target_bits >= 64 {
        return Ok(value);
    }
    let min = -(1i64 << (target_bits - 1));
    let max = (1i64 << (target_bits - 1)) - 1;
    if value < min || value > max {
        return Err(PackStreamError::TypeMismatch {
            expected: "narrower integer",
            found: "integer exceeding target width",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    fn encoded(value: i64) -> BytesMut {
        let mut buf = BytesMut::new();
        encode_int(&mut buf, value);
        buf
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(select_band(127), IntBand::Tiny);
        assert_eq!(select_band(-16), IntBand::Tiny);
        assert_eq!(select_band(-17), IntBand::Int8);
        assert_eq!(select_band(-128), IntBand::Int8);
        assert_eq!(select_band(128), IntBand::Int16);
        assert_eq!(select_band(-129), IntBand::Int16);
        assert_eq!(select_band(32767), IntBand::Int16);
        assert_eq!(select_band(32768), IntBand::Int32);
        assert_eq!(select_band(-32769), IntBand::Int32);
        assert_eq!(select_band(i64::from(i32::MAX)), IntBand::Int32);
        assert_eq!(select_band(i64::from(i32::MAX) + 1), IntBand::Int64);
        assert_eq!(select_band(i64::from(i32::MIN) - 1), IntBand::Int64);
    }

    #[test]
    fn encoded_lengths_match_band() {
        assert_eq!(encoded(42).len(), 1);
        assert_eq!(encoded(-17).len(), 2);
        assert_eq!(encoded(-129).len(), 3);
        assert_eq!(encoded(70_000).len(), 5);
        assert_eq!(encoded(i64::MAX).len(), 9);
    }

    #[test]
    fn narrow_unsigned_rejects_negative() {
        assert!(narrow_to_u64(-1, 8).is_err());
        assert_eq!(narrow_to_u64(255, 8).unwrap(), 255);
        assert!(narrow_to_u64(256, 8).is_err());
    }

    #[test]
    fn narrow_signed_checks_width() {
        assert_eq!(narrow_to_i64(127, 8).unwrap(), 127);
        assert!(narrow_to_i64(128, 8).is_err());
        assert_eq!(narrow_to_i64(-128, 8).unwrap(), -128);
        assert!(narrow_to_i64(-129, 8).is_err());
    }
}
