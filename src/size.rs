//! Unsigned, big-endian size prefixes of width 1/2/4 bytes (§4.2).

use bytes::{Buf, BufMut};

use crate::error::{PackStreamError, Result};

/// Reads a `width`-byte (1, 2, or 4) unsigned big-endian size prefix.
///
/// `width` bytes must already be known to be available in `buf`; callers
/// check `ensure_remaining` (see `decode.rs`) before calling this so the
/// `Truncated` error carries an accurate byte count.
pub fn read_size(buf: &mut impl Buf, width: usize) -> Result<u64> {
    if buf.remaining() < width {
        return Err(PackStreamError::Truncated {
            needed: width,
            available: buf.remaining(),
        });
    }
    Ok(match width {
        1 => u64::from(buf.get_u8()),
        2 => u64::from(buf.get_u16()),
        4 => u64::from(buf.get_u32()),
        _ => unreachable!("size prefix width must be 1, 2, or 4"),
    })
}

/// Writes the low `width` bytes of `n` as a big-endian size prefix.
pub fn write_size(buf: &mut impl BufMut, n: u64, width: usize) {
    match width {
        1 => buf.put_u8(n as u8),
        2 => buf.put_u16(n as u16),
        4 => buf.put_u32(n as u32),
        _ => unreachable!("size prefix width must be 1, 2, or 4"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn round_trip_widths() {
        for &(width, n) in &[(1usize, 0xABu64), (2, 0xABCD), (4, 0xDEAD_BEEF)] {
            let mut buf = BytesMut::new();
            write_size(&mut buf, n, width);
            assert_eq!(buf.len(), width);
            let mut cursor = &buf[..];
            assert_eq!(read_size(&mut cursor, width).unwrap(), n);
        }
    }

    #[test]
    fn read_size_truncated() {
        let mut cursor: &[u8] = &[0x01];
        let err = read_size(&mut cursor, 2).unwrap_err();
        assert!(matches!(
            err,
            PackStreamError::Truncated {
                needed: 2,
                available: 1
            }
        ));
    }
}
