//! PackStream decoding: bytes → [`Value`] (§4.5).

use bytes::Buf;

use crate::error::{PackStreamError, Result};
use crate::int_band;
use crate::marker;
use crate::size;
use crate::target::DecodeTarget;
use crate::value::{PackMap, Value};

fn ensure_remaining(buf: &impl Buf, needed: usize) -> Result<()> {
    if buf.remaining() < needed {
        return Err(PackStreamError::Truncated {
            needed,
            available: buf.remaining(),
        });
    }
    Ok(())
}

fn read_marker(buf: &mut impl Buf) -> Result<u8> {
    ensure_remaining(buf, 1)?;
    Ok(buf.get_u8())
}

/// Reads one complete PackStream value from `buf`.
pub fn decode_value(buf: &mut impl Buf) -> Result<Value> {
    let marker = read_marker(buf)?;
    decode_dispatch(marker, buf)
}

/// Decodes `data` as a single PackStream value and returns it along with the
/// number of bytes consumed (the `from_bytes` convenience from §6).
pub fn from_bytes(data: &[u8]) -> Result<(Value, usize)> {
    let mut cursor = data;
    let before = cursor.remaining();
    let value = decode_value(&mut cursor)?;
    let consumed = before - cursor.remaining();
    Ok((value, consumed))
}

/// Decodes one value from `buf` and narrows it into `T` (the shape-directed
/// `decode_into` convenience from §6), seeding the sink with `T::default()`.
pub fn decode_into<T: DecodeTarget + Default>(buf: &mut impl Buf) -> Result<T> {
    let value = decode_value(buf)?;
    T::default().decode_into(value)
}

/// Dispatches on an already-consumed marker byte. Exposed at crate level so
/// streamed-container loops can read the marker themselves to check for
/// `END_OF_STREAM` before committing to a full value decode.
fn decode_dispatch(marker: u8, buf: &mut impl Buf) -> Result<Value> {
    match marker {
        marker::NULL => Ok(Value::Null),
        marker::FALSE => Ok(Value::Bool(false)),
        marker::TRUE => Ok(Value::Bool(true)),
        marker::FLOAT_64 => {
            ensure_remaining(buf, 8)?;
            Ok(Value::Float(buf.get_f64()))
        }
        marker::END_OF_STREAM => Err(PackStreamError::UnexpectedEndOfStream),
        marker::INT_8 | marker::INT_16 | marker::INT_32 | marker::INT_64 => {
            Ok(Value::Int(int_band::decode_int_payload(buf, marker)?))
        }
        _ if marker::is_plus_tiny_int(marker) || marker::is_minus_tiny_int(marker) => {
            Ok(Value::Int(i64::from(marker as i8)))
        }
        _ if marker & 0xF0 == marker::TINY_STRING_NIBBLE => {
            decode_string_payload(buf, marker::tiny_size(marker))
        }
        marker::STRING_8 => {
            let len = size::read_size(buf, 1)? as usize;
            decode_string_payload(buf, len)
        }
        marker::STRING_16 => {
            let len = size::read_size(buf, 2)? as usize;
            decode_string_payload(buf, len)
        }
        marker::STRING_32 => {
            let len = size::read_size(buf, 4)? as usize;
            decode_string_payload(buf, len)
        }
        marker::BYTES_8 => {
            let len = size::read_size(buf, 1)? as usize;
            decode_bytes_payload(buf, len)
        }
        marker::BYTES_16 => {
            let len = size::read_size(buf, 2)? as usize;
            decode_bytes_payload(buf, len)
        }
        marker::BYTES_32 => {
            let len = size::read_size(buf, 4)? as usize;
            decode_bytes_payload(buf, len)
        }
        _ if marker & 0xF0 == marker::TINY_LIST_NIBBLE => {
            decode_list_payload(buf, marker::tiny_size(marker))
        }
        marker::LIST_8 => {
            let n = size::read_size(buf, 1)? as usize;
            decode_list_payload(buf, n)
        }
        marker::LIST_16 => {
            let n = size::read_size(buf, 2)? as usize;
            decode_list_payload(buf, n)
        }
        marker::LIST_32 => {
            let n = size::read_size(buf, 4)? as usize;
            decode_list_payload(buf, n)
        }
        marker::LIST_STREAM => decode_streamed_list(buf),
        _ if marker & 0xF0 == marker::TINY_DICT_NIBBLE => {
            decode_map_payload(buf, marker::tiny_size(marker))
        }
        marker::DICT_8 => {
            let n = size::read_size(buf, 1)? as usize;
            decode_map_payload(buf, n)
        }
        marker::DICT_16 => {
            let n = size::read_size(buf, 2)? as usize;
            decode_map_payload(buf, n)
        }
        marker::DICT_32 => {
            let n = size::read_size(buf, 4)? as usize;
            decode_map_payload(buf, n)
        }
        marker::DICT_STREAM => decode_streamed_map(buf),
        _ if marker & 0xF0 == marker::TINY_STRUCT_NIBBLE => {
            decode_struct_payload(buf, marker::tiny_size(marker))
        }
        marker::STRUCT_8 => {
            let n = size::read_size(buf, 1)? as usize;
            decode_struct_payload(buf, n)
        }
        marker::STRUCT_16 => {
            let n = size::read_size(buf, 2)? as usize;
            decode_struct_payload(buf, n)
        }
        _ => {
            tracing::debug!(marker, "unknown packstream marker");
            Err(PackStreamError::UnknownMarker { marker })
        }
    }
}

fn decode_string_payload(buf: &mut impl Buf, len: usize) -> Result<Value> {
    ensure_remaining(buf, len)?;
    let mut data = vec![0u8; len];
    buf.copy_to_slice(&mut data);
    let s = String::from_utf8(data).map_err(|_| PackStreamError::TypeMismatch {
        expected: "utf-8 string",
        found: "invalid utf-8 bytes",
    })?;
    Ok(Value::String(s))
}

fn decode_bytes_payload(buf: &mut impl Buf, len: usize) -> Result<Value> {
    ensure_remaining(buf, len)?;
    let mut data = vec![0u8; len];
    buf.copy_to_slice(&mut data);
    Ok(Value::Bytes(data))
}

fn decode_list_payload(buf: &mut impl Buf, n: usize) -> Result<Value> {
    let mut items = Vec::with_capacity(n.min(1024));
    for _ in 0..n {
        items.push(decode_value(buf)?);
    }
    Ok(Value::List(items))
}

fn decode_map_payload(buf: &mut impl Buf, n: usize) -> Result<Value> {
    let mut map = PackMap::with_capacity(n.min(1024));
    for _ in 0..n {
        let key = decode_map_key(buf)?;
        let value = decode_value(buf)?;
        map.insert(key, value);
    }
    Ok(Value::Map(map))
}

fn decode_map_key(buf: &mut impl Buf) -> Result<String> {
    match decode_value(buf)? {
        Value::String(s) => Ok(s),
        other => Err(PackStreamError::InvalidKey {
            found: other.kind_name(),
        }),
    }
}

fn decode_struct_payload(buf: &mut impl Buf, n: usize) -> Result<Value> {
    ensure_remaining(buf, 1)?;
    let signature = buf.get_u8();
    let mut fields = Vec::with_capacity(n.min(1024));
    for _ in 0..n {
        fields.push(decode_value(buf)?);
    }
    Ok(Value::Struct { signature, fields })
}

/// Decodes elements until `END_OF_STREAM` at a top-level element boundary
/// (§4.5 point 4).
fn decode_streamed_list(buf: &mut impl Buf) -> Result<Value> {
    let mut items = Vec::new();
    loop {
        let marker = read_marker(buf)?;
        if marker == marker::END_OF_STREAM {
            break;
        }
        items.push(decode_dispatch(marker, buf)?);
    }
    Ok(Value::List(items))
}

/// Decodes key/value pairs until `END_OF_STREAM` before a key. `END_OF_STREAM`
/// appearing between a key and its value is **not** a clean end — it is
/// `UnexpectedEndOfStream` (§4.5, §9's streamed-map-atomicity decision).
fn decode_streamed_map(buf: &mut impl Buf) -> Result<Value> {
    let mut map = PackMap::new();
    loop {
        let key_marker = read_marker(buf)?;
        if key_marker == marker::END_OF_STREAM {
            break;
        }
        let key = match decode_dispatch(key_marker, buf)? {
            Value::String(s) => s,
            other => {
                return Err(PackStreamError::InvalidKey {
                    found: other.kind_name(),
                })
            }
        };
        let value_marker = read_marker(buf)?;
        if value_marker == marker::END_OF_STREAM {
            return Err(PackStreamError::UnexpectedEndOfStream);
        }
        let value = decode_dispatch(value_marker, buf)?;
        map.insert(key, value);
    }
    Ok(Value::Map(map))
}

/// A decoder bound to a byte source. The source is any [`bytes::Buf`]; the
/// decoder advances its cursor and never re-reads bytes once consumed.
pub struct Decoder<B: Buf> {
    source: B,
}

impl<B: Buf> Decoder<B> {
    pub fn new(source: B) -> Self {
        Self { source }
    }

    /// Reads one complete PackStream value.
    pub fn decode_any(&mut self) -> Result<Value> {
        decode_value(&mut self.source)
    }

    /// Reads one value and narrows it against `T`'s declared shape.
    pub fn decode_into<T: DecodeTarget + Default>(&mut self) -> Result<T> {
        decode_into(&mut self.source)
    }

    /// Bytes remaining unconsumed in the underlying source.
    pub fn remaining(&self) -> usize {
        self.source.remaining()
    }
}
