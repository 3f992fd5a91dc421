//! PackStream encoding: [`Value`] → bytes (§4.4).

use bytes::{BufMut, BytesMut};

use crate::error::{PackStreamError, Result};
use crate::int_band;
use crate::marker;
use crate::value::{PackMap, Value};

/// Encodes a [`Value`] into `buf` using PackStream's canonical (narrowest)
/// representation. Never fails: every in-memory `Value` is representable,
/// except a `List`/`Map`/`Struct`/`Bytes`/`String` whose length exceeds the
/// largest band for its type (`ValueTooLarge`).
pub fn encode_value(buf: &mut BytesMut, value: &Value) -> Result<()> {
    match value {
        Value::Null => {
            encode_null(buf);
            Ok(())
        }
        Value::Bool(b) => {
            encode_bool(buf, *b);
            Ok(())
        }
        Value::Int(i) => {
            int_band::encode_int(buf, *i);
            Ok(())
        }
        Value::Float(f) => {
            encode_float(buf, *f);
            Ok(())
        }
        Value::String(s) => encode_string(buf, s),
        Value::Bytes(b) => encode_bytes(buf, b),
        Value::List(items) => encode_list(buf, items),
        Value::Map(map) => encode_map(buf, map),
        Value::Struct { signature, fields } => encode_struct(buf, *signature, fields),
    }
}

/// Encodes `value` into a fresh buffer and returns its bytes (the `to_bytes`
/// convenience from §6).
pub fn to_bytes(value: &Value) -> Result<Vec<u8>> {
    let mut buf = BytesMut::new();
    encode_value(&mut buf, value)?;
    Ok(buf.to_vec())
}

pub fn encode_null(buf: &mut BytesMut) {
    buf.put_u8(marker::NULL);
}

pub fn encode_bool(buf: &mut BytesMut, value: bool) {
    buf.put_u8(if value { marker::TRUE } else { marker::FALSE });
}

pub fn encode_float(buf: &mut BytesMut, value: f64) {
    buf.put_u8(marker::FLOAT_64);
    buf.put_f64(value);
}

/// Size classes shared by string/bytes/list/map/struct (§4.4). `tiny_base` is
/// `None` for types with no tiny form (bytes); `max_width` bounds the
/// largest size class a type supports (struct: 2 bytes, no 32-bit form).
struct SizeClass {
    tiny_base: Option<u8>,
    marker_8: u8,
    marker_16: u8,
    marker_32: Option<u8>,
    kind: &'static str,
}

fn write_size_header(buf: &mut BytesMut, len: usize, class: &SizeClass) -> Result<()> {
    if let Some(base) = class.tiny_base {
        if len <= 15 {
            buf.put_u8(base | len as u8);
            return Ok(());
        }
    }
    if len <= 0xFF {
        buf.put_u8(class.marker_8);
        buf.put_u8(len as u8);
    } else if len <= 0xFFFF {
        buf.put_u8(class.marker_16);
        buf.put_u16(len as u16);
    } else if let Some(marker_32) = class.marker_32 {
        if len as u64 <= u32::MAX as u64 {
            buf.put_u8(marker_32);
            buf.put_u32(len as u32);
        } else {
            return Err(PackStreamError::ValueTooLarge {
                kind: class.kind,
                len: len as u64,
            });
        }
    } else {
        return Err(PackStreamError::ValueTooLarge {
            kind: class.kind,
            len: len as u64,
        });
    }
    Ok(())
}

const STRING_CLASS: SizeClass = SizeClass {
    tiny_base: Some(marker::TINY_STRING_NIBBLE),
    marker_8: marker::STRING_8,
    marker_16: marker::STRING_16,
    marker_32: Some(marker::STRING_32),
    kind: "string",
};

const BYTES_CLASS: SizeClass = SizeClass {
    tiny_base: None,
    marker_8: marker::BYTES_8,
    marker_16: marker::BYTES_16,
    marker_32: Some(marker::BYTES_32),
    kind: "bytes",
};

const LIST_CLASS: SizeClass = SizeClass {
    tiny_base: Some(marker::TINY_LIST_NIBBLE),
    marker_8: marker::LIST_8,
    marker_16: marker::LIST_16,
    marker_32: Some(marker::LIST_32),
    kind: "list",
};

const MAP_CLASS: SizeClass = SizeClass {
    tiny_base: Some(marker::TINY_DICT_NIBBLE),
    marker_8: marker::DICT_8,
    marker_16: marker::DICT_16,
    marker_32: Some(marker::DICT_32),
    kind: "map",
};

/// Structs top out at a 16-bit size prefix — there is no 32-bit struct
/// marker (§4.1).
const STRUCT_CLASS: SizeClass = SizeClass {
    tiny_base: Some(marker::TINY_STRUCT_NIBBLE),
    marker_8: marker::STRUCT_8,
    marker_16: marker::STRUCT_16,
    marker_32: None,
    kind: "struct",
};

/// Encodes a string (size = byte length, not char count).
pub fn encode_string(buf: &mut BytesMut, value: &str) -> Result<()> {
    write_size_header(buf, value.len(), &STRING_CLASS)?;
    buf.put_slice(value.as_bytes());
    Ok(())
}

pub fn encode_bytes(buf: &mut BytesMut, value: &[u8]) -> Result<()> {
    write_size_header(buf, value.len(), &BYTES_CLASS)?;
    buf.put_slice(value);
    Ok(())
}

pub fn encode_list(buf: &mut BytesMut, items: &[Value]) -> Result<()> {
    write_size_header(buf, items.len(), &LIST_CLASS)?;
    for item in items {
        encode_value(buf, item)?;
    }
    Ok(())
}

pub fn encode_map(buf: &mut BytesMut, map: &PackMap) -> Result<()> {
    write_size_header(buf, map.len(), &MAP_CLASS)?;
    for (key, value) in map.iter() {
        encode_string(buf, key)?;
        encode_value(buf, value)?;
    }
    Ok(())
}

pub fn encode_struct(buf: &mut BytesMut, signature: u8, fields: &[Value]) -> Result<()> {
    write_size_header(buf, fields.len(), &STRUCT_CLASS)?;
    buf.put_u8(signature);
    for field in fields {
        encode_value(buf, field)?;
    }
    Ok(())
}

/// An encoder bound to a growable byte sink.
pub struct Encoder {
    sink: BytesMut,
}

impl Encoder {
    pub fn new() -> Self {
        Self { sink: BytesMut::new() }
    }

    /// Encodes one complete PackStream value into the sink.
    pub fn encode(&mut self, value: &Value) -> Result<()> {
        encode_value(&mut self.sink, value)
    }

    /// Consumes the encoder, returning everything written so far.
    pub fn into_bytes(self) -> Vec<u8> {
        self.sink.to_vec()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
