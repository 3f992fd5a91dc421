//! A pure-Rust codec for PackStream, the binary serialization format used by
//! the Neo4j Bolt protocol.
//!
//! PackStream values are a self-describing byte stream: one marker byte
//! followed by an optional size prefix and payload. This crate converts
//! between that wire format and [`Value`], a small universal tagged union
//! (null, bool, int, float, string, bytes, list, map, struct).
//!
//! # Architecture
//!
//! - **`marker`** — compile-time marker byte constants and size-class ranges
//! - **`size`** — unsigned big-endian size prefixes (1/2/4 bytes)
//! - **`int_band`** — integer width-band selection (encode) and narrowing (decode)
//! - **`value`** — the universal [`Value`] type and its [`PackMap`] map representation
//! - **`encode`** — [`Value`] → bytes
//! - **`decode`** — bytes → [`Value`], plus shape-directed decoding via [`target::DecodeTarget`]
//! - **`target`** — per-type adapters for shape-directed decode
//! - **`hook`** — the extension interface for self-serializing types
//! - **`error`** — the closed [`error::PackStreamError`] taxonomy
//!
//! ```
//! use packstream_codec::value::Value;
//! use packstream_codec::{encode, decode};
//!
//! let bytes = encode::to_bytes(&Value::Int(42)).unwrap();
//! let (value, consumed) = decode::from_bytes(&bytes).unwrap();
//! assert_eq!(value, Value::Int(42));
//! assert_eq!(consumed, bytes.len());
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod hook;
pub mod int_band;
pub mod marker;
pub mod size;
pub mod target;
pub mod value;

pub use decode::Decoder;
pub use encode::Encoder;
pub use error::{PackStreamError, Result};
pub use value::{PackMap, Value};
