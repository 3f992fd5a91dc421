//! The closed set of failure modes for PackStream encode/decode.

/// Errors that can occur while encoding or decoding PackStream values.
///
/// Every variant is terminal for the current `encode`/`decode` call: nothing
/// is retried or recovered internally, and the underlying source/sink must be
/// treated as desynchronized afterwards.
#[derive(Debug, thiserror::Error)]
pub enum PackStreamError {
    /// The source ended before the expected number of marker/size/payload
    /// bytes could be read.
    #[error("truncated: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    /// Marker byte falls in a reserved/undefined range.
    #[error("unknown marker: 0x{marker:02X}")]
    UnknownMarker { marker: u8 },

    /// `END_OF_STREAM` (`0xDF`) was seen outside a streamed container, or at
    /// a non-element boundary inside one (e.g. between a streamed map's key
    /// and its value).
    #[error("unexpected end-of-stream marker")]
    UnexpectedEndOfStream,

    /// The wire value's shape is not assignable to the caller's sink.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An encoder input's length or magnitude exceeds the largest
    /// representable band for its type.
    #[error("value too large to encode as {kind}: {len}")]
    ValueTooLarge { kind: &'static str, len: u64 },

    /// A decoded map key was not a string.
    #[error("invalid map key: expected string, found {found}")]
    InvalidKey { found: &'static str },

    /// The underlying reader/writer returned a non-EOF I/O error.
    #[error("I/O error: {0}")]
    IoFailure(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PackStreamError>;
