//! The extension hook (§4.6): lets a concrete type consume/produce its own
//! PackStream bytes instead of going through the universal [`Value`].
//!
//! Either half may be implemented independently. A type that implements only
//! [`PackProduce`] can still be decoded generically as a plain [`Value`]; a
//! type that implements only [`PackConsume`] still encodes through some other
//! path (commonly hand-written, calling the free functions in
//! [`crate::encode`] directly).

use bytes::{Buf, BufMut};

use crate::error::Result;

/// Produces this value's own wire bytes. The output must be a complete,
/// valid PackStream value (one marker plus whatever payload its marker
/// implies) — the codec writes it verbatim without inspection or wrapping.
pub trait PackProduce {
    fn produce(&self, buf: &mut impl BufMut);
}

/// Consumes this value's own wire bytes, given the marker the decoder has
/// already read.
///
/// `buf` is positioned at the payload immediately following `marker`.
/// Implementations must read exactly the payload bytes that marker implies —
/// no more, no less — so the decoder's cursor stays correctly positioned for
/// whatever follows.
pub trait PackConsume: Sized {
    fn consume(marker: u8, buf: &mut impl Buf) -> Result<Self>;
}
