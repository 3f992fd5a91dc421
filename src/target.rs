//! Shape-directed decode targets (§4.5, §9): narrowing a decoded [`Value`]
//! into a concrete Rust type instead of materializing the universal value.
//!
//! The decoder always produces a [`Value`] first (§9's "always produce the
//! universal value, then adapt" design); this module is the adapter layer —
//! per-target-shape rules for integer narrowing, float widening, fixed vs.
//! variable-length list fill, and map merge, generalized from the pattern of
//! narrowly-typed `require_*` helpers that only ever targeted one hardcoded
//! sink.

use crate::error::{PackStreamError, Result};
use crate::int_band;
use crate::value::{PackMap, Value};

/// A concrete Rust type that a decoded [`Value`] can be narrowed into.
///
/// `self` is the sink's prior state (its defaults, or — for maps — its
/// preexisting entries); `value` is the freshly decoded wire value. Returns
/// the merged/narrowed result, or `TypeMismatch` if `value`'s shape cannot be
/// assigned to this sink.
///
/// `Null`'s "overwrites the sink with its zero/default" rule (§4.5) is
/// implemented only for [`Option<T>`] sinks, which resolve it to `None`; a
/// non-`Option` sink (e.g. a bare `i64`) has no zero/default it can produce
/// without a target-language-reflection layer this codec deliberately leaves
/// out (§1), so it rejects `Null` with `TypeMismatch` instead.
pub trait DecodeTarget: Sized {
    fn decode_into(self, value: Value) -> Result<Self>;
}

impl DecodeTarget for bool {
    fn decode_into(self, value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(PackStreamError::TypeMismatch {
                expected: "bool",
                found: other.kind_name(),
            }),
        }
    }
}

macro_rules! impl_unsigned_target {
    ($ty:ty, $bits:expr) => {
        impl DecodeTarget for $ty {
            fn decode_into(self, value: Value) -> Result<Self> {
                match value {
                    Value::Int(i) => Ok(int_band::narrow_to_u64(i, $bits)? as $ty),
                    other => Err(PackStreamError::TypeMismatch {
                        expected: "integer",
                        found: other.kind_name(),
                    }),
                }
            }
        }
    };
}

macro_rules! impl_signed_target {
    ($ty:ty, $bits:expr) => {
        impl DecodeTarget for $ty {
            fn decode_into(self, value: Value) -> Result<Self> {
                match value {
                    Value::Int(i) => Ok(int_band::narrow_to_i64(i, $bits)? as $ty),
                    other => Err(PackStreamError::TypeMismatch {
                        expected: "integer",
                        found: other.kind_name(),
                    }),
                }
            }
        }
    };
}

impl_unsigned_target!(u8, 8);
impl_unsigned_target!(u16, 16);
impl_unsigned_target!(u32, 32);
impl_unsigned_target!(u64, 64);
impl_signed_target!(i8, 8);
impl_signed_target!(i16, 16);
impl_signed_target!(i32, 32);
impl_signed_target!(i64, 64);

impl DecodeTarget for f64 {
    fn decode_into(self, value: Value) -> Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            other => Err(PackStreamError::TypeMismatch {
                expected: "float",
                found: other.kind_name(),
            }),
        }
    }
}

impl DecodeTarget for f32 {
    fn decode_into(self, value: Value) -> Result<Self> {
        match value {
            Value::Float(f) => {
                if f.is_finite() && f.abs() > f64::from(f32::MAX) {
                    Err(PackStreamError::TypeMismatch {
                        expected: "single-precision float",
                        found: "double exceeding f32 range",
                    })
                } else {
                    Ok(f as f32)
                }
            }
            other => Err(PackStreamError::TypeMismatch {
                expected: "float",
                found: other.kind_name(),
            }),
        }
    }
}

impl DecodeTarget for String {
    fn decode_into(self, value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(PackStreamError::TypeMismatch {
                expected: "string",
                found: other.kind_name(),
            }),
        }
    }
}

impl DecodeTarget for Vec<u8> {
    fn decode_into(self, value: Value) -> Result<Self> {
        match value {
            Value::Bytes(b) => Ok(b),
            other => Err(PackStreamError::TypeMismatch {
                expected: "bytes",
                found: other.kind_name(),
            }),
        }
    }
}

/// Variable-length list sink: grown to exactly `n`, the wire list's length.
impl<T: DecodeTarget + Default> DecodeTarget for Vec<T> {
    fn decode_into(self, value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items
                .into_iter()
                .map(|item| T::default().decode_into(item))
                .collect(),
            other => Err(PackStreamError::TypeMismatch {
                expected: "list",
                found: other.kind_name(),
            }),
        }
    }
}

/// Fixed-length list sink of size `N`. The first `min(n, N)` wire elements
/// are decoded positionally; if `n < N` the remainder keeps the sink's prior
/// (default) values, and if `n > N` the remaining wire elements are decoded
/// and discarded so the decoder's cursor stays correctly positioned (§4.5).
impl<T: DecodeTarget + Default, const N: usize> DecodeTarget for [T; N] {
    fn decode_into(self, value: Value) -> Result<Self> {
        match value {
            Value::List(items) => {
                let mut out = self;
                let mut items = items.into_iter();
                for slot in out.iter_mut() {
                    match items.next() {
                        Some(item) => *slot = T::default().decode_into(item)?,
                        None => break,
                    }
                }
                for leftover in items {
                    // consumed-and-discarded: validate shape but drop the value.
                    T::default().decode_into(leftover)?;
                }
                Ok(out)
            }
            other => Err(PackStreamError::TypeMismatch {
                expected: "list",
                found: other.kind_name(),
            }),
        }
    }
}

/// String-keyed associative sink with merge semantics: preexisting entries
/// in `self` are preserved, wire entries with equal keys overwrite them.
impl DecodeTarget for PackMap {
    fn decode_into(self, value: Value) -> Result<Self> {
        match value {
            Value::Map(wire) => {
                let mut merged = self;
                for (k, v) in wire {
                    merged.insert(k, v);
                }
                Ok(merged)
            }
            other => Err(PackStreamError::TypeMismatch {
                expected: "map",
                found: other.kind_name(),
            }),
        }
    }
}

/// The universal sink: any decoded value is assignable to itself.
impl DecodeTarget for Value {
    fn decode_into(self, value: Value) -> Result<Self> {
        Ok(value)
    }
}

/// `Null` overwrites any sink wrapped in `Option` with its zero/default —
/// anything else narrows into the wrapped type.
impl<T: DecodeTarget> DecodeTarget for Option<T> {
    fn decode_into(self, value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => {
                let inner = match self {
                    Some(inner) => inner,
                    None => return Err(PackStreamError::TypeMismatch {
                        expected: "some",
                        found: "null",
                    }),
                };
                Ok(Some(inner.decode_into(other)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_narrows_into_u8() {
        assert_eq!(u8::default().decode_into(Value::Int(200)).unwrap(), 200);
        assert!(u8::default().decode_into(Value::Int(-1)).is_err());
        assert!(u8::default().decode_into(Value::Int(256)).is_err());
    }

    #[test]
    fn float_into_f32_checks_overflow() {
        assert!((f32::default().decode_into(Value::Float(1.5)).unwrap() - 1.5).abs() < 1e-6);
        assert!(f32::default()
            .decode_into(Value::Float(f64::MAX))
            .is_err());
    }

    #[test]
    fn fixed_array_fills_short_and_discards_long() {
        let short = [0i64; 3].decode_into(Value::List(vec![Value::Int(1), Value::Int(2)]));
        assert_eq!(short.unwrap(), [1, 2, 0]);

        let long = [0i64; 2].decode_into(Value::List(vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
        ]));
        assert_eq!(long.unwrap(), [1, 2]);
    }

    #[test]
    fn map_merge_preserves_and_overwrites() {
        let existing = PackMap::from([("a".to_string(), Value::Int(1))]);
        let wire = Value::Map(PackMap::from([("b".to_string(), Value::Int(2))]));
        let merged = existing.decode_into(wire).unwrap();
        assert_eq!(merged.get("a"), Some(&Value::Int(1)));
        assert_eq!(merged.get("b"), Some(&Value::Int(2)));
    }

    #[test]
    fn option_null_clears_sink() {
        let present: Option<i64> = Some(5);
        assert_eq!(present.decode_into(Value::Null).unwrap(), None);
    }
}
