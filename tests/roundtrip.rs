//! Property-based round-trip and truncation tests against hand-generated
//! [`Value`] trees (§8 invariants #1 and #2).

use packstream_codec::value::{PackMap, Value};
use packstream_codec::{decode, encode};
use proptest::prelude::*;

/// A bounded-depth, bounded-width `Value` generator. The wire format is
/// recursive but there is no third-party `Value` type to derive `Arbitrary`
/// for, so the leaf/branch split is written out by hand.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        // NaN round-trips bit-for-bit but `Value`'s derived `PartialEq`
        // compares floats with `==`, under which NaN != NaN — exclude it so
        // the round-trip-identity property isn't false under its own
        // generator.
        any::<f64>()
            .prop_filter("no NaN", |f| !f.is_nan())
            .prop_map(Value::Float),
        ".{0,32}".prop_map(Value::String),
        proptest::collection::vec(any::<u8>(), 0..32).prop_map(Value::Bytes),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..8).prop_map(Value::List),
            proptest::collection::vec((".{0,16}", inner.clone()), 0..8)
                .prop_map(|pairs| Value::Map(PackMap::from_iter(pairs))),
            (any::<u8>(), proptest::collection::vec(inner, 0..8)).prop_map(
                |(signature, fields)| Value::Struct { signature, fields }
            ),
        ]
    })
}

proptest! {
    /// Invariant #1: decode(encode(v)) == v.
    #[test]
    fn round_trip_identity(value in arb_value()) {
        let bytes = encode::to_bytes(&value).unwrap();
        let (decoded, consumed) = decode::from_bytes(&bytes).unwrap();
        prop_assert_eq!(consumed, bytes.len());
        prop_assert_eq!(decoded, value);
    }

    /// Invariant #2: no strict prefix of an encoded buffer decodes without
    /// a `Truncated` error.
    #[test]
    fn truncated_prefix_never_decodes(value in arb_value()) {
        let bytes = encode::to_bytes(&value).unwrap();
        for cut in 0..bytes.len() {
            let prefix = &bytes[..cut];
            // A cut mid-marker can surface as Truncated or, if the partial
            // byte happens to land on a reserved value, UnknownMarker —
            // either way it must never succeed.
            prop_assert!(decode::from_bytes(prefix).is_err());
        }
    }
}
