//! The universal PackStream value and its string-keyed map representation.

use std::fmt;

/// A string-keyed associative container with last-wins insert semantics.
///
/// PackStream maps are wire-encoded as ordered key/value pairs and the format
/// permits duplicate keys; the decoder must resolve duplicates by letting the
/// later entry overwrite the earlier one (§3, §4.5). A plain `Vec<(String,
/// Value)>` makes that rule an explicit linear scan on insert rather than an
/// accident of hash-map insertion order, and keeps equality well-defined as
/// unordered pair-set equality (§8) instead of inheriting `HashMap`'s
/// unspecified iteration order.
#[derive(Debug, Clone, Default)]
pub struct PackMap(Vec<(String, Value)>);

impl PackMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inserts `key` → `value`. If `key` is already present its value is
    /// overwritten in place (last-wins); otherwise the pair is appended.
    pub fn insert(&mut self, key: String, value: Value) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.0.iter()
    }
}

impl PartialEq for PackMap {
    fn eq(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        self.0
            .iter()
            .all(|(k, v)| other.get(k).is_some_and(|ov| ov == v))
    }
}

impl FromIterator<(String, Value)> for PackMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = PackMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<const N: usize> From<[(String, Value); N]> for PackMap {
    fn from(pairs: [(String, Value); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for PackMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PackMap {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A PackStream value: the nine-variant universal tagged union (§3).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(PackMap),
    /// A length-prefixed, signature-tagged ordered sequence of fields.
    /// `signature` is opaque to the codec — its meaning is assigned entirely
    /// by the application layer (e.g. Bolt message types).
    Struct { signature: u8, fields: Vec<Value> },
}

impl Value {
    /// Returns the value as a string reference, if it is a `String` variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an `Int` variant.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// A short, stable name for the value's kind, used in `TypeMismatch`
    /// error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Struct { .. } => "struct",
        }
    }
}

// -- Convenience conversions --

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

/// `Int` is signed 64-bit on the wire (§4.3); an unsigned source that doesn't
/// fit in `i64` has no representable band at all.
impl TryFrom<u64> for Value {
    type Error = crate::error::PackStreamError;

    fn try_from(u: u64) -> crate::error::Result<Self> {
        i64::try_from(u)
            .map(Self::Int)
            .map_err(|_| crate::error::PackStreamError::ValueTooLarge {
                kind: "int",
                len: u,
            })
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl From<PackMap> for Value {
    fn from(m: PackMap) -> Self {
        Self::Map(m)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Self::Struct { signature, fields } => {
                write!(f, "Struct(0x{signature:02X})[")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{field}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_duplicate_key_last_wins() {
        let mut map = PackMap::new();
        map.insert("a".into(), Value::Int(1));
        map.insert("a".into(), Value::Int(2));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&Value::Int(2)));
    }

    #[test]
    fn u64_conversion_rejects_values_beyond_i64_max() {
        assert_eq!(Value::try_from(42u64).unwrap(), Value::Int(42));
        assert!(Value::try_from(u64::from(u32::MAX) + 1).is_ok());
        assert!(Value::try_from(i64::MAX as u64 + 1).is_err());
    }

    #[test]
    fn map_equality_is_unordered() {
        let a = PackMap::from([
            ("x".to_string(), Value::Int(1)),
            ("y".to_string(), Value::Int(2)),
        ]);
        let b = PackMap::from([
            ("y".to_string(), Value::Int(2)),
            ("x".to_string(), Value::Int(1)),
        ]);
        assert_eq!(a, b);
    }
}
