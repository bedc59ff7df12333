//! Key policy for registries.
//!
//! A registry key must be hashable and comparable. Most key types get that
//! from the type system; [`Key`] is the exception, since it can carry a float
//! and `NaN` compares unequal to itself. Every keyed operation runs
//! [`KeyLike::validate`] before it touches the map, so such keys are rejected
//! with [`RegistryError::InvalidKeyType`](crate::RegistryError::InvalidKeyType)
//! instead of silently corrupting lookups.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Borrowed form of a key, usable for lookups.
pub trait KeyLike: Hash + Eq + fmt::Display {
    /// Checks that the key can act as a map key.
    ///
    /// Returns the reason when it cannot.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Blank keys make the registration wrapper fall back to the object's
    /// declared name.
    fn is_blank(&self) -> bool {
        false
    }
}

/// Owned key stored inside a registry.
pub trait RegistryKey: KeyLike + Clone + fmt::Debug + Send + Sync + 'static {}

impl<T> RegistryKey for T where T: KeyLike + Clone + fmt::Debug + Send + Sync + 'static {}

impl KeyLike for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl KeyLike for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl KeyLike for Arc<str> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_plain_key {
    ($($ty:ty),* $(,)?) => {
        $(impl KeyLike for $ty {})*
    };
}

impl_plain_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char);

/// Dynamic key for registries that mix key shapes.
///
/// Variants never compare equal across kinds: `Int(1)`, `Float(1.0)` and
/// `Bool(true)` are three distinct keys. Numeric values are not unified.
///
/// Only hashable shapes can be expressed, so mutable containers such as lists
/// or maps have no variant and cannot reach a registry. The one value that
/// fails [`KeyLike::validate`] is a `NaN` float, at any depth of a `Tuple`.
#[derive(Debug, Clone)]
pub enum Key {
    Unit,
    Bool(bool),
    Int(i64),
    Str(String),
    Float(f64),
    Tuple(Vec<Key>),
}

impl Key {
    fn float_bits(value: f64) -> u64 {
        // 0.0 and -0.0 compare equal, so they must hash equal.
        if value == 0.0 {
            0.0f64.to_bits()
        } else {
            value.to_bits()
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Unit, Key::Unit) => true,
            (Key::Bool(a), Key::Bool(b)) => a == b,
            (Key::Int(a), Key::Int(b)) => a == b,
            (Key::Str(a), Key::Str(b)) => a == b,
            (Key::Float(a), Key::Float(b)) => Key::float_bits(*a) == Key::float_bits(*b),
            (Key::Tuple(a), Key::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Key::Unit => {}
            Key::Bool(b) => b.hash(state),
            Key::Int(i) => i.hash(state),
            Key::Str(s) => s.hash(state),
            Key::Float(f) => Key::float_bits(*f).hash(state),
            Key::Tuple(items) => items.hash(state),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Unit => f.write_str("()"),
            Key::Bool(b) => write!(f, "{}", b),
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => f.write_str(s),
            Key::Float(v) => write!(f, "{:?}", v),
            Key::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match item {
                        Key::Str(s) => write!(f, "'{}'", s)?,
                        other => write!(f, "{}", other)?,
                    }
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl KeyLike for Key {
    fn validate(&self) -> Result<(), String> {
        match self {
            Key::Float(v) if v.is_nan() => Err("NaN is not comparable".to_string()),
            Key::Tuple(items) => items.iter().try_for_each(Key::validate),
            _ => Ok(()),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Key::Str(s) if s.is_empty())
    }
}

impl From<()> for Key {
    fn from(_: ()) -> Self {
        Key::Unit
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value.into())
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Float(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<Vec<Key>> for Key {
    fn from(items: Vec<Key>) -> Self {
        Key::Tuple(items)
    }
}
