use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a host value the engine never interprets (callbacks,
/// element references, child nodes). Forwarded through the residual property
/// bag untouched.
///
/// Equality is handle identity, which is what prop forwarding needs: the same
/// handle in means the same handle out.
#[derive(Clone)]
pub struct OpaqueValue(Arc<dyn Any + Send + Sync>);

impl OpaqueValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaqueValue(..)")
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A single property value.
///
/// Property bags are duck-typed at the host boundary; inside the engine every
/// value is one of these kinds. `Opaque` covers everything the engine only
/// forwards.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    Opaque(OpaqueValue),
}

impl PropValue {
    /// The single truthiness test used by the engine.
    ///
    /// Applied only to boolean-style variant axes and boolean compound
    /// requirements; values are never coerced anywhere else. Null, `false`,
    /// zero (and NaN), and the empty string are falsy; opaque host values are
    /// always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Num(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Opaque(_) => true,
        }
    }

    /// String form used for variant-tag lookup on non-boolean axes.
    ///
    /// Integral numbers print without a trailing `.0` so a numeric prop can
    /// select a tag like `"2"`. Opaque values have no meaningful tag form and
    /// will simply miss every lookup.
    pub fn tag(&self) -> String {
        match self {
            PropValue::Null => "null".to_string(),
            PropValue::Bool(b) => b.to_string(),
            PropValue::Num(n) => format_num(*n),
            PropValue::Str(s) => s.clone(),
            PropValue::Opaque(_) => "[opaque]".to_string(),
        }
    }
}

fn format_num(n: f64) -> String {
    if n.is_finite() && n == n.trunc() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Num(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Num(n as f64)
    }
}

impl From<OpaqueValue> for PropValue {
    fn from(value: OpaqueValue) -> Self {
        PropValue::Opaque(value)
    }
}

/// An ordered string-keyed property bag.
///
/// Insertion order is preserved so forwarded props come out the way they went
/// in. Bags are small (a render call's worth of props), so lookups are linear
/// scans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: Vec<(String, PropValue)>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace. Replacing keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Shallow merge: entries from `overrides` win key-by-key.
    pub fn merged(&self, overrides: &PropertyBag) -> PropertyBag {
        let mut out = self.clone();
        for (key, value) in overrides.iter() {
            out.insert(key, value.clone());
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
