use serde::{Deserialize, Serialize};

/// A recursively nested class input.
///
/// Class contributions arrive as a single string, as nothing at all, or as an
/// ordered list of further class values. Normalization (see the resolver's
/// `class_list` module) flattens any nesting depth into an ordered sequence of
/// non-empty tokens. Duplicate tokens are kept; this is concatenation, not a
/// set.
///
/// The untagged serde form maps JSON `null` to `None`, a JSON string to
/// `Str`, and a JSON array to `List`, so variant tables can be written
/// directly as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassValue {
    /// Contributes nothing
    None,
    /// A literal class string (may itself hold space-separated tokens)
    Str(String),
    /// An ordered list of nested class values
    List(Vec<ClassValue>),
}

impl ClassValue {
    pub fn is_none(&self) -> bool {
        matches!(self, ClassValue::None)
    }
}

impl Default for ClassValue {
    fn default() -> Self {
        ClassValue::None
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Str(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Str(s)
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => ClassValue::None,
        }
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}
