//! Class value normalization.
//!
//! Flattens arbitrarily nested class inputs into an ordered sequence of
//! non-empty tokens. Pure and idempotent: normalizing an already-flat list
//! yields the same list.

use tailor_common::ClassValue;

/// Normalize a class value into its ordered, non-empty string tokens.
///
/// Empty strings and `ClassValue::None` vanish; lists flatten recursively in
/// order. Duplicates are kept (concatenation semantics).
pub fn normalize(value: &ClassValue) -> Vec<String> {
    let mut out = Vec::new();
    push_tokens(value, &mut out);
    out
}

fn push_tokens(value: &ClassValue, out: &mut Vec<String>) {
    match value {
        ClassValue::None => {}
        ClassValue::Str(s) => {
            if !s.is_empty() {
                out.push(s.clone());
            }
        }
        ClassValue::List(items) => {
            for item in items {
                push_tokens(item, out);
            }
        }
    }
}

/// Join normalized tokens into the final class string (single-space
/// separator, the conventional class-attribute form).
pub fn join(tokens: &[String]) -> String {
    tokens.join(" ")
}
