//! Per-axis variant resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tailor_common::{ClassValue, PropValue, PropertyBag};
use tracing::debug;

/// A named dimension of visual variation: each recognized value-tag maps to a
/// class contribution.
///
/// An axis whose map contains the literal tag `"true"` or `"false"` is
/// boolean-style; candidate values for it go through the truthiness test
/// before lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantAxis {
    pub name: String,
    pub classes: HashMap<String, ClassValue>,
}

impl VariantAxis {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: HashMap::new(),
        }
    }

    /// Builder-style tag registration
    pub fn tag(mut self, tag: impl Into<String>, classes: impl Into<ClassValue>) -> Self {
        self.classes.insert(tag.into(), classes.into());
        self
    }

    pub fn is_boolean_style(&self) -> bool {
        self.classes.contains_key("true") || self.classes.contains_key("false")
    }
}

/// A declared default or required value for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    Flag(bool),
    Tag(String),
}

impl VariantValue {
    pub fn as_prop(&self) -> PropValue {
        match self {
            VariantValue::Flag(b) => PropValue::Bool(*b),
            VariantValue::Tag(tag) => PropValue::Str(tag.clone()),
        }
    }
}

impl From<bool> for VariantValue {
    fn from(b: bool) -> Self {
        VariantValue::Flag(b)
    }
}

impl From<&str> for VariantValue {
    fn from(tag: &str) -> Self {
        VariantValue::Tag(tag.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(tag: String) -> Self {
        VariantValue::Tag(tag)
    }
}

/// Defaults applied only for axes the caller omits.
pub type DefaultVariants = HashMap<String, VariantValue>;

/// Resolve the class contribution of every axis, in axis declaration order.
///
/// Per axis, exactly one candidate value is tried: the explicit prop if the
/// key is present, else the declared default, else the axis is skipped.
/// Boolean-style axes coerce the candidate through the truthiness test before
/// lookup; other axes use the candidate's string form directly.
///
/// No fallback re-lookup: an explicit prop whose value has no entry in the
/// axis map contributes nothing, and the declared default is NOT retried for
/// it. Only the raw-value choice has explicit-then-default precedence.
pub fn resolve_variants(
    axes: &[VariantAxis],
    defaults: &DefaultVariants,
    props: &PropertyBag,
) -> Vec<ClassValue> {
    let mut out = Vec::new();

    for axis in axes {
        let candidate = props
            .get(&axis.name)
            .cloned()
            .or_else(|| defaults.get(&axis.name).map(VariantValue::as_prop));

        let Some(value) = candidate else {
            continue;
        };

        let tag = if axis.is_boolean_style() {
            value.is_truthy().to_string()
        } else {
            value.tag()
        };

        match axis.classes.get(&tag) {
            Some(classes) if !classes.is_none() => {
                debug!(axis = %axis.name, tag = %tag, "variant resolved");
                out.push(classes.clone());
            }
            _ => {
                debug!(axis = %axis.name, tag = %tag, "no class entry for variant value");
            }
        }
    }

    out
}
