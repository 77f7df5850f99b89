//! Compound-variant resolution: conjunctive conditions over multiple axes'
//! effective values.

use crate::variants::{DefaultVariants, VariantValue};
use serde::{Deserialize, Serialize};
use tailor_common::{ClassValue, PropValue, PropertyBag};
use tracing::debug;

/// One combination rule: every requirement must hold against the
/// already-defaulted effective values for the rule's classes to apply.
///
/// Declaration order of rules is significant and preserved in output; several
/// rules may match at once and all contribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant {
    /// Required (axis, value) pairs. A rule with no requirements never
    /// matches, so an accidentally empty rule cannot degenerate into
    /// "always apply".
    pub when: Vec<(String, VariantValue)>,
    pub classes: ClassValue,
}

impl CompoundVariant {
    pub fn new(classes: impl Into<ClassValue>) -> Self {
        Self {
            when: Vec::new(),
            classes: classes.into(),
        }
    }

    /// Builder-style requirement registration
    pub fn requires(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.when.push((axis.into(), value.into()));
        self
    }

    /// Whether every requirement holds against the effective props view.
    ///
    /// Boolean requirements use the truthiness test (an absent prop is
    /// falsy); tag requirements use string equality with the effective
    /// value's tag form.
    pub fn matches(&self, effective: &PropertyBag) -> bool {
        if self.when.is_empty() {
            return false;
        }

        self.when.iter().all(|(axis, required)| {
            let value = effective.get(axis);
            match required {
                VariantValue::Flag(true) => value.is_some_and(PropValue::is_truthy),
                VariantValue::Flag(false) => !value.is_some_and(PropValue::is_truthy),
                VariantValue::Tag(tag) => value.is_some_and(|v| v.tag() == *tag),
            }
        })
    }
}

/// Resolve the class contributions of every matching rule, in rule
/// declaration order.
///
/// Matching runs against an effective view of the props (declared defaults
/// underneath, caller props on top). The effective view exists only for
/// matching; it is never the bag forwarded downstream.
pub fn resolve_compound(
    rules: &[CompoundVariant],
    defaults: &DefaultVariants,
    props: &PropertyBag,
) -> Vec<ClassValue> {
    if rules.is_empty() {
        return Vec::new();
    }

    let mut effective = PropertyBag::new();
    for (axis, value) in defaults {
        effective.insert(axis.clone(), value.as_prop());
    }
    let effective = effective.merged(props);

    let mut out = Vec::new();
    for (index, rule) in rules.iter().enumerate() {
        if rule.matches(&effective) {
            debug!(rule = index, "compound variant matched");
            out.push(rule.classes.clone());
        }
    }
    out
}
