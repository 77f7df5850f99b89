//! Definition-time configuration of a styled component.

use crate::compound::CompoundVariant;
use crate::variants::{DefaultVariants, VariantAxis, VariantValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tailor_common::{ClassValue, CommonResult, PropertyBag};

/// The `classes` configuration field: a fixed class value, or a pure function
/// of the render's merged props.
///
/// Resolved by a single [`ClassSource::evaluate`] step per render, so the
/// rest of the pipeline never probes which form was configured.
#[derive(Clone)]
pub enum ClassSource {
    Static(ClassValue),
    Computed(Arc<dyn Fn(&PropertyBag) -> ClassValue + Send + Sync>),
}

impl ClassSource {
    pub fn computed(f: impl Fn(&PropertyBag) -> ClassValue + Send + Sync + 'static) -> Self {
        ClassSource::Computed(Arc::new(f))
    }

    pub fn evaluate(&self, props: &PropertyBag) -> ClassValue {
        match self {
            ClassSource::Static(value) => value.clone(),
            ClassSource::Computed(f) => f(props),
        }
    }
}

impl fmt::Debug for ClassSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassSource::Static(value) => f.debug_tuple("Static").field(value).finish(),
            ClassSource::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<ClassValue> for ClassSource {
    fn from(value: ClassValue) -> Self {
        ClassSource::Static(value)
    }
}

impl From<&str> for ClassSource {
    fn from(value: &str) -> Self {
        ClassSource::Static(value.into())
    }
}

impl From<String> for ClassSource {
    fn from(value: String) -> Self {
        ClassSource::Static(value.into())
    }
}

impl From<Vec<ClassValue>> for ClassSource {
    fn from(items: Vec<ClassValue>) -> Self {
        ClassSource::Static(items.into())
    }
}

/// The `other_props` configuration field: a fixed default-prop bag, or a pure
/// function of the caller's props.
#[derive(Clone)]
pub enum PropsSource {
    Static(PropertyBag),
    Computed(Arc<dyn Fn(&PropertyBag) -> PropertyBag + Send + Sync>),
}

impl PropsSource {
    pub fn computed(f: impl Fn(&PropertyBag) -> PropertyBag + Send + Sync + 'static) -> Self {
        PropsSource::Computed(Arc::new(f))
    }

    pub fn evaluate(&self, props: &PropertyBag) -> PropertyBag {
        match self {
            PropsSource::Static(bag) => bag.clone(),
            PropsSource::Computed(f) => f(props),
        }
    }
}

impl fmt::Debug for PropsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropsSource::Static(bag) => f.debug_tuple("Static").field(bag).finish(),
            PropsSource::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<PropertyBag> for PropsSource {
    fn from(bag: PropertyBag) -> Self {
        PropsSource::Static(bag)
    }
}

/// Full definition-time configuration of a styled component.
///
/// Every field is optional; a zero-configuration wrapper is a pure
/// pass-through. Fixed once the wrapper is built, shared by all renders.
#[derive(Debug, Clone, Default)]
pub struct StyleConfig {
    /// Classes that always apply
    pub classes: Option<ClassSource>,
    /// Variant axes, in declaration order
    pub variants: Vec<VariantAxis>,
    /// Combination rules, in declaration order
    pub compound_variants: Vec<CompoundVariant>,
    /// Values applied for axes the caller omits
    pub default_variants: DefaultVariants,
    /// Props passed down to the component by default
    pub other_props: Option<PropsSource>,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(mut self, classes: impl Into<ClassSource>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    pub fn variant(mut self, axis: VariantAxis) -> Self {
        self.variants.push(axis);
        self
    }

    pub fn compound(mut self, rule: CompoundVariant) -> Self {
        self.compound_variants.push(rule);
        self
    }

    pub fn default_variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<VariantValue>,
    ) -> Self {
        self.default_variants.insert(axis.into(), value.into());
        self
    }

    pub fn other_props(mut self, props: impl Into<PropsSource>) -> Self {
        self.other_props = Some(props.into());
        self
    }
}

/// The serializable subset of [`StyleConfig`]: everything except computed
/// sources and default props. Lets variant tables live in JSON next to the
/// code that wraps them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeclarativeConfig {
    pub classes: Option<ClassValue>,
    pub variants: Vec<VariantAxis>,
    pub compound_variants: Vec<CompoundVariant>,
    pub default_variants: DefaultVariants,
}

impl DeclarativeConfig {
    pub fn from_json(source: &str) -> CommonResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> CommonResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<DeclarativeConfig> for StyleConfig {
    fn from(declarative: DeclarativeConfig) -> Self {
        StyleConfig {
            classes: declarative.classes.map(ClassSource::Static),
            variants: declarative.variants,
            compound_variants: declarative.compound_variants,
            default_variants: declarative.default_variants,
            other_props: None,
        }
    }
}
