//! Composition driver: wraps a renderable unit with variant configuration
//! and resolves one render at a time.

use crate::class_list::{join, normalize};
use crate::compound::resolve_compound;
use crate::config::StyleConfig;
use crate::partition::residual_props;
use crate::variants::resolve_variants;
use std::collections::HashSet;
use tailor_common::{ClassValue, PropValue, PropertyBag};
use tracing::{debug, instrument};

/// The conventional class-attribute key on property bags.
pub const CLASS_ATTRIBUTE: &str = "className";

/// The underlying renderable unit a [`Styled`] definition wraps: a primitive
/// markup tag, or a named reference to a host component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    Tag(String),
    Component { name: String },
}

impl RenderTarget {
    pub fn component(name: impl Into<String>) -> Self {
        RenderTarget::Component { name: name.into() }
    }

    /// Host display-name convention: the tag itself for primitive tags, the
    /// component's own name otherwise.
    pub fn display_name(&self) -> &str {
        match self {
            RenderTarget::Tag(tag) => tag,
            RenderTarget::Component { name } => name,
        }
    }
}

impl From<&str> for RenderTarget {
    fn from(tag: &str) -> Self {
        RenderTarget::Tag(tag.to_string())
    }
}

impl From<String> for RenderTarget {
    fn from(tag: String) -> Self {
        RenderTarget::Tag(tag)
    }
}

/// The per-render hand-off to the host: where to render, the computed class
/// string, and the residual props.
///
/// `class_name` is also written into `props` under [`CLASS_ATTRIBUTE`],
/// overwriting any raw value the caller supplied, so hosts that only read
/// the bag still see the computed classes. Host references travel through
/// `props` as opaque values; the engine never interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub target: RenderTarget,
    pub class_name: String,
    pub props: PropertyBag,
}

/// A renderable unit wrapped with class-variant configuration.
///
/// Built once at definition time; every render is a pure function of the
/// configuration and the caller's props, so concurrent renders of one
/// definition are safe by construction.
#[derive(Debug, Clone)]
pub struct Styled {
    target: RenderTarget,
    config: StyleConfig,
    axis_names: HashSet<String>,
    display_name: String,
}

/// Wrap a renderable unit with class-variant configuration.
pub fn styled(target: impl Into<RenderTarget>, config: StyleConfig) -> Styled {
    Styled::new(target, config)
}

impl Styled {
    pub fn new(target: impl Into<RenderTarget>, config: StyleConfig) -> Self {
        let target = target.into();
        let axis_names = config
            .variants
            .iter()
            .map(|axis| axis.name.clone())
            .collect();
        let display_name = target.display_name().to_string();
        Self {
            target,
            config,
            axis_names,
            display_name,
        }
    }

    /// Explicit metadata passthrough: override the propagated display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Resolve one render.
    ///
    /// Class order is fixed: default-prop className, caller className,
    /// configured classes, variant classes (axis declaration order), compound
    /// classes (rule declaration order).
    #[instrument(skip(self, caller_props), fields(component = %self.display_name))]
    pub fn render(&self, caller_props: &PropertyBag) -> Rendered {
        let base = match &self.config.other_props {
            Some(source) => source.evaluate(caller_props),
            None => PropertyBag::new(),
        };
        let merged = base.merged(caller_props);

        let mut tokens = Vec::new();
        if let Some(class) = class_prop(&base) {
            tokens.extend(normalize(&class));
        }
        if let Some(class) = class_prop(caller_props) {
            tokens.extend(normalize(&class));
        }
        if let Some(classes) = &self.config.classes {
            tokens.extend(normalize(&classes.evaluate(&merged)));
        }
        for value in resolve_variants(
            &self.config.variants,
            &self.config.default_variants,
            &merged,
        ) {
            tokens.extend(normalize(&value));
        }
        for value in resolve_compound(
            &self.config.compound_variants,
            &self.config.default_variants,
            &merged,
        ) {
            tokens.extend(normalize(&value));
        }
        let class_name = join(&tokens);

        let mut props = residual_props(&merged, &self.axis_names);
        props.insert(CLASS_ATTRIBUTE, class_name.clone());

        debug!(class = %class_name, props = props.len(), "render resolved");
        Rendered {
            target: self.target.clone(),
            class_name,
            props,
        }
    }
}

/// A bag's own `className` entry as a class value. Only string values carry
/// classes; anything else contributes nothing.
fn class_prop(bag: &PropertyBag) -> Option<ClassValue> {
    match bag.get(CLASS_ATTRIBUTE) {
        Some(PropValue::Str(s)) => Some(ClassValue::Str(s.clone())),
        _ => None,
    }
}
