//! # Tailor Resolver
//!
//! Resolves declarative class-variant configuration into the final class
//! string and forwarded property bag for one render of a wrapped component.
//!
//! ## Pipeline
//!
//! Per render, the composition driver ([`Styled::render`]):
//!
//! 1. evaluates the configured default props (static bag or factory),
//! 2. shallow-merges caller props over them (caller wins key-by-key),
//! 3. resolves per-axis variant classes, then compound-variant classes,
//! 4. strips the variant-axis keys from the merged bag,
//! 5. hands the joined class string plus the residual props to the host.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Resolution is fully deterministic.**
//!
//! For any (StyleConfig, caller props) pair, `render()` produces identical
//! output on every invocation:
//!
//! - Class order is fixed: base-bag className, caller-bag className,
//!   configured classes, variant classes in axis declaration order, compound
//!   classes in rule declaration order.
//! - No map iteration order leaks into output (ordering comes from the
//!   declaration vectors, never from a HashMap walk).
//! - No time/random/environment dependence.
//!
//! Determinism is what makes renders memoizable and snapshot-testable.
//!
//! ## Degradation, not errors
//!
//! The engine prefers silent degradation: an unknown variant value, a falsy
//! boolean prop, or a missing configuration section all contribute nothing.
//! There is no error path inside resolution; [`Validator`] exists to surface
//! likely configuration mistakes at development time instead.
//!
//! ## Usage
//!
//! ```rust
//! use tailor_resolver::{styled, PropertyBag, StyleConfig, VariantAxis};
//!
//! let action = styled(
//!     "button",
//!     StyleConfig::new()
//!         .classes("button")
//!         .variant(
//!             VariantAxis::new("color")
//!                 .tag("danger", "bg-red-600")
//!                 .tag("primary", "bg-indigo-600"),
//!         )
//!         .default_variant("color", "primary"),
//! );
//!
//! let out = action.render(&PropertyBag::new().with("color", "danger"));
//! assert_eq!(out.class_name, "button bg-red-600");
//! ```

pub mod class_list;
pub mod compound;
pub mod config;
pub mod partition;
pub mod styled;
pub mod validator;
pub mod variants;

#[cfg(test)]
mod tests_integration;

pub use class_list::{join, normalize};
pub use compound::{resolve_compound, CompoundVariant};
pub use config::{ClassSource, DeclarativeConfig, PropsSource, StyleConfig};
pub use partition::residual_props;
pub use styled::{styled, RenderTarget, Rendered, Styled, CLASS_ATTRIBUTE};
pub use validator::{ValidationLevel, ValidationWarning, Validator};
pub use variants::{resolve_variants, DefaultVariants, VariantAxis, VariantValue};

// Re-export the shared data model so most callers only need this crate.
pub use tailor_common::{ClassValue, OpaqueValue, PropValue, PropertyBag};
