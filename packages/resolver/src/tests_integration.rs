//! End-to-end scenarios through the full render pipeline.

use crate::compound::CompoundVariant;
use crate::config::StyleConfig;
use crate::styled::{styled, Styled, CLASS_ATTRIBUTE};
use crate::variants::VariantAxis;
use tailor_common::{OpaqueValue, PropValue, PropertyBag};

fn action_button() -> Styled {
    styled(
        "button",
        StyleConfig::new()
            .classes("button")
            .variant(
                VariantAxis::new("color")
                    .tag("danger", "bg-red-600")
                    .tag("primary", "bg-indigo-600")
                    .tag("secondary", "bg-gray-300"),
            )
            .variant(VariantAxis::new("isGhost").tag("true", "opacity-50"))
            .default_variant("color", "primary")
            .other_props(PropertyBag::new().with("type", "button")),
    )
}

fn compound_action_button() -> Styled {
    styled(
        "button",
        StyleConfig::new()
            .classes("button")
            .variant(VariantAxis::new("color").tag("primary", "text-white"))
            .variant(VariantAxis::new("isGhost").tag("true", ""))
            .variant(
                VariantAxis::new("variant")
                    .tag("outlined", "")
                    .tag("regular", "")
                    .tag("none", "variant-none"),
            )
            .compound(
                CompoundVariant::new("bg-indigo-600 border-indigo-600")
                    .requires("color", "primary")
                    .requires("variant", "outlined"),
            )
            .compound(
                CompoundVariant::new("bg-indigo-300")
                    .requires("color", "primary")
                    .requires("variant", "regular")
                    .requires("isGhost", true),
            )
            .default_variant("color", "primary")
            .default_variant("variant", "none")
            .other_props(PropertyBag::new().with("type", "button")),
    )
}

#[test]
fn test_renders_default_classes() {
    let out = action_button().render(&PropertyBag::new());
    assert_eq!(out.class_name, "button bg-indigo-600");
}

#[test]
fn test_renders_ghost_classes_when_true() {
    let out = action_button().render(&PropertyBag::new().with("isGhost", true));
    assert_eq!(out.class_name, "button bg-indigo-600 opacity-50");
}

#[test]
fn test_skips_ghost_classes_when_false() {
    let out = action_button().render(&PropertyBag::new().with("isGhost", false));
    assert_eq!(out.class_name, "button bg-indigo-600");
}

#[test]
fn test_skips_ghost_classes_when_falsy() {
    let out = action_button().render(&PropertyBag::new().with("isGhost", PropValue::Null));
    assert_eq!(out.class_name, "button bg-indigo-600");
}

#[test]
fn test_renders_ghost_classes_for_truthy_host_value() {
    let out = action_button().render(
        &PropertyBag::new().with("isGhost", OpaqueValue::new(Vec::<i32>::new())),
    );
    assert_eq!(out.class_name, "button bg-indigo-600 opacity-50");
}

#[test]
fn test_renders_explicit_variant_classes() {
    let out = action_button().render(&PropertyBag::new().with("color", "danger"));
    assert_eq!(out.class_name, "button bg-red-600");
}

#[test]
fn test_renders_multiple_variant_classes() {
    let out = action_button().render(
        &PropertyBag::new()
            .with("color", "secondary")
            .with("isGhost", true),
    );
    assert_eq!(out.class_name, "button bg-gray-300 opacity-50");
}

#[test]
fn test_forwards_default_props() {
    let out = action_button().render(&PropertyBag::new());
    assert_eq!(out.props.get("type"), Some(&PropValue::from("button")));
}

#[test]
fn test_forwards_children_untouched() {
    let children = OpaqueValue::new("Hello world");
    let out = action_button().render(&PropertyBag::new().with("children", children.clone()));
    assert_eq!(
        out.props.get("children"),
        Some(&PropValue::Opaque(children))
    );
}

#[test]
fn test_compound_skipped_without_relevant_props() {
    let out = compound_action_button().render(&PropertyBag::new().with("color", "primary"));
    assert_eq!(out.class_name, "button text-white variant-none");
}

#[test]
fn test_compound_applies_with_defaults_filled_in() {
    // color comes from the defaults; variant from the caller.
    let out = compound_action_button().render(&PropertyBag::new().with("variant", "outlined"));
    assert_eq!(
        out.class_name,
        "button text-white bg-indigo-600 border-indigo-600"
    );
}

#[test]
fn test_compound_boolean_requirement() {
    let out = compound_action_button().render(
        &PropertyBag::new()
            .with("variant", "regular")
            .with("isGhost", true),
    );
    assert_eq!(out.class_name, "button text-white bg-indigo-300");
}

#[test]
fn test_unknown_variant_value_does_not_fall_back_to_default() {
    let out = action_button().render(&PropertyBag::new().with("color", "unknown"));
    assert_eq!(out.class_name, "button");
}

#[test]
fn test_class_sequence_order() {
    // One contribution from every source, asserting exact concatenation
    // order: default-prop className, caller className, configured classes,
    // variant classes, compound classes.
    let button = styled(
        "button",
        StyleConfig::new()
            .classes("static")
            .variant(VariantAxis::new("color").tag("danger", "variant"))
            .compound(CompoundVariant::new("compound").requires("color", "danger"))
            .other_props(PropertyBag::new().with(CLASS_ATTRIBUTE, "base")),
    );

    let out = button.render(
        &PropertyBag::new()
            .with(CLASS_ATTRIBUTE, "caller")
            .with("color", "danger"),
    );

    assert_eq!(out.class_name, "base caller static variant compound");
    assert_eq!(
        out.props.get(CLASS_ATTRIBUTE),
        Some(&PropValue::from("base caller static variant compound"))
    );
}
