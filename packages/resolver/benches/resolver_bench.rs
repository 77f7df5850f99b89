use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tailor_resolver::{
    styled, CompoundVariant, PropertyBag, StyleConfig, VariantAxis,
};

fn render_simple_button(c: &mut Criterion) {
    let button = styled(
        "button",
        StyleConfig::new()
            .classes("button flex-1")
            .variant(
                VariantAxis::new("color")
                    .tag("danger", "bg-red-600 hover:bg-red-700")
                    .tag("primary", "bg-indigo-600 hover:bg-indigo-700")
                    .tag("secondary", "border-gray-300 bg-white text-gray-700"),
            )
            .variant(VariantAxis::new("isGhost").tag("true", "opacity-50"))
            .default_variant("color", "primary"),
    );

    let props = PropertyBag::new().with("color", "danger").with("isGhost", true);

    c.bench_function("render_simple_button", |b| {
        b.iter(|| button.render(black_box(&props)))
    });
}

fn render_compound_heavy(c: &mut Criterion) {
    let mut config = StyleConfig::new().classes("button");
    for axis in 0..8 {
        let mut variant = VariantAxis::new(format!("axis{}", axis));
        for tag in 0..8 {
            variant = variant.tag(format!("v{}", tag), format!("class-{}-{}", axis, tag));
        }
        config = config
            .variant(variant)
            .default_variant(format!("axis{}", axis), "v0");
    }
    for rule in 0..16 {
        config = config.compound(
            CompoundVariant::new(format!("compound-{}", rule))
                .requires(format!("axis{}", rule % 8), "v0")
                .requires(format!("axis{}", (rule + 1) % 8), "v1"),
        );
    }

    let button = styled("button", config);
    let props = PropertyBag::new()
        .with("axis1", "v1")
        .with("axis3", "v1")
        .with("id", "bench");

    c.bench_function("render_compound_heavy", |b| {
        b.iter(|| button.render(black_box(&props)))
    });
}

criterion_group!(benches, render_simple_button, render_compound_heavy);
criterion_main!(benches);
