//! Property partitioning: strip variant-axis keys from the merged bag.

use std::collections::HashSet;
use tailor_common::PropertyBag;

/// Produce the residual bag forwarded to the underlying unit.
///
/// Every declared axis key is removed regardless of its value; all other
/// entries pass through unchanged, in order. A raw `className` entry also
/// passes through here — the composition driver overwrites it with the
/// computed class string afterwards.
pub fn residual_props(merged: &PropertyBag, axis_names: &HashSet<String>) -> PropertyBag {
    let mut out = PropertyBag::new();
    for (key, value) in merged.iter() {
        if !axis_names.contains(key) {
            out.insert(key, value.clone());
        }
    }
    out
}
