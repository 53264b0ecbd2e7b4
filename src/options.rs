//! Options records and the layered merge that assembles them.
//!
//! Every definition is an insertion-ordered `serde_json::Map` built by
//! merging layers key by key, last writer wins: built-in defaults, then the
//! synthesized labels, then caller base overrides, then the late rewrite
//! and REST layers. Merging is shallow; a nested record replaces its
//! predecessor wholly. The one nested record this module merges itself is
//! the rewrite sub-record, whose defaults are combined with caller
//! overrides before being installed under `rewrite`.

use crate::key::derive_slug;
use serde_json::{Map, Value, json};

/// A registration options record: option name to string/bool/int/nested
/// value, preserving insertion order.
pub type OptionsRecord = Map<String, Value>;

/// Endpoint mask meaning "expose no extra endpoints" in the rewrite
/// sub-record (the host's EP_NONE).
pub const ENDPOINT_MASK_NONE: u64 = 0;

/// Default admin menu icon for content types.
pub const DEFAULT_ICON: &str = "dashicons-admin-post";

/// Merge `layer` into `base`, key by key. Later writers win; values are
/// replaced wholesale, nested records included.
pub fn merge_into(base: &mut OptionsRecord, layer: OptionsRecord) {
    for (key, value) in layer {
        base.insert(key, value);
    }
}

fn into_record(value: Value) -> OptionsRecord {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("template literals are objects"),
    }
}

/// Built-in defaults for a content-type definition. `label` is the
/// localized display name; `labels` the synthesized label set.
pub fn content_type_defaults(label: &str, labels: OptionsRecord, icon: &str) -> OptionsRecord {
    into_record(json!({
        "label": label,
        "labels": labels,
        "hierarchical": false,
        "public": true,
        "show_ui": true,
        "show_in_menu": true,
        "menu_position": 5,
        "menu_icon": icon,
        "show_in_admin_bar": true,
        "show_in_nav_menus": true,
        "has_archive": true,
        "exclude_from_search": false,
        "publicly_queryable": true,
        "capability_type": "post",
        "supports": ["title", "editor"],
    }))
}

/// Built-in defaults for a taxonomy definition.
pub fn taxonomy_defaults(labels: OptionsRecord) -> OptionsRecord {
    into_record(json!({
        "labels": labels,
        "hierarchical": false,
        "public": true,
        "show_ui": true,
        "show_admin_column": true,
        "show_in_nav_menus": true,
        "show_tagcloud": false,
    }))
}

/// Build the rewrite sub-record for `name` and install it under `rewrite`,
/// replacing any prior value there. The slug defaults to the hyphenated
/// lowercase name; caller overrides win key by key against the defaults.
pub fn apply_rewrite(args: &mut OptionsRecord, name: &str, overrides: OptionsRecord) {
    let mut rewrite = into_record(json!({
        "slug": derive_slug(name),
        "with_front": true,
        "hierarchical": false,
        "endpoint_mask": ENDPOINT_MASK_NONE,
    }));
    merge_into(&mut rewrite, overrides);
    args.insert("rewrite".to_string(), Value::Object(rewrite));
}

/// Expose the definition over the host's REST surface. Empty `rest_base`
/// or `rest_controller_class` simply skip the corresponding key.
pub fn apply_rest(args: &mut OptionsRecord, rest_base: &str, rest_controller_class: &str) {
    args.insert("show_in_rest".to_string(), Value::Bool(true));
    if !rest_base.is_empty() {
        args.insert("rest_base".to_string(), Value::String(rest_base.to_string()));
    }
    if !rest_controller_class.is_empty() {
        args.insert(
            "rest_controller_class".to_string(),
            Value::String(rest_controller_class.to_string()),
        );
    }
}
