//! Label synthesis.
//!
//! Each definition kind carries a fixed, closed table of label roles; the
//! synthesizer composes every role's display string from the singular
//! display name, pluralizing through [`crate::inflect`] for the roles that
//! describe the collection rather than a single item. Every composed string
//! passes through the [`Localizer`] seam with the definition's text domain
//! so a host-side translator can intercept it; the default passthrough
//! keeps synthesis deterministic.
//!
//! Insertion order of the returned record is part of the contract and
//! matches the host's documented label ordering.

use crate::i18n::Localizer;
use crate::inflect::pluralize;
use crate::options::OptionsRecord;
use serde_json::Value;

struct LabelWriter<'a> {
    labels: OptionsRecord,
    domain: &'a str,
    localizer: &'a dyn Localizer,
}

impl<'a> LabelWriter<'a> {
    fn new(domain: &'a str, localizer: &'a dyn Localizer) -> Self {
        Self {
            labels: OptionsRecord::new(),
            domain,
            localizer,
        }
    }

    fn role(&mut self, role: &str, text: String) {
        let localized = self.localizer.translate(&text, self.domain);
        self.labels.insert(role.to_string(), Value::String(localized));
    }

    fn role_with_context(&mut self, role: &str, text: String, context: &str) {
        let localized = self
            .localizer
            .translate_with_context(&text, context, self.domain);
        self.labels.insert(role.to_string(), Value::String(localized));
    }

    fn finish(self) -> OptionsRecord {
        self.labels
    }
}

/// Synthesize the full content-type label set for `name`.
///
/// An empty name still composes every template (yielding strings such as
/// `"Add New "`); that is accepted behavior, not an error.
pub fn content_type_labels(
    name: &str,
    domain: &str,
    localizer: &dyn Localizer,
) -> OptionsRecord {
    let plural = pluralize(name);
    let mut w = LabelWriter::new(domain, localizer);

    w.role_with_context("name", plural.clone(), "Content Type General Name");
    w.role_with_context("singular_name", name.to_string(), "Content Type Singular Name");
    w.role("menu_name", plural.clone());
    w.role("name_admin_bar", name.to_string());
    w.role("archives", format!("{plural} Archives"));
    w.role("attributes", format!("{name} Attributes"));
    w.role("all_items", format!("All {plural}"));
    w.role("add_new_item", format!("Add New {name}"));
    w.role("add_new", format!("Add New {name}"));
    w.role("new_item", format!("New {name}"));
    w.role("edit_item", format!("Edit {name}"));
    w.role("update_item", format!("Update {name}"));
    w.role("view_item", format!("View {name}"));
    w.role("view_items", format!("View {plural}"));
    w.role("search_items", format!("Search {plural}"));
    w.role("not_found", "Not found".to_string());
    w.role("not_found_in_trash", "Not found in Trash".to_string());
    w.role("featured_image", "Featured Image".to_string());
    w.role("set_featured_image", "Set featured image".to_string());
    w.role("remove_featured_image", "Remove featured image".to_string());
    w.role("use_featured_image", "Use as featured image".to_string());
    w.role("insert_into_item", format!("Insert into {name}"));
    w.role("uploaded_to_this_item", format!("Uploaded to this {name}"));
    w.role("items_list", "Items list".to_string());
    w.role("items_list_navigation", "Items list navigation".to_string());
    w.role("filter_items_list", format!("Filter {name} list"));

    w.finish()
}

/// Synthesize the full taxonomy label set for `name`.
pub fn taxonomy_labels(name: &str, domain: &str, localizer: &dyn Localizer) -> OptionsRecord {
    let plural = pluralize(name);
    let mut w = LabelWriter::new(domain, localizer);

    w.role_with_context("name", plural.clone(), "Taxonomy General Name");
    w.role_with_context("singular_name", name.to_string(), "Taxonomy Singular Name");
    w.role("menu_name", name.to_string());
    w.role("all_items", format!("All {plural}"));
    w.role("parent_item", format!("Parent {name}"));
    w.role("parent_item_colon", format!("Parent {name}:"));
    w.role("new_item_name", format!("New {name}"));
    w.role("add_new_item", format!("Add New {name}"));
    w.role("edit_item", format!("Edit {name}"));
    w.role("update_item", format!("Update {name}"));
    w.role("view_item", format!("View {name}"));
    w.role(
        "separate_items_with_commas",
        "Separate items with commas".to_string(),
    );
    w.role(
        "add_or_remove_items",
        format!("Add or remove {}", pluralize(&name.to_lowercase())),
    );
    w.role("choose_from_most_used", "Choose from the most used".to_string());
    w.role("popular_items", format!("Popular {plural}"));
    w.role("search_items", format!("Search {plural}"));
    w.role("not_found", "Not Found".to_string());
    w.role("no_terms", format!("No {plural}"));
    w.role("items_list", format!("{plural} list"));
    w.role("items_list_navigation", format!("{plural} list navigation"));

    w.finish()
}
