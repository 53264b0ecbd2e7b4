//! typeforge: fluent builders for content-type and taxonomy registration
//! records.
//!
//! A caller supplies a human display name ("Event") and typeforge derives
//! everything the host platform's registration call needs: the full label
//! set (pluralized through a fixed inflection rule table), the layered
//! options record (defaults, labels, caller overrides, rewrite and REST
//! sub-records), and the machine key. The host call itself is a
//! collaborator behind the [`host::Host`] trait; the shipped
//! implementation records the handoff so it can be emitted as JSON.

use anyhow::{Result, bail};
use serde_json::Value;

pub mod builder;
pub mod host;
pub mod i18n;
pub mod inflect;
pub mod key;
pub mod labels;
pub mod manifest;
pub mod options;

pub use builder::{Definition, DefinitionKind, Forge};
pub use host::{Host, HostCall, RecordingHost};
pub use i18n::{Localizer, Passthrough};
pub use manifest::{MANIFEST_SCHEMA_VERSION, Manifest};
pub use options::OptionsRecord;

/// Split a comma- or whitespace-separated list of object type identifiers.
pub fn parse_type_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Require a JSON value to be an object, returning the inner record.
/// Override records are validated here, at the boundary; merge logic never
/// sees anything else.
pub fn ensure_object(value: &Value, what: &str) -> Result<OptionsRecord> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        other => bail!("{what} must be a JSON object, got {other}"),
    }
}
