//! Definition manifests: the inbound JSON boundary.
//!
//! A manifest carries a version marker, optional forge-level configuration
//! (text domain, key prefix), and a list of definitions. Caller input is
//! validated here, against the embedded JSON Schema plus a version check,
//! so malformed override records fail at this boundary with context and
//! never reach the merge logic.

use crate::builder::{Definition, Forge};
use crate::ensure_object;
use crate::options::OptionsRecord;
use anyhow::{Context, Result, bail};
use jsonschema::JSONSchema;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Version marker every manifest must declare.
pub const MANIFEST_SCHEMA_VERSION: &str = "typeforge_manifest_v1";

static MANIFEST_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    // Embedded at compile time; a parse failure is a packaging bug.
    serde_json::from_str(include_str!("../schema/definition_manifest.schema.json")).unwrap()
});

static COMPILED_SCHEMA: LazyLock<JSONSchema> =
    LazyLock::new(|| JSONSchema::compile(&MANIFEST_SCHEMA).unwrap());

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ManifestKind {
    ContentType,
    Taxonomy,
}

#[derive(Debug, Deserialize)]
pub struct RestConfig {
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub controller_class: String,
}

#[derive(Debug, Deserialize)]
pub struct ManifestDefinition {
    pub kind: ManifestKind,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub options: Option<Value>,
    #[serde(default)]
    pub rewrite: Option<Value>,
    #[serde(default)]
    pub rest: Option<RestConfig>,
    #[serde(default)]
    pub object_types: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub schema_version: String,
    #[serde(default)]
    pub text_domain: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    pub definitions: Vec<ManifestDefinition>,
}

impl Manifest {
    /// Validate a parsed JSON document against the manifest schema and
    /// deserialize it.
    pub fn from_value(value: &Value) -> Result<Self> {
        if let Err(errors) = COMPILED_SCHEMA.validate(value) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            bail!("manifest failed schema validation:\n{}", details);
        }
        let manifest: Manifest =
            serde_json::from_value(value.clone()).context("deserializing manifest")?;
        if manifest.schema_version != MANIFEST_SCHEMA_VERSION {
            bail!(
                "unsupported manifest schema_version '{}', expected {}",
                manifest.schema_version,
                MANIFEST_SCHEMA_VERSION
            );
        }
        Ok(manifest)
    }

    /// Read and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        let value: Value = serde_json::from_str(&data)
            .with_context(|| format!("parsing manifest {}", path.display()))?;
        Self::from_value(&value).with_context(|| format!("validating manifest {}", path.display()))
    }

    /// Build every definition in declaration order. The manifest prefix
    /// applies to all of them; per-definition overrides are checked to be
    /// records before any merging starts.
    pub fn build_definitions(&self) -> Result<Vec<Definition>> {
        let mut forge = Forge::new();
        if let Some(domain) = &self.text_domain {
            forge = forge.with_text_domain(domain);
        }
        if let Some(prefix) = &self.prefix {
            forge.set_prefix(prefix);
        }

        let mut definitions = Vec::with_capacity(self.definitions.len());
        for entry in &self.definitions {
            let definition = build_one(&forge, entry)
                .with_context(|| format!("building definition '{}'", entry.name))?;
            definitions.push(definition);
        }
        Ok(definitions)
    }
}

fn overrides_record(value: &Option<Value>, what: &str) -> Result<OptionsRecord> {
    match value {
        Some(value) => ensure_object(value, what),
        None => Ok(OptionsRecord::new()),
    }
}

fn build_one(forge: &Forge, entry: &ManifestDefinition) -> Result<Definition> {
    let options = overrides_record(&entry.options, "options")?;
    match entry.kind {
        ManifestKind::ContentType => {
            let mut builder = forge.content_type(&entry.name);
            if let Some(description) = &entry.description {
                builder = builder.description(description);
            }
            if let Some(key) = &entry.key {
                builder = builder.key(key);
            }
            builder = builder.args(entry.icon.as_deref(), options);
            if let Some(rewrite) = &entry.rewrite {
                builder = builder.rewrite(ensure_object(rewrite, "rewrite")?);
            }
            if let Some(rest) = &entry.rest {
                builder = builder.restful(&rest.base, &rest.controller_class);
            }
            Ok(builder.build())
        }
        ManifestKind::Taxonomy => {
            let mut builder = forge.taxonomy(&entry.name);
            if let Some(description) = &entry.description {
                builder = builder.description(description);
            }
            if let Some(key) = &entry.key {
                builder = builder.key(key);
            }
            builder = builder.args(options);
            if let Some(rewrite) = &entry.rewrite {
                builder = builder.rewrite(ensure_object(rewrite, "rewrite")?);
            }
            if let Some(rest) = &entry.rest {
                builder = builder.restful(&rest.base, &rest.controller_class);
            }
            if !entry.object_types.is_empty() {
                builder = builder.attach_to(entry.object_types.clone());
            }
            Ok(builder.build())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_manifest_builds_definitions() {
        let value = json!({
            "schema_version": "typeforge_manifest_v1",
            "prefix": "acme ",
            "definitions": [
                { "kind": "content_type", "name": "Event", "icon": "dashicons-calendar" },
                { "kind": "taxonomy", "name": "Genre", "object_types": ["acme_event"] }
            ]
        });
        let manifest = Manifest::from_value(&value).unwrap();
        let definitions = manifest.build_definitions().unwrap();
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].key, "acme_event");
        assert_eq!(definitions[1].key, "acme_genre");
        assert_eq!(definitions[1].object_types, vec!["acme_event".to_string()]);
    }

    #[test]
    fn wrong_schema_version_is_rejected() {
        let value = json!({
            "schema_version": "typeforge_manifest_v0",
            "definitions": [{ "kind": "content_type", "name": "Event" }]
        });
        let err = Manifest::from_value(&value).unwrap_err();
        assert!(err.to_string().contains("schema validation"), "{err:#}");
    }

    #[test]
    fn non_object_options_fail_at_the_boundary() {
        let value = json!({
            "schema_version": "typeforge_manifest_v1",
            "definitions": [
                { "kind": "content_type", "name": "Event", "options": "public" }
            ]
        });
        let err = Manifest::from_value(&value).unwrap_err();
        assert!(err.to_string().contains("schema validation"), "{err:#}");
    }

    #[test]
    fn unknown_definition_fields_are_rejected() {
        let value = json!({
            "schema_version": "typeforge_manifest_v1",
            "definitions": [
                { "kind": "content_type", "name": "Event", "labels": {} }
            ]
        });
        assert!(Manifest::from_value(&value).is_err());
    }
}
