//! Fluent definition builders.
//!
//! [`Forge`] carries the configuration shared across definitions (text
//! domain, sanitized key prefix, localizer). Builders snapshot that
//! configuration when created, so a prefix set on the forge applies to
//! every definition created afterwards until the prefix is changed or
//! cleared; there is no process-wide static anywhere.
//!
//! Builders apply their layers in call order: defaults and labels first,
//! then caller base overrides, then the late rewrite/REST layers, with
//! last-writer-wins merging throughout. `build()` finalizes into an
//! immutable [`Definition`] that can be handed to a [`Host`].

use crate::host::Host;
use crate::i18n::{Localizer, Passthrough};
use crate::key::{derive_key, sanitize_prefix};
use crate::labels::{content_type_labels, taxonomy_labels};
use crate::options::{
    DEFAULT_ICON, OptionsRecord, apply_rest, apply_rewrite, content_type_defaults, merge_into,
    taxonomy_defaults,
};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Default text domain when the caller does not supply one.
pub const DEFAULT_TEXT_DOMAIN: &str = "typeforge";

/// Object type a taxonomy attaches to when no list is supplied.
pub const DEFAULT_OBJECT_TYPE: &str = "post";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    ContentType,
    Taxonomy,
}

impl DefinitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionKind::ContentType => "content_type",
            DefinitionKind::Taxonomy => "taxonomy",
        }
    }
}

/// Shared configuration for a sequence of definitions.
#[derive(Clone)]
pub struct Forge {
    text_domain: String,
    prefix: String,
    localizer: Arc<dyn Localizer + Send + Sync>,
}

impl Default for Forge {
    fn default() -> Self {
        Self::new()
    }
}

impl Forge {
    pub fn new() -> Self {
        Self {
            text_domain: DEFAULT_TEXT_DOMAIN.to_string(),
            prefix: String::new(),
            localizer: Arc::new(Passthrough),
        }
    }

    pub fn with_text_domain(mut self, domain: &str) -> Self {
        self.text_domain = domain.to_string();
        self
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer + Send + Sync>) -> Self {
        self.localizer = localizer;
        self
    }

    /// Set the key prefix for upcoming definitions. Sanitized once here
    /// (spaces to underscores) and reused verbatim until changed; an empty
    /// string clears it.
    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = sanitize_prefix(prefix);
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Start a content-type definition. Labels are synthesized here, before
    /// any argument merging can run.
    pub fn content_type(&self, name: &str) -> ContentTypeBuilder {
        let labels = content_type_labels(name, &self.text_domain, self.localizer.as_ref());
        ContentTypeBuilder {
            core: BuilderCore::new(self, name, labels),
        }
    }

    /// Start a taxonomy definition.
    pub fn taxonomy(&self, name: &str) -> TaxonomyBuilder {
        let labels = taxonomy_labels(name, &self.text_domain, self.localizer.as_ref());
        TaxonomyBuilder {
            core: BuilderCore::new(self, name, labels),
            object_types: Vec::new(),
        }
    }
}

/// State common to both builder kinds: the snapshot of forge configuration
/// plus the growing options record.
struct BuilderCore {
    name: String,
    text_domain: String,
    prefix: String,
    localizer: Arc<dyn Localizer + Send + Sync>,
    description: Option<String>,
    explicit_key: Option<String>,
    labels: OptionsRecord,
    args: OptionsRecord,
}

impl BuilderCore {
    fn new(forge: &Forge, name: &str, labels: OptionsRecord) -> Self {
        Self {
            name: name.to_string(),
            text_domain: forge.text_domain.clone(),
            prefix: forge.prefix.clone(),
            localizer: Arc::clone(&forge.localizer),
            description: None,
            explicit_key: None,
            labels,
            args: OptionsRecord::new(),
        }
    }

    fn apply_base(&mut self, defaults: OptionsRecord, overrides: OptionsRecord) {
        merge_into(&mut self.args, defaults);
        merge_into(&mut self.args, overrides);
        if let Some(description) = &self.description {
            if !description.is_empty() {
                let localized = self.localizer.translate(description, &self.text_domain);
                self.args
                    .insert("description".to_string(), Value::String(localized));
            }
        }
    }

    fn key(&self) -> String {
        derive_key(&self.name, self.explicit_key.as_deref(), &self.prefix)
    }
}

pub struct ContentTypeBuilder {
    core: BuilderCore,
}

impl ContentTypeBuilder {
    pub fn description(mut self, description: &str) -> Self {
        self.core.description = Some(description.to_string());
        self
    }

    /// Register under this key instead of the one derived from the name.
    /// The forge prefix still applies.
    pub fn key(mut self, key: &str) -> Self {
        self.core.explicit_key = Some(key.to_string());
        self
    }

    /// Assemble the base arguments: built-in defaults and labels, then
    /// `overrides` key by key, then the description when one was supplied.
    pub fn args(mut self, icon: Option<&str>, overrides: OptionsRecord) -> Self {
        let label = self
            .core
            .localizer
            .translate(&self.core.name, &self.core.text_domain);
        let defaults = content_type_defaults(
            &label,
            self.core.labels.clone(),
            icon.unwrap_or(DEFAULT_ICON),
        );
        self.core.apply_base(defaults, overrides);
        self
    }

    /// Install the rewrite sub-record (slug derived from the name, caller
    /// overrides winning per key).
    pub fn rewrite(mut self, overrides: OptionsRecord) -> Self {
        apply_rewrite(&mut self.core.args, &self.core.name, overrides);
        self
    }

    /// Expose over REST. Empty strings skip the optional keys.
    pub fn restful(mut self, rest_base: &str, rest_controller_class: &str) -> Self {
        apply_rest(&mut self.core.args, rest_base, rest_controller_class);
        self
    }

    pub fn build(self) -> Definition {
        Definition {
            kind: DefinitionKind::ContentType,
            key: self.core.key(),
            args: self.core.args,
            object_types: Vec::new(),
        }
    }
}

pub struct TaxonomyBuilder {
    core: BuilderCore,
    object_types: Vec<String>,
}

impl TaxonomyBuilder {
    pub fn description(mut self, description: &str) -> Self {
        self.core.description = Some(description.to_string());
        self
    }

    /// Register under this key instead of the one derived from the name.
    /// The forge prefix still applies.
    pub fn key(mut self, key: &str) -> Self {
        self.core.explicit_key = Some(key.to_string());
        self
    }

    /// Assemble the base arguments: built-in defaults and labels, then
    /// `overrides` key by key, then the description when one was supplied.
    pub fn args(mut self, overrides: OptionsRecord) -> Self {
        let defaults = taxonomy_defaults(self.core.labels.clone());
        self.core.apply_base(defaults, overrides);
        self
    }

    pub fn rewrite(mut self, overrides: OptionsRecord) -> Self {
        apply_rewrite(&mut self.core.args, &self.core.name, overrides);
        self
    }

    pub fn restful(mut self, rest_base: &str, rest_controller_class: &str) -> Self {
        apply_rest(&mut self.core.args, rest_base, rest_controller_class);
        self
    }

    /// Content types this taxonomy attaches to. Replaces any earlier list.
    pub fn attach_to<I, S>(mut self, object_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.object_types = object_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Definition {
        let object_types = if self.object_types.is_empty() {
            vec![DEFAULT_OBJECT_TYPE.to_string()]
        } else {
            self.object_types
        };
        Definition {
            kind: DefinitionKind::Taxonomy,
            key: self.core.key(),
            args: self.core.args,
            object_types,
        }
    }
}

/// A finished, immutable definition ready for the host handoff.
#[derive(Clone, Debug, Serialize)]
pub struct Definition {
    pub kind: DefinitionKind,
    pub key: String,
    pub args: OptionsRecord,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub object_types: Vec<String>,
}

impl Definition {
    /// Hand the definition to the host. Taxonomies additionally get one
    /// association call per attached content type.
    pub fn register(&self, host: &mut dyn Host) -> Result<()> {
        match self.kind {
            DefinitionKind::ContentType => host.register_content_type(&self.key, &self.args),
            DefinitionKind::Taxonomy => {
                host.register_taxonomy(&self.key, &self.object_types, &self.args)?;
                for object_type in &self.object_types {
                    host.link_taxonomy(&self.key, object_type)?;
                }
                Ok(())
            }
        }
    }
}
