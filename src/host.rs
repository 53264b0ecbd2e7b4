//! Outbound registration boundary.
//!
//! The host platform's registration API is an external collaborator; this
//! crate only hands finished (key, options) pairs across. [`Host`] is that
//! seam. [`RecordingHost`] is the shipped implementation: it records every
//! call in order, which is what the CLI emits and what tests assert on.

use crate::options::OptionsRecord;
use anyhow::Result;
use serde::Serialize;

/// Registration collaborator. Implementations perform (or record) the
/// actual host calls; the builder side never looks at the outcome beyond
/// error propagation.
pub trait Host {
    fn register_content_type(&mut self, key: &str, args: &OptionsRecord) -> Result<()>;

    fn register_taxonomy(
        &mut self,
        key: &str,
        object_types: &[String],
        args: &OptionsRecord,
    ) -> Result<()>;

    /// Secondary association of an already-registered taxonomy with one
    /// content type.
    fn link_taxonomy(&mut self, key: &str, object_type: &str) -> Result<()>;
}

/// One recorded registration call.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    RegisterContentType {
        key: String,
        args: OptionsRecord,
    },
    RegisterTaxonomy {
        key: String,
        object_types: Vec<String>,
        args: OptionsRecord,
    },
    LinkTaxonomy {
        key: String,
        object_type: String,
    },
}

/// Host implementation that records calls instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<HostCall> {
        self.calls
    }
}

impl Host for RecordingHost {
    fn register_content_type(&mut self, key: &str, args: &OptionsRecord) -> Result<()> {
        self.calls.push(HostCall::RegisterContentType {
            key: key.to_string(),
            args: args.clone(),
        });
        Ok(())
    }

    fn register_taxonomy(
        &mut self,
        key: &str,
        object_types: &[String],
        args: &OptionsRecord,
    ) -> Result<()> {
        self.calls.push(HostCall::RegisterTaxonomy {
            key: key.to_string(),
            object_types: object_types.to_vec(),
            args: args.clone(),
        });
        Ok(())
    }

    fn link_taxonomy(&mut self, key: &str, object_type: &str) -> Result<()> {
        self.calls.push(HostCall::LinkTaxonomy {
            key: key.to_string(),
            object_type: object_type.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Forge;
    use crate::options::OptionsRecord;

    #[test]
    fn taxonomy_registration_links_each_object_type() {
        let forge = Forge::new();
        let definition = forge
            .taxonomy("Genre")
            .args(OptionsRecord::new())
            .attach_to(["book", "album"])
            .build();

        let mut host = RecordingHost::new();
        definition.register(&mut host).unwrap();

        let calls = host.calls();
        assert_eq!(calls.len(), 3);
        match &calls[0] {
            HostCall::RegisterTaxonomy { key, object_types, .. } => {
                assert_eq!(key, "genre");
                assert_eq!(object_types, &["book".to_string(), "album".to_string()]);
            }
            other => panic!("expected taxonomy registration, got {other:?}"),
        }
        match &calls[2] {
            HostCall::LinkTaxonomy { key, object_type } => {
                assert_eq!(key, "genre");
                assert_eq!(object_type, "album");
            }
            other => panic!("expected link call, got {other:?}"),
        }
    }

    #[test]
    fn content_type_registration_is_a_single_call() {
        let forge = Forge::new();
        let definition = forge
            .content_type("Event")
            .args(None, OptionsRecord::new())
            .build();

        let mut host = RecordingHost::new();
        definition.register(&mut host).unwrap();
        assert_eq!(host.calls().len(), 1);
        match &host.calls()[0] {
            HostCall::RegisterContentType { key, args } => {
                assert_eq!(key, "event");
                assert!(args.contains_key("labels"));
            }
            other => panic!("expected content-type registration, got {other:?}"),
        }
    }
}
