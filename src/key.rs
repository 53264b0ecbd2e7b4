//! Machine-key and slug derivation.
//!
//! Keys never fail to derive: absent an explicit override the display name
//! is lowercased and space-sanitized. A configured prefix is prepended in
//! both branches; explicit keys are deliberately NOT exempt from prefixing.

/// Sanitize a caller-supplied key prefix: spaces become underscores.
/// Applied once when the prefix is set, then reused verbatim.
pub fn sanitize_prefix(prefix: &str) -> String {
    prefix.replace(' ', "_")
}

/// URL-path-safe slug for a display name: lowercase, spaces to hyphens.
pub fn derive_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Final registration key for a definition.
///
/// A non-empty `explicit` key is used verbatim as the base; otherwise the
/// base is the lowercased display name with spaces replaced by underscores.
/// The (already sanitized) prefix applies to both.
pub fn derive_key(name: &str, explicit: Option<&str>, prefix: &str) -> String {
    let base = match explicit {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => name.to_lowercase().replace(' ', "_"),
    };
    if prefix.is_empty() {
        base
    } else {
        format!("{prefix}{base}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_display_name() {
        assert_eq!(derive_key("My Event", None, ""), "my_event");
        assert_eq!(derive_key("Event", None, ""), "event");
    }

    #[test]
    fn explicit_key_is_still_prefixed() {
        assert_eq!(derive_key("My Event", Some("custom_key"), "acme_"), "acme_custom_key");
        assert_eq!(derive_key("My Event", Some("custom_key"), ""), "custom_key");
    }

    #[test]
    fn empty_explicit_key_falls_back_to_name() {
        assert_eq!(derive_key("My Event", Some(""), "acme_"), "acme_my_event");
    }

    #[test]
    fn prefix_sanitized_once() {
        assert_eq!(sanitize_prefix("acme corp "), "acme_corp_");
    }

    #[test]
    fn slug_uses_hyphens() {
        assert_eq!(derive_slug("My Big Event"), "my-big-event");
    }
}
