//! Localization seam.
//!
//! The synthesis pipeline composes every display string itself and then
//! hands the composed template to a [`Localizer`] together with its text
//! domain (and, for ambiguous strings, a disambiguation context). The crate
//! performs no translation; the default passthrough returns the composed
//! string unchanged so label synthesis stays deterministic.

/// Collaborator that maps a composed display string to its localized form.
///
/// `domain` is the text-domain tag carried on the definition; `context`
/// disambiguates identical source strings (for example the general versus
/// singular name of a type).
pub trait Localizer {
    fn translate(&self, text: &str, domain: &str) -> String;

    fn translate_with_context(&self, text: &str, _context: &str, domain: &str) -> String {
        self.translate(text, domain)
    }
}

/// Default no-op localizer: returns every composed string verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl Localizer for Passthrough {
    fn translate(&self, text: &str, _domain: &str) -> String {
        text.to_string()
    }
}
