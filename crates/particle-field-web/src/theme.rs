use particle_field::{Theme, ThemeSignal};
use web_sys::Document;

/// Reads the page's theme from `<html data-theme="dark">`.
/// The theme toggle owns that attribute; this only samples it.
pub struct DocumentTheme {
    document: Document,
}

impl DocumentTheme {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ThemeSignal for DocumentTheme {
    fn theme(&self) -> Theme {
        let dark = self
            .document
            .document_element()
            .and_then(|root| root.get_attribute("data-theme"))
            .map(|value| value == "dark")
            .unwrap_or(false);
        Theme::from_dark(dark)
    }
}
