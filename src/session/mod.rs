use serde::Serialize;
use tracing::{debug, warn};

use crate::url_parser::url_validator::trim_input;
use crate::url_parser::{parse_url, reconstruct_url, UrlComponent, UrlPartType};

/// Message shown when the user submits nothing but whitespace
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL";

/// Caller-owned editing state: the current component list, the live preview
/// and the last error
///
/// Each mutation refreshes the preview, so `preview()` always reflects the
/// enabled components.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    parts: Vec<UrlComponent>,
    preview: String,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from an input string, see [`Session::analyze`]
    pub fn from_input(input: &str) -> Self {
        let mut session = Self::new();
        session.analyze(input);
        session
    }

    /// Replaces the component list with a fresh parse of `input`
    ///
    /// On a parse failure the list and preview are cleared and the error kept.
    /// Blank input only records the error; the current list, including any
    /// toggles and edits, stays as it is.
    ///
    /// # Returns
    /// * `bool` - Whether the input was accepted
    pub fn analyze(&mut self, input: &str) -> bool {
        if trim_input(input).is_empty() {
            warn!("Rejected empty input");
            self.error = Some(EMPTY_INPUT_MESSAGE.to_string());
            return false;
        }

        let result = parse_url(input);
        match result.error {
            Some(error) => {
                self.reset(error);
                false
            }
            None => {
                debug!("Session loaded {} components", result.parts.len());
                self.parts = result.parts;
                self.error = None;
                self.refresh();
                true
            }
        }
    }

    /// Flips the enabled flag of the component with the given id
    pub fn toggle(&mut self, id: &str) -> bool {
        self.modify(id, |part| {
            part.toggle();
        })
    }

    /// Replaces the value of the component with the given id
    pub fn update_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        self.modify(id, move |part| part.value = value)
    }

    /// Enables or disables every component at once
    pub fn toggle_all(&mut self, enabled: bool) {
        self.parts.iter_mut().for_each(|part| part.is_enabled = enabled);
        self.refresh();
    }

    /// Sets the flag on every component of a type, optionally narrowed to
    /// one query key
    ///
    /// # Returns
    /// * `usize` - Number of components that matched
    pub fn set_enabled_where(&mut self, part_type: UrlPartType, key: Option<&str>, enabled: bool) -> usize {
        let mut matched = 0;
        for part in self.parts.iter_mut().filter(|p| matches_selector(p, part_type, key)) {
            part.is_enabled = enabled;
            matched += 1;
        }
        self.refresh();
        matched
    }

    /// Sets the value on every component of a type, optionally narrowed to
    /// one query key
    pub fn set_value_where(&mut self, part_type: UrlPartType, key: Option<&str>, value: &str) -> usize {
        let mut matched = 0;
        for part in self.parts.iter_mut().filter(|p| matches_selector(p, part_type, key)) {
            part.value = value.to_string();
            matched += 1;
        }
        self.refresh();
        matched
    }

    pub fn parts(&self) -> &[UrlComponent] {
        &self.parts
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: &str) -> Option<&UrlComponent> {
        self.parts.iter().find(|part| part.id == id)
    }

    pub fn into_parts(self) -> Vec<UrlComponent> {
        self.parts
    }

    fn modify<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut UrlComponent),
    {
        match self.parts.iter_mut().find(|part| part.id == id) {
            Some(part) => {
                f(part);
                self.refresh();
                true
            }
            None => {
                debug!("No component with id {}", id);
                false
            }
        }
    }

    fn reset(&mut self, error: String) {
        self.parts.clear();
        self.preview.clear();
        self.error = Some(error);
    }

    fn refresh(&mut self) {
        self.preview = if self.parts.is_empty() {
            String::new()
        } else {
            reconstruct_url(&self.parts)
        };
    }
}

fn matches_selector(part: &UrlComponent, part_type: UrlPartType, key: Option<&str>) -> bool {
    part.part_type == part_type && key.map_or(true, |k| part.key.as_deref() == Some(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(session: &Session, ty: UrlPartType) -> String {
        session
            .parts()
            .iter()
            .find(|p| p.part_type == ty)
            .map(|p| p.id.clone())
            .unwrap()
    }

    #[test]
    fn test_analyze_populates_preview() {
        let session = Session::from_input("https://example.com/path?a=1#top");
        assert_eq!(session.error(), None);
        assert_eq!(session.parts().len(), 5);
        assert_eq!(session.preview(), "https://example.com/path?a=1#top");
    }

    #[test]
    fn test_analyze_failure_clears_state() {
        let mut session = Session::from_input("https://example.com/");
        assert!(!session.analyze("not a url, just text"));
        assert!(session.parts().is_empty());
        assert_eq!(session.preview(), "");
        assert_eq!(session.error(), Some("Invalid URL format"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut session = Session::new();
        assert!(!session.analyze("   "));
        assert_eq!(session.error(), Some(EMPTY_INPUT_MESSAGE));
    }

    #[test]
    fn test_empty_input_keeps_current_parts() {
        let mut session = Session::from_input("https://example.com/a?x=1");
        let path = id_of(&session, UrlPartType::Pathname);
        session.update_value(&path, "/edited");
        session.toggle_all(false);
        let before = session.parts().to_vec();

        assert!(!session.analyze("  \u{feff} "));
        assert_eq!(session.error(), Some(EMPTY_INPUT_MESSAGE));
        assert_eq!(session.parts(), before.as_slice());
        assert_eq!(session.parts().len(), 4);
        assert_eq!(session.preview(), "");

        session.toggle_all(true);
        assert_eq!(session.preview(), "https://example.com/edited?x=1");
    }

    #[test]
    fn test_new_input_replaces_parts_wholesale() {
        let mut session = Session::from_input("https://a.com/?x=1");
        let old_ids: Vec<_> = session.parts().iter().map(|p| p.id.clone()).collect();
        assert!(session.analyze("https://b.com/"));
        assert_eq!(session.preview(), "https://b.com/");
        assert!(session.parts().iter().all(|p| !old_ids.contains(&p.id)));
    }

    #[test]
    fn test_toggle_keeps_component_and_value() {
        let mut session = Session::from_input("https://example.com/path#top");
        let hash = id_of(&session, UrlPartType::Hash);

        assert!(session.toggle(&hash));
        assert_eq!(session.preview(), "https://example.com/path");
        assert_eq!(session.find(&hash).unwrap().value, "#top");

        assert!(session.toggle(&hash));
        assert_eq!(session.preview(), "https://example.com/path#top");
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut session = Session::from_input("https://example.com/");
        assert!(!session.toggle("missing"));
        assert!(!session.update_value("missing", "x"));
        assert_eq!(session.preview(), "https://example.com/");
    }

    #[test]
    fn test_update_value_refreshes_preview() {
        let mut session = Session::from_input("https://example.com/old");
        let path = id_of(&session, UrlPartType::Pathname);
        assert!(session.update_value(&path, "/new"));
        assert_eq!(session.preview(), "https://example.com/new");
    }

    #[test]
    fn test_toggle_all() {
        let mut session = Session::from_input("https://example.com/a?b=c");
        session.toggle_all(false);
        assert_eq!(session.preview(), "");
        assert_eq!(session.parts().len(), 4);
        session.toggle_all(true);
        assert_eq!(session.preview(), "https://example.com/a?b=c");
    }

    #[test]
    fn test_selector_narrows_by_key() {
        let mut session = Session::from_input("https://example.com/?utm_source=x&id=7&utm_source=y");
        assert_eq!(session.set_enabled_where(UrlPartType::Search, Some("utm_source"), false), 2);
        assert_eq!(session.preview(), "https://example.com/?id=7");

        assert_eq!(session.set_value_where(UrlPartType::Search, Some("id"), "8"), 1);
        assert_eq!(session.preview(), "https://example.com/?id=8");
    }
}
