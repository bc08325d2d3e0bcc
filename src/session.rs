/// Session State Module
///
/// The mutable state one interactive session carries between
/// interactions: the current screen, the preview-mode toggle, and the
/// last rendered result (for exports). It is an explicit value threaded
/// through the shell loop — nothing here is global, and nothing
/// outlives the process.
use crate::core::db::QueryResult;
use crate::menu::Screen;

#[derive(Debug)]
pub struct Session {
    /// Screen the next render targets
    pub screen: Screen,
    /// Preview mode: seed form fields with their declared type names
    pub preview: bool,
    /// Most recently displayed result, kept for `:export`
    pub last_result: Option<QueryResult>,
}

impl Session {
    /// Starts a session on the Home screen with the configured preview
    /// default.
    pub fn new(preview: bool) -> Self {
        Session {
            screen: Screen::Home,
            preview,
            last_result: None,
        }
    }

    /// Flips preview mode and returns the new state. The toggle holds
    /// until flipped again; nothing else resets it.
    pub fn toggle_preview(&mut self) -> bool {
        self.preview = !self.preview;
        self.preview
    }

    /// Records the result backing the current screen so `:export` can
    /// re-serialize it.
    pub fn remember_result(&mut self, result: QueryResult) {
        self.last_result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_on_home() {
        let session = Session::new(false);
        assert!(matches!(session.screen, Screen::Home));
        assert!(!session.preview);
        assert!(session.last_result.is_none());
    }

    #[test]
    fn test_preview_toggle_persists_until_retoggled() {
        let mut session = Session::new(false);
        assert!(session.toggle_preview());
        assert!(session.preview);
        assert!(!session.toggle_preview());
        assert!(!session.preview);
    }

    #[test]
    fn test_remember_result() {
        let mut session = Session::new(true);
        session.remember_result(QueryResult::new(vec!["a".to_string()], vec![]));
        assert_eq!(session.last_result.unwrap().columns, vec!["a"]);
    }
}
