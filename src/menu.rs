/// Menu and Navigation Module
///
/// Maps a user-selected menu entry to its screen class and operation
/// set: Home carries the ad-hoc SQL prompt and the preview toggle,
/// views are read-only, junction tables offer Insert/Delete, and every
/// other table offers Insert/Update/Delete. Selecting an entry always
/// re-renders the whole screen.
use crate::catalog::CATALOG;

/// The three reachable classes of screen, keyed by menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    /// A read-only view, by canonical name
    View(&'static str),
    /// A writable table, by canonical name
    Table(&'static str),
}

impl Screen {
    /// Resolves a menu entry name (case-insensitive) to its screen.
    pub fn resolve(entry: &str) -> Option<Screen> {
        let entry = entry.trim();
        if entry.eq_ignore_ascii_case("home") {
            return Some(Screen::Home);
        }
        if let Some(view) = CATALOG.view(entry) {
            return Some(Screen::View(view));
        }
        CATALOG.table(entry).map(|t| Screen::Table(t.name))
    }

    /// The canonical menu entry name for this screen.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::View(name) | Screen::Table(name) => name,
        }
    }

    /// Screen heading shown above the rendered rows.
    pub fn title(&self) -> String {
        match self {
            Screen::Home => "Welcome to bookdesk".to_string(),
            Screen::View(name) => format!("View: {name}"),
            Screen::Table(name) => format!("Table: {name}"),
        }
    }
}

/// Renders the menu in sidebar order, marking the read-only entries.
pub fn render_menu() -> String {
    let mut output = String::from("Menu:\n");
    for entry in CATALOG.menu_entries() {
        if CATALOG.view(entry).is_some() {
            output.push_str(&format!("  {entry} (read-only)\n"));
        } else {
            output.push_str(&format!("  {entry}\n"));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Operation;

    #[test]
    fn test_resolve_screen_classes() {
        assert_eq!(Screen::resolve("Home"), Some(Screen::Home));
        assert_eq!(Screen::resolve("home"), Some(Screen::Home));
        assert_eq!(
            Screen::resolve("CustomerCheckoutView"),
            Some(Screen::View("CustomerCheckoutView"))
        );
        assert_eq!(Screen::resolve("book"), Some(Screen::Table("Book")));
        assert_eq!(Screen::resolve("Ledger"), None);
    }

    #[test]
    fn test_operation_sets_by_entry() {
        for name in ["Write", "Review"] {
            let table = CATALOG.table(name).unwrap();
            assert_eq!(table.operations(), &[Operation::Insert, Operation::Delete]);
        }
        let address = CATALOG.table("Address").unwrap();
        assert_eq!(
            address.operations(),
            &[Operation::Insert, Operation::Update, Operation::Delete]
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(Screen::resolve("Author").unwrap().title(), "Table: Author");
        assert_eq!(
            Screen::resolve("BookAuthorPublisherMaterializedView")
                .unwrap()
                .title(),
            "View: BookAuthorPublisherMaterializedView"
        );
    }

    #[test]
    fn test_render_menu_marks_views() {
        let menu = render_menu();
        assert!(menu.contains("  Home\n"));
        assert!(menu.contains("CustomerCheckoutView (read-only)"));
        assert!(menu.contains("  Review\n"));
    }
}
