//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Paging
    /// Select the previous page. Default: h/←
    PrevPage,
    /// Select the next page. Default: l/→
    NextPage,
    /// Select the first page. Default: g/Home
    FirstPage,
    /// Select the last page. Default: G/End
    LastPage,

    // Page count
    /// Append a page. Default: +
    AddPage,
    /// Remove the last page. Default: -
    RemovePage,

    // Application
    /// Quit the demo. Default: q/Esc/Ctrl+C
    Quit,
}

impl KeyAction {
    /// Whether this action changes the selected page.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            KeyAction::PrevPage | KeyAction::NextPage | KeyAction::FirstPage | KeyAction::LastPage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_actions_are_classified() {
        assert!(KeyAction::PrevPage.is_navigation());
        assert!(KeyAction::LastPage.is_navigation());
        assert!(!KeyAction::AddPage.is_navigation());
        assert!(!KeyAction::Quit.is_navigation());
    }
}
