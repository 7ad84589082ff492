//! Focused-view checks
//!
//! Each check is a single-shot predicate over a context snapshot. The
//! `TestDriver` methods of the same names wrap them in the retry engine.

use crate::context::Context;
use crate::driver::TestDriver;
use crate::error::DriverError;

/// View shared by confirmation, alert and prompt popups
pub const CONFIRMATION_VIEW: &str = "confirmation";
pub const MENU_VIEW: &str = "menu";
pub const COMMIT_MESSAGE_VIEW: &str = "commitMessage";

/// Views that count as a popup for `not_in_popup`
pub const POPUP_VIEWS: [&str; 3] = [MENU_VIEW, CONFIRMATION_VIEW, COMMIT_MESSAGE_VIEW];

/// Outcome of one check: whether it passed, and the diagnostic if not
pub type Check = (bool, String);

pub fn is_list(context: &Context) -> Check {
    (
        context.as_list().is_some(),
        format!(
            "Expected current context to be a list context, but got {}",
            context.key
        ),
    )
}

pub fn is_confirmation(context: &Context) -> Check {
    let view = &context.view;
    (
        view.name == CONFIRMATION_VIEW && !view.editable,
        "Expected confirmation popup to be focused".to_string(),
    )
}

pub fn is_prompt(context: &Context) -> Check {
    let view = &context.view;
    (
        view.name == CONFIRMATION_VIEW && view.editable,
        "Expected prompt popup to be focused".to_string(),
    )
}

// Alerts render in the confirmation view, same as confirmations.
pub fn is_alert(context: &Context) -> Check {
    let view = &context.view;
    (
        view.name == CONFIRMATION_VIEW && !view.editable,
        "Expected alert popup to be focused".to_string(),
    )
}

pub fn is_menu(context: &Context) -> Check {
    (
        context.view.name == MENU_VIEW,
        "Expected popup menu to be focused".to_string(),
    )
}

pub fn is_commit_message_panel(context: &Context) -> Check {
    (
        context.view.name == COMMIT_MESSAGE_VIEW,
        "Expected commit message panel to be focused".to_string(),
    )
}

pub fn is_not_popup(context: &Context) -> Check {
    let name = context.view.name.as_str();
    (
        !POPUP_VIEWS.contains(&name),
        format!("Unexpected popup view present: {name} view"),
    )
}

pub fn is_window(context: &Context, expected: &str) -> Check {
    let actual = &context.view.name;
    (
        actual == expected,
        format!("Expected current window name to be '{expected}', but got '{actual}'"),
    )
}

impl TestDriver {
    fn wait_for_mode(&self, check: impl Fn(&Context) -> Check) -> Result<(), DriverError> {
        self.assert_with_retries(|| check(&self.gui().current_context()))
    }

    /// Wait until the focused context has list semantics
    pub fn in_list_context(&self) -> Result<(), DriverError> {
        self.wait_for_mode(is_list)
    }

    pub fn in_confirm(&self) -> Result<(), DriverError> {
        self.wait_for_mode(is_confirmation)
    }

    pub fn in_prompt(&self) -> Result<(), DriverError> {
        self.wait_for_mode(is_prompt)
    }

    pub fn in_alert(&self) -> Result<(), DriverError> {
        self.wait_for_mode(is_alert)
    }

    pub fn in_menu(&self) -> Result<(), DriverError> {
        self.wait_for_mode(is_menu)
    }

    pub fn in_commit_message_panel(&self) -> Result<(), DriverError> {
        self.wait_for_mode(is_commit_message_panel)
    }

    /// Wait until no popup view is focused
    pub fn not_in_popup(&self) -> Result<(), DriverError> {
        self.wait_for_mode(is_not_popup)
    }

    pub fn current_window_name(&self, expected: &str) -> Result<(), DriverError> {
        self.wait_for_mode(|context| is_window(context, expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ListState, View};

    fn popup(name: &str, editable: bool) -> Context {
        Context::plain(name, View::new(name).editable(editable))
    }

    #[test]
    fn list_check_reports_actual_context() {
        let list = Context::list("files", View::new("files"), ListState::default());
        assert!(is_list(&list).0);

        let (ok, message) = is_list(&popup("menu", false));
        assert!(!ok);
        assert_eq!(message, "Expected current context to be a list context, but got menu");
    }

    #[test]
    fn confirmation_and_prompt_split_on_editable() {
        let confirm = popup(CONFIRMATION_VIEW, false);
        let prompt = popup(CONFIRMATION_VIEW, true);

        assert!(is_confirmation(&confirm).0);
        assert!(is_alert(&confirm).0);
        assert!(!is_prompt(&confirm).0);

        assert!(!is_confirmation(&prompt).0);
        assert!(!is_alert(&prompt).0);
        assert!(is_prompt(&prompt).0);
    }

    #[test]
    fn menu_and_commit_panel() {
        assert!(is_menu(&popup(MENU_VIEW, false)).0);
        assert!(!is_menu(&popup(CONFIRMATION_VIEW, false)).0);
        assert!(is_commit_message_panel(&popup(COMMIT_MESSAGE_VIEW, true)).0);
        assert_eq!(
            is_commit_message_panel(&popup("files", false)).1,
            "Expected commit message panel to be focused"
        );
    }

    #[test]
    fn not_popup_rejects_every_reserved_view() {
        for name in POPUP_VIEWS {
            let (ok, message) = is_not_popup(&popup(name, false));
            assert!(!ok, "{name} should count as a popup");
            assert_eq!(message, format!("Unexpected popup view present: {name} view"));
        }
        assert!(is_not_popup(&popup("files", false)).0);
    }

    #[test]
    fn window_name_message() {
        let (ok, message) = is_window(&popup("files", false), "branches");
        assert!(!ok);
        assert_eq!(
            message,
            "Expected current window name to be 'branches', but got 'files'"
        );
    }
}
