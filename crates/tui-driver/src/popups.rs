//! Sub-asserters for popups
//!
//! Each `expect_*` call waits for its popup kind to be focused and then
//! hands back an asserter scoped to it. The asserters only delegate to the
//! view driver and the keybindings.

use crate::driver::TestDriver;
use crate::error::DriverError;
use crate::matcher::Matcher;

impl TestDriver {
    pub fn expect_confirmation(&self) -> Result<ConfirmationAsserter<'_>, DriverError> {
        self.in_confirm()?;
        Ok(ConfirmationAsserter { t: self })
    }

    pub fn expect_prompt(&self) -> Result<PromptAsserter<'_>, DriverError> {
        self.in_prompt()?;
        Ok(PromptAsserter { t: self })
    }

    pub fn expect_alert(&self) -> Result<AlertAsserter<'_>, DriverError> {
        self.in_alert()?;
        Ok(AlertAsserter { t: self })
    }

    pub fn expect_menu(&self) -> Result<MenuAsserter<'_>, DriverError> {
        self.in_menu()?;
        Ok(MenuAsserter { t: self })
    }

    pub fn expect_commit_message_panel(
        &self,
    ) -> Result<CommitMessagePanelAsserter<'_>, DriverError> {
        self.in_commit_message_panel()?;
        Ok(CommitMessagePanelAsserter { t: self })
    }
}

pub struct ConfirmationAsserter<'a> {
    t: &'a TestDriver,
}

impl ConfirmationAsserter<'_> {
    pub fn title(self, expected: &Matcher) -> Result<Self, DriverError> {
        self.t.views().current().title(expected)?;
        Ok(self)
    }

    pub fn confirm(self) {
        self.t.press(&self.t.keys().confirm);
    }

    pub fn cancel(self) {
        self.t.press(&self.t.keys().return_key);
    }
}

pub struct AlertAsserter<'a> {
    t: &'a TestDriver,
}

impl AlertAsserter<'_> {
    pub fn title(self, expected: &Matcher) -> Result<Self, DriverError> {
        self.t.views().current().title(expected)?;
        Ok(self)
    }

    pub fn confirm(self) {
        self.t.press(&self.t.keys().confirm);
    }

    pub fn cancel(self) {
        self.t.press(&self.t.keys().return_key);
    }
}

pub struct PromptAsserter<'a> {
    t: &'a TestDriver,
}

impl PromptAsserter<'_> {
    pub fn title(self, expected: &Matcher) -> Result<Self, DriverError> {
        self.t.views().current().title(expected)?;
        Ok(self)
    }

    pub fn type_text(self, text: &str) -> Self {
        self.t.type_content(text);
        self
    }

    pub fn clear(self) -> Self {
        self.t.press(&self.t.keys().clear_prompt);
        self
    }

    pub fn confirm(self) {
        self.t.press(&self.t.keys().confirm);
    }

    pub fn cancel(self) {
        self.t.press(&self.t.keys().return_key);
    }
}

pub struct MenuAsserter<'a> {
    t: &'a TestDriver,
}

impl MenuAsserter<'_> {
    pub fn title(self, expected: &Matcher) -> Result<Self, DriverError> {
        self.t.views().current().title(expected)?;
        Ok(self)
    }

    /// Move the menu selection onto the single item matching `option`
    pub fn select(self, option: &Matcher) -> Result<Self, DriverError> {
        self.t.navigate_to_list_item(option)?;
        Ok(self)
    }

    pub fn confirm(self) {
        self.t.press(&self.t.keys().confirm);
    }

    pub fn cancel(self) {
        self.t.press(&self.t.keys().return_key);
    }
}

pub struct CommitMessagePanelAsserter<'a> {
    t: &'a TestDriver,
}

impl CommitMessagePanelAsserter<'_> {
    pub fn title(self, expected: &Matcher) -> Result<Self, DriverError> {
        self.t.views().current().title(expected)?;
        Ok(self)
    }

    pub fn type_text(self, text: &str) -> Self {
        self.t.type_content(text);
        self
    }

    pub fn confirm(self) {
        self.t.press(&self.t.keys().submit_commit);
    }

    pub fn cancel(self) {
        self.t.press(&self.t.keys().return_key);
    }
}
