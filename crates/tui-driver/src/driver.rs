//! The facade handed to each test
//!
//! Holds the driven application, the timing configuration and the
//! keybindings. Mode checks live in `modes`, list navigation in
//! `navigator`, and the popup sub-asserters in `popups`.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::{DriverConfig, KeybindingConfig};
use crate::context::GuiDriver;
use crate::error::DriverError;
use crate::input::InputDispatcher;
use crate::matcher::Matcher;
use crate::retry::RetryEngine;
use crate::shell::Shell;
use crate::views::Views;

pub struct TestDriver {
    gui: Arc<dyn GuiDriver>,
    keys: KeybindingConfig,
    input: InputDispatcher,
    retry: RetryEngine,
    shell: Shell,
}

impl TestDriver {
    pub fn new(gui: Arc<dyn GuiDriver>, shell: Shell, config: &DriverConfig) -> Self {
        Self {
            gui,
            keys: config.keybindings.clone(),
            input: InputDispatcher::new(config.input_delay()),
            retry: RetryEngine::from_config(config),
            shell,
        }
    }

    pub(crate) fn gui(&self) -> &dyn GuiDriver {
        self.gui.as_ref()
    }

    pub fn keys(&self) -> &KeybindingConfig {
        &self.keys
    }

    pub fn retry_engine(&self) -> &RetryEngine {
        &self.retry
    }

    /// Press one key after the configured input delay.
    ///
    /// Prefer keys from `keys()` over literal key strings.
    pub fn press(&self, key: &str) {
        self.input.press(self.gui(), key);
    }

    /// Type `content` one character at a time
    pub fn type_content(&self, content: &str) {
        self.input.type_content(self.gui(), content);
    }

    /// Give the application time to process something before continuing
    pub fn wait(&self, milliseconds: u64) {
        thread::sleep(Duration::from_millis(milliseconds));
    }

    pub fn log_ui(&self, message: &str) {
        self.gui.log_ui(message);
    }

    pub fn log(&self, message: &str) {
        self.gui.log_ui(message);
    }

    /// Handle for running shell commands during the test to emulate
    /// background activity
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Assertions on the application's views
    pub fn views(&self) -> Views<'_> {
        Views::new(self)
    }

    /// Fail the test with `message`.
    ///
    /// The message is also written to the application's log so it shows up
    /// alongside the UI's own output.
    pub fn fail(&self, message: impl Into<String>) -> DriverError {
        let message = message.into();
        tracing::warn!(%message, "test failed");
        self.gui.log_ui(&message);
        DriverError::Failed(message)
    }

    /// Run `check` through the retry engine; failures are reported to the
    /// application's log before being returned.
    pub fn assert_with_retries<F>(&self, check: F) -> Result<(), DriverError>
    where
        F: FnMut() -> (bool, String),
    {
        self.retry
            .assert_with_retries(check)
            .map_err(|e| self.report(e))
    }

    pub(crate) fn poll<T, F>(&self, check: F) -> Result<T, DriverError>
    where
        F: FnMut() -> Result<T, String>,
    {
        self.retry
            .poll(check)
            .map_err(|e| self.report(e))
    }

    fn report(&self, error: DriverError) -> DriverError {
        self.gui.log_ui(&error.message());
        error
    }

    pub fn continue_merge(&self) -> Result<(), DriverError> {
        self.views().current().press(&self.keys.rebase_options_menu);

        self.expect_menu()?
            .title(&Matcher::equals("Rebase Options"))?
            .select(&Matcher::contains("continue"))?
            .confirm();
        Ok(())
    }

    pub fn continue_rebase(&self) -> Result<(), DriverError> {
        self.continue_merge()
    }
}
