//! Assertions scoped to the focused view

use crate::context::Context;
use crate::driver::TestDriver;
use crate::error::DriverError;
use crate::matcher::Matcher;
use crate::modes;

/// Entry point for view assertions
pub struct Views<'a> {
    t: &'a TestDriver,
}

impl<'a> Views<'a> {
    pub(crate) fn new(t: &'a TestDriver) -> Self {
        Self { t }
    }

    /// Whatever view currently has focus
    pub fn current(&self) -> ViewDriver<'a> {
        ViewDriver { t: self.t }
    }
}

/// Drives and asserts on the focused view.
///
/// Every assertion re-reads the context on each attempt, so it follows
/// focus changes made by the application while it polls.
pub struct ViewDriver<'a> {
    t: &'a TestDriver,
}

impl ViewDriver<'_> {
    pub fn press(&self, key: &str) {
        self.t.press(key);
    }

    pub fn select_next_item(&self) {
        self.t.press(&self.t.keys().next_item);
    }

    pub fn select_previous_item(&self) {
        self.t.press(&self.t.keys().prev_item);
    }

    pub fn navigate_to_list_item(&self, matcher: &Matcher) -> Result<(), DriverError> {
        self.t.navigate_to_list_item(matcher)
    }

    /// Wait until the selected row matches `matcher`
    pub fn selected_line(&self, matcher: &Matcher) -> Result<(), DriverError> {
        self.assert_on_context(|context| {
            let Some(list) = context.as_list() else {
                return modes::is_list(context);
            };
            match list.selected_line() {
                Some(line) => (
                    matcher.test(line),
                    format!(
                        "Unexpected selected line. Expected {}, got '{}'",
                        matcher.name(),
                        line
                    ),
                ),
                None => (
                    false,
                    format!(
                        "Expected selected line to match {}, but selection {} is past {} lines",
                        matcher.name(),
                        list.selected_line_idx,
                        list.lines.len()
                    ),
                ),
            }
        })
    }

    /// Wait until the view title matches `matcher`
    pub fn title(&self, matcher: &Matcher) -> Result<(), DriverError> {
        self.assert_on_context(|context| {
            let title = &context.view.title;
            (
                matcher.test(title),
                format!(
                    "Unexpected title in {} view. Expected {}, got '{}'",
                    context.view.name,
                    matcher.name(),
                    title
                ),
            )
        })
    }

    /// Wait until the visible rows are exactly `matchers`, in order
    pub fn lines(&self, matchers: &[Matcher]) -> Result<(), DriverError> {
        self.assert_on_context(|context| {
            let Some(list) = context.as_list() else {
                return modes::is_list(context);
            };
            if list.lines.len() != matchers.len() {
                return (
                    false,
                    format!(
                        "Expected {} lines in {} view, got {}. Lines:\n{}",
                        matchers.len(),
                        context.view.name,
                        list.lines.len(),
                        list.lines.join("\n")
                    ),
                );
            }
            for (i, (line, matcher)) in list.lines.iter().zip(matchers).enumerate() {
                if !matcher.test(line) {
                    return (
                        false,
                        format!(
                            "Unexpected content in line {} of {} view. Expected {}, got '{}'",
                            i,
                            context.view.name,
                            matcher.name(),
                            line
                        ),
                    );
                }
            }
            (true, String::new())
        })
    }

    /// Wait until `matchers` match a contiguous run of visible rows
    pub fn contains_lines(&self, matchers: &[Matcher]) -> Result<(), DriverError> {
        self.assert_on_context(|context| {
            let Some(list) = context.as_list() else {
                return modes::is_list(context);
            };
            let found = matchers.is_empty()
                || list.lines.windows(matchers.len()).any(|window| {
                    window
                        .iter()
                        .zip(matchers)
                        .all(|(line, matcher)| matcher.test(line))
                });
            let expected = matchers
                .iter()
                .map(Matcher::name)
                .collect::<Vec<_>>()
                .join("\n");
            (
                found,
                format!(
                    "Could not find lines in {} view.\nExpected:\n{}\nActual:\n{}",
                    context.view.name,
                    expected,
                    list.lines.join("\n")
                ),
            )
        })
    }

    fn assert_on_context(
        &self,
        check: impl Fn(&Context) -> (bool, String),
    ) -> Result<(), DriverError> {
        self.t
            .assert_with_retries(|| check(&self.t.gui().current_context()))
    }
}
