//! Test fixtures for common test scenarios

use std::sync::{Arc, Once};

use tui_driver::modes::{COMMIT_MESSAGE_VIEW, CONFIRMATION_VIEW, MENU_VIEW};
use tui_driver::{Context, DriverConfig, ListState, Shell, TestDriver, View};

use crate::headless::HeadlessGui;

/// Rows used by the end-to-end navigation scenarios
pub const FRUIT: [&str; 3] = ["apple", "banana", "cherry"];

/// Short timings so failing assertions give up quickly
pub fn fast_config() -> DriverConfig {
    DriverConfig {
        poll_interval_ms: 1,
        timeout_ms: 100,
        input_delay_ms: 0,
        ..DriverConfig::default()
    }
}

/// Install a tracing subscriber once per test binary.
///
/// Honors `RUST_LOG` (default `info`) and `NO_COLOR`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let use_ansi = std::env::var("NO_COLOR").is_err();

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer().with_ansi(use_ansi))
            .with(filter)
            .try_init();
    });
}

/// List context named `name` with the given rows and selection
pub fn list_context<S: Into<String>>(
    name: &str,
    lines: impl IntoIterator<Item = S>,
    selected: usize,
) -> Context {
    Context::list(name, View::new(name), ListState::new(lines, selected))
}

/// The fruit list with the selection at `selected`
pub fn fruit_list(selected: usize) -> Context {
    list_context("files", FRUIT, selected)
}

pub fn confirmation(title: &str) -> Context {
    Context::plain(
        CONFIRMATION_VIEW,
        View::new(CONFIRMATION_VIEW).with_title(title),
    )
}

pub fn prompt(title: &str) -> Context {
    Context::plain(
        CONFIRMATION_VIEW,
        View::new(CONFIRMATION_VIEW).editable(true).with_title(title),
    )
}

pub fn menu<S: Into<String>>(title: &str, items: impl IntoIterator<Item = S>) -> Context {
    Context::list(
        MENU_VIEW,
        View::new(MENU_VIEW).with_title(title),
        ListState::new(items, 0),
    )
}

pub fn commit_message_panel() -> Context {
    Context::plain(
        COMMIT_MESSAGE_VIEW,
        View::new(COMMIT_MESSAGE_VIEW)
            .editable(true)
            .with_title("Commit summary"),
    )
}

/// Driver wired to `gui` with a shell rooted in the system temp dir
pub fn driver(gui: &Arc<HeadlessGui>, config: &DriverConfig) -> TestDriver {
    init_tracing();
    TestDriver::new(gui.clone(), Shell::new(std::env::temp_dir()), config)
}

/// Driver using `DriverConfig::load()`, the configuration a real run
/// would pick up from the environment
pub fn default_driver(gui: &Arc<HeadlessGui>) -> TestDriver {
    driver(gui, &DriverConfig::load())
}

/// Fake application focused on `context` plus a fast driver for it
pub fn setup(context: Context) -> (Arc<HeadlessGui>, TestDriver) {
    let gui = HeadlessGui::new(context);
    let t = driver(&gui, &fast_config());
    (gui, t)
}
