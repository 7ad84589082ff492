//! Polling driver for end-to-end tests of a terminal UI
//!
//! Tests drive the application through key presses and assert on what it
//! renders. The UI updates asynchronously, so every assertion is expressed
//! as "eventually true within a timeout" and evaluated by polling.
//!
//! # Modules
//!
//! - `matcher`: Named line predicates used in assertions and navigation
//! - `retry`: Bounded poll-until-true evaluation engine
//! - `context`: Boundary with the driven application
//! - `modes`: Checks for which kind of view is focused
//! - `navigator`: Moving the list selection onto a matching row
//! - `input`: Paced key dispatch
//! - `driver`: The `TestDriver` facade handed to tests
//! - `views`: Assertions scoped to the focused view
//! - `popups`: Sub-asserters returned by `expect_*` calls
//! - `config`: Timing and keybinding configuration
//! - `shell`: Background shell activity during a test

pub mod config;
pub mod context;
pub mod driver;
pub mod error;
pub mod input;
pub mod matcher;
pub mod modes;
pub mod navigator;
pub mod popups;
pub mod retry;
pub mod shell;
pub mod views;

pub use config::{DriverConfig, KeybindingConfig};
pub use context::{Context, ContextKind, GuiDriver, ListState, View};
pub use driver::TestDriver;
pub use error::DriverError;
pub use matcher::Matcher;
pub use retry::RetryEngine;
pub use shell::Shell;
