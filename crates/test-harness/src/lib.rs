//! Test harness for tui-driver
//!
//! Provides an in-process stand-in for the driven application so the
//! driver can be exercised without a terminal.
//!
//! # Modules
//!
//! - `headless`: Scriptable fake application implementing `GuiDriver`
//! - `assertions`: Common test assertions on recorded key presses
//! - `fixtures`: Test fixture helpers

pub mod assertions;
pub mod fixtures;
pub mod headless;

pub use headless::{HeadlessGui, KeyPress};
