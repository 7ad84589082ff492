//! Paced key dispatch

use std::thread;
use std::time::Duration;

use crate::context::GuiDriver;

/// Delivers key events with a fixed delay before each one
#[derive(Debug, Clone, Copy)]
pub struct InputDispatcher {
    delay: Duration,
}

impl InputDispatcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait the input delay, then deliver `key`
    pub fn press(&self, gui: &dyn GuiDriver, key: &str) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        tracing::trace!(key, "press");
        gui.press_key(key);
    }

    /// Deliver `content` one character at a time, in order
    pub fn type_content(&self, gui: &dyn GuiDriver, content: &str) {
        let mut buf = [0u8; 4];
        for ch in content.chars() {
            self.press(gui, ch.encode_utf8(&mut buf));
        }
    }
}
