//! Headless fake application for testing

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tui_driver::{Context, GuiDriver, KeybindingConfig, ListState};

/// A key event as received by the fake application
#[derive(Debug, Clone)]
pub struct KeyPress {
    pub key: String,
    pub at: Instant,
}

/// Scriptable stand-in for the driven application
///
/// Holds one focused `Context`. Next/previous keys move the selection of
/// a list context (clamped to its rows); other keys can be scripted to
/// switch focus with `on_key`. Every key press and log message is recorded.
pub struct HeadlessGui {
    state: Mutex<GuiState>,
}

struct GuiState {
    context: Context,
    keys: KeybindingConfig,

    /// (view name, key) -> context focused after the key is pressed
    transitions: HashMap<(String, String), Context>,

    /// When false, next/previous keys are swallowed
    movement_enabled: bool,

    presses: Vec<KeyPress>,
    log: Vec<String>,
    context_reads: usize,
}

impl HeadlessGui {
    pub fn new(context: Context) -> Arc<Self> {
        Self::with_keys(context, KeybindingConfig::default())
    }

    pub fn with_keys(context: Context, keys: KeybindingConfig) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(GuiState {
                context,
                keys,
                transitions: HashMap::new(),
                movement_enabled: true,
                presses: Vec::new(),
                log: Vec::new(),
                context_reads: 0,
            }),
        })
    }

    fn state(&self) -> MutexGuard<'_, GuiState> {
        // A panicking test thread must not hide the state from the others
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the focused context immediately
    pub fn set_context(&self, context: Context) {
        self.state().context = context;
    }

    /// Replace the focused context from a background thread after `delay`
    pub fn set_context_after(
        self: &Arc<Self>,
        delay: Duration,
        context: Context,
    ) -> JoinHandle<()> {
        let gui = Arc::clone(self);
        thread::spawn(move || {
            thread::sleep(delay);
            gui.set_context(context);
        })
    }

    /// Mutate the focused list, if there is one
    pub fn update_list(&self, f: impl FnOnce(&mut ListState)) {
        if let Some(list) = self.state().context.as_list_mut() {
            f(list);
        }
    }

    /// Focus `next` when `key` is pressed while `view` is focused
    pub fn on_key(&self, view: &str, key: &str, next: Context) {
        self.state()
            .transitions
            .insert((view.to_string(), key.to_string()), next);
    }

    pub fn set_movement_enabled(&self, enabled: bool) {
        self.state().movement_enabled = enabled;
    }

    pub fn context(&self) -> Context {
        self.state().context.clone()
    }

    pub fn selected_line_idx(&self) -> Option<usize> {
        self.state()
            .context
            .as_list()
            .map(|list| list.selected_line_idx)
    }

    pub fn presses(&self) -> Vec<KeyPress> {
        self.state().presses.clone()
    }

    pub fn pressed_keys(&self) -> Vec<String> {
        self.state().presses.iter().map(|p| p.key.clone()).collect()
    }

    pub fn log_messages(&self) -> Vec<String> {
        self.state().log.clone()
    }

    /// Number of times the driver has read the focused context
    pub fn context_reads(&self) -> usize {
        self.state().context_reads
    }
}

impl GuiDriver for HeadlessGui {
    fn press_key(&self, key: &str) {
        let mut state = self.state();
        state.presses.push(KeyPress {
            key: key.to_string(),
            at: Instant::now(),
        });

        let transition = (state.context.view.name.clone(), key.to_string());
        if let Some(next) = state.transitions.get(&transition).cloned() {
            tracing::debug!(from = %transition.0, to = %next.view.name, key, "focus change");
            state.context = next;
            return;
        }

        let is_next = key == state.keys.next_item;
        let is_prev = key == state.keys.prev_item;
        if !state.movement_enabled || !(is_next || is_prev) {
            return;
        }
        if let Some(list) = state.context.as_list_mut() {
            let last = list.lines.len().saturating_sub(1);
            list.selected_line_idx = if is_next {
                (list.selected_line_idx + 1).min(last)
            } else {
                list.selected_line_idx.saturating_sub(1)
            };
        }
    }

    fn current_context(&self) -> Context {
        let mut state = self.state();
        state.context_reads += 1;
        state.context.clone()
    }

    fn log_ui(&self, message: &str) {
        self.state().log.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_driver::View;

    fn fruit(selected: usize) -> Context {
        Context::list(
            "files",
            View::new("files"),
            ListState::new(["apple", "banana", "cherry"], selected),
        )
    }

    #[test]
    fn movement_is_clamped_to_rows() {
        let gui = HeadlessGui::new(fruit(2));
        gui.press_key("<down>");
        assert_eq!(gui.selected_line_idx(), Some(2));

        gui.press_key("<up>");
        gui.press_key("<up>");
        gui.press_key("<up>");
        assert_eq!(gui.selected_line_idx(), Some(0));
        assert_eq!(gui.pressed_keys(), ["<down>", "<up>", "<up>", "<up>"]);
    }

    #[test]
    fn disabled_movement_swallows_keys() {
        let gui = HeadlessGui::new(fruit(0));
        gui.set_movement_enabled(false);
        gui.press_key("<down>");
        assert_eq!(gui.selected_line_idx(), Some(0));
        assert_eq!(gui.presses().len(), 1);
    }

    #[test]
    fn scripted_transition_changes_focus() {
        let gui = HeadlessGui::new(fruit(0));
        let menu = Context::plain("menu", View::new("menu"));
        gui.on_key("files", "m", menu.clone());

        gui.press_key("x");
        assert_eq!(gui.context().view.name, "files");
        gui.press_key("m");
        assert_eq!(gui.context(), menu);
    }

    #[test]
    fn delayed_context_change() {
        let gui = HeadlessGui::new(fruit(0));
        let handle = gui.set_context_after(
            Duration::from_millis(5),
            Context::plain("menu", View::new("menu")),
        );
        handle.join().unwrap();
        assert_eq!(gui.context().view.name, "menu");
    }

    #[test]
    fn reads_and_logs_are_recorded() {
        let gui = HeadlessGui::new(fruit(0));
        let _ = gui.current_context();
        let _ = gui.current_context();
        gui.log_ui("hello");
        assert_eq!(gui.context_reads(), 2);
        assert_eq!(gui.log_messages(), ["hello"]);
    }
}
