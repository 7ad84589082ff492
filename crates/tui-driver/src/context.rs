//! Boundary with the driven application
//!
//! The driver only ever sees a fresh `Context` snapshot per poll and talks
//! back through discrete key presses.

/// Capabilities the driven application exposes to tests
pub trait GuiDriver: Send + Sync {
    /// Inject one key event, e.g. `"a"` or `"<enter>"`
    fn press_key(&self, key: &str);

    /// Snapshot of the currently focused context
    fn current_context(&self) -> Context;

    /// Forward a message into the application's own log
    fn log_ui(&self, message: &str);
}

/// The view backing a context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// View identity, e.g. `"files"`, `"menu"`, `"confirmation"`
    pub name: String,
    pub editable: bool,
    pub title: String,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            editable: false,
            title: String::new(),
        }
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Rendered rows of a list-like context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// Lines currently rendered in the viewport
    pub lines: Vec<String>,
    pub selected_line_idx: usize,
}

impl ListState {
    pub fn new<I, S>(lines: I, selected_line_idx: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            selected_line_idx,
        }
    }

    pub fn selected_line(&self) -> Option<&str> {
        self.lines.get(self.selected_line_idx).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextKind {
    /// Exposes rows, a selection and next/previous movement
    List(ListState),
    Plain,
}

/// Currently focused logical region of the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub key: String,
    pub view: View,
    pub kind: ContextKind,
}

impl Context {
    pub fn plain(key: impl Into<String>, view: View) -> Self {
        Self {
            key: key.into(),
            view,
            kind: ContextKind::Plain,
        }
    }

    pub fn list(key: impl Into<String>, view: View, state: ListState) -> Self {
        Self {
            key: key.into(),
            view,
            kind: ContextKind::List(state),
        }
    }

    /// List capability, if this context has one
    pub fn as_list(&self) -> Option<&ListState> {
        match &self.kind {
            ContextKind::List(state) => Some(state),
            ContextKind::Plain => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut ListState> {
        match &mut self.kind {
            ContextKind::List(state) => Some(state),
            ContextKind::Plain => None,
        }
    }
}
