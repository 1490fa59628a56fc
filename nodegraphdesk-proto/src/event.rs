use serde::{Deserialize, Serialize};

/// Events delivered by the host's node-graph editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// A key hit inside a network editor pane.
    KeyPress { key: String },
    /// The pane `editor_pane_name` moved from `old_path` to `new_path`.
    ContextChanged {
        editor_pane_name: String,
        old_path: String,
        new_path: String,
    },
}

impl UiEvent {
    pub fn key_press(key: impl Into<String>) -> Self {
        Self::KeyPress { key: key.into() }
    }

    pub fn context_changed(
        editor_pane_name: impl Into<String>,
        old_path: impl Into<String>,
        new_path: impl Into<String>,
    ) -> Self {
        Self::ContextChanged {
            editor_pane_name: editor_pane_name.into(),
            old_path: old_path.into(),
            new_path: new_path.into(),
        }
    }
}
