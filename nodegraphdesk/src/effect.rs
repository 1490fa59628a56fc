use nodegraphdesk_proto::Configuration;

/// How long status messages stay on screen.
pub const MESSAGE_DURATION_SECS: f64 = 2.5;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SaveConfig(Configuration),
    SetActiveDesktop {
        name: String,
    },
    SetPanePath {
        pane_name: String,
        path: String,
    },
    ShowMessage {
        icon: String,
        text: String,
        duration_seconds: f64,
    },
}

impl Effect {
    pub fn message(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Effect::ShowMessage {
            icon: icon.into(),
            text: text.into(),
            duration_seconds: MESSAGE_DURATION_SECS,
        }
    }
}
