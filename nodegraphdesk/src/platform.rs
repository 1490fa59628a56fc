use std::io::Write;

use nodegraphdesk_proto::{Choice, HostCommand};

/// A network editor pane: its name and the network path it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneInfo {
    pub name: String,
    pub path: String,
}

impl PaneInfo {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Trait for querying desktops and panes from the host.
/// This abstraction allows mocking in tests.
pub trait HostSystem {
    fn current_desktop_name(&self) -> String;
    fn desktop_exists(&self, name: &str) -> bool;
    /// Current network editor pane under the cursor, if any.
    fn pane_under_cursor(&self) -> Option<PaneInfo>;
    /// Node type category of the network at `path`, if the host knows it.
    fn node_type_of(&self, path: &str) -> Option<String>;
}

/// Modal dialogs. Whatever ends a dialog without an answer counts as Cancel.
pub trait Dialogs {
    fn prompt_choice(&self, message: &str, options: &[Choice]) -> Choice;
    fn prompt_confirm(&self, message: &str) -> bool;
}

/// Trait for changing host UI state (side effects).
/// This abstraction allows mocking in tests.
pub trait HostManipulator {
    fn set_active_desktop(&self, name: &str);
    fn set_pane_path(&self, pane_name: &str, path: &str);
    fn show_transient_message(&self, icon: &str, text: &str, duration_seconds: f64);
}

/// Host state supplied on the command line, with dialogs on the terminal.
/// Prompts can be pre-answered for scripted use.
#[derive(Debug, Default)]
pub struct TerminalHost {
    desktop: String,
    desktops: Vec<String>,
    pane: Option<PaneInfo>,
    node_type: Option<String>,
    choice: Option<Choice>,
    confirm: Option<bool>,
}

impl TerminalHost {
    pub fn new(desktop: impl Into<String>) -> Self {
        Self {
            desktop: desktop.into(),
            ..Default::default()
        }
    }

    /// Known desktops. Left empty, every desktop is assumed to exist.
    pub fn with_desktops(mut self, desktops: Vec<String>) -> Self {
        self.desktops = desktops;
        self
    }

    pub fn with_pane(mut self, pane: Option<PaneInfo>) -> Self {
        self.pane = pane;
        self
    }

    pub fn with_node_type(mut self, node_type: Option<String>) -> Self {
        self.node_type = node_type;
        self
    }

    pub fn with_choice(mut self, choice: Option<Choice>) -> Self {
        self.choice = choice;
        self
    }

    pub fn with_confirm(mut self, confirm: Option<bool>) -> Self {
        self.confirm = confirm;
        self
    }
}

impl HostSystem for TerminalHost {
    fn current_desktop_name(&self) -> String {
        self.desktop.clone()
    }

    fn desktop_exists(&self, name: &str) -> bool {
        self.desktops.is_empty() || self.desktops.iter().any(|d| d == name)
    }

    fn pane_under_cursor(&self) -> Option<PaneInfo> {
        self.pane.clone()
    }

    fn node_type_of(&self, _path: &str) -> Option<String> {
        self.node_type.clone()
    }
}

impl Dialogs for TerminalHost {
    fn prompt_choice(&self, message: &str, options: &[Choice]) -> Choice {
        if let Some(choice) = self.choice {
            return choice;
        }

        let labels: Vec<&str> = options.iter().map(|c| c.label()).collect();
        match dialoguer::Select::new()
            .with_prompt(message)
            .items(&labels)
            .default(0)
            .interact_opt()
        {
            Ok(Some(index)) => options.get(index).copied().unwrap_or(Choice::Cancel),
            Ok(None) => Choice::Cancel,
            Err(e) => {
                tracing::warn!("Failed to get user input: {}", e);
                Choice::Cancel
            }
        }
    }

    fn prompt_confirm(&self, message: &str) -> bool {
        if let Some(confirm) = self.confirm {
            return confirm;
        }

        match dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact_opt()
        {
            Ok(answer) => answer.unwrap_or(false),
            Err(e) => {
                tracing::warn!("Failed to get user input: {}", e);
                false
            }
        }
    }
}

/// Writes each host instruction to stdout as one JSON line for a host bridge.
#[derive(Debug, Default)]
pub struct StdoutManipulator;

impl StdoutManipulator {
    fn emit(&self, command: HostCommand) {
        let json = match serde_json::to_string(&command) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to encode host command {:?}: {}", command, e);
                return;
            }
        };
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", json).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write host command: {}", e);
        }
    }
}

impl HostManipulator for StdoutManipulator {
    fn set_active_desktop(&self, name: &str) {
        self.emit(HostCommand::SetActiveDesktop {
            name: name.to_string(),
        });
    }

    fn set_pane_path(&self, pane_name: &str, path: &str) {
        self.emit(HostCommand::SetPanePath {
            pane_name: pane_name.to_string(),
            path: path.to_string(),
        });
    }

    fn show_transient_message(&self, icon: &str, text: &str, duration_seconds: f64) {
        self.emit(HostCommand::ShowMessage {
            icon: icon.to_string(),
            text: text.to_string(),
            duration_seconds,
        });
    }
}
