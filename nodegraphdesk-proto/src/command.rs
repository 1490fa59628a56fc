use std::fmt;

use serde::{Deserialize, Serialize};

/// Instructions for the host UI, written one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostCommand {
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

/// Answers offered by the assignment dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Reassign,
    Remove,
    Cancel,
}

impl Choice {
    pub fn label(self) -> &'static str {
        match self {
            Choice::Reassign => "Reassign",
            Choice::Remove => "Remove",
            Choice::Cancel => "Cancel",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reassign" => Some(Choice::Reassign),
            "remove" => Some(Choice::Remove),
            "cancel" => Some(Choice::Cancel),
            _ => None,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pane_path_serialization() {
        let cmd = HostCommand::SetPanePath {
            pane_name: "panetab2".to_string(),
            path: "/mat/principled".to_string(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"set_pane_path\""));
        assert!(json.contains("\"pane_name\":\"panetab2\""));

        let back: HostCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("Reassign"), Some(Choice::Reassign));
        assert_eq!(Choice::parse("REMOVE"), Some(Choice::Remove));
        assert_eq!(Choice::parse("cancel"), Some(Choice::Cancel));
        assert_eq!(Choice::parse("keep"), None);
    }
}
