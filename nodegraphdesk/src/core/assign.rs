use nodegraphdesk_proto::{Binding, Choice, Configuration};

use super::alias::candidate_types;
use super::icon::{icon_for_context, ICON_CANCELED, ICON_CLEARED};
use crate::platform::Dialogs;

/// What the user asked to bind: the pane under the cursor on the current desktop.
#[derive(Debug, Clone, Copy)]
pub struct AssignRequest<'a> {
    pub desktop: &'a str,
    pub pane_name: &'a str,
    pub context_type: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    Assigned,
    Reassigned { previous: Binding },
    Removed { previous: Binding },
    Canceled,
}

/// Result of `assign_context`. `config` is the document to persist when
/// `is_mutation()` holds; otherwise it equals the input.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub config: Configuration,
    pub outcome: AssignOutcome,
    pub message: String,
    pub icon: &'static str,
    /// Other desktops already bound to the same context (alias-aware).
    pub conflicts: Vec<String>,
}

impl Assignment {
    pub fn is_mutation(&self) -> bool {
        !matches!(self.outcome, AssignOutcome::Canceled)
    }
}

/// Bind, rebind or unbind the desktop in `request`, asking the user through
/// `dialogs` whenever the desktop already carries a binding.
pub fn assign_context<D: Dialogs + ?Sized>(
    request: &AssignRequest,
    mut config: Configuration,
    dialogs: &D,
) -> Assignment {
    let AssignRequest {
        desktop,
        pane_name,
        context_type,
    } = *request;
    let candidates = candidate_types(context_type, &config);

    let Some(existing) = config.binding(desktop).cloned() else {
        let conflicts = conflicting_desktops(&config, desktop, &candidates);
        config
            .nodegraphdesk_map
            .insert(desktop, Binding::new(pane_name, context_type));
        tracing::info!(
            "Assigned context {} (pane {}) to desktop {}",
            context_type,
            pane_name,
            desktop
        );

        let mut message = format!("Context '{}' assigned to desktop '{}'.", context_type, desktop);
        append_conflicts(&mut message, &conflicts);
        return Assignment {
            config,
            outcome: AssignOutcome::Assigned,
            message,
            icon: icon_for_context(context_type),
            conflicts,
        };
    };

    if candidates.contains(&existing.context_type) {
        let prompt = format!(
            "Context '{}' is already assigned to desktop '{}'.",
            existing.context_type, desktop
        );
        return match dialogs.prompt_choice(&prompt, &[Choice::Remove, Choice::Cancel]) {
            Choice::Remove => remove(config, desktop, existing),
            Choice::Reassign => {
                tracing::warn!("Dialog answered with an option it did not offer, canceling");
                canceled(config)
            }
            Choice::Cancel => canceled(config),
        };
    }

    let prompt = format!(
        "Desktop '{}' is already assigned to context '{}'. Reassign it to '{}'?",
        desktop, existing.context_type, context_type
    );
    match dialogs.prompt_choice(&prompt, &[Choice::Reassign, Choice::Remove, Choice::Cancel]) {
        Choice::Reassign => {
            let conflicts = conflicting_desktops(&config, desktop, &candidates);
            config.nodegraphdesk_map.remove(desktop);
            config
                .nodegraphdesk_map
                .insert(desktop, Binding::new(pane_name, context_type));
            tracing::info!(
                "Reassigned desktop {} from context {} to {} (pane {})",
                desktop,
                existing.context_type,
                context_type,
                pane_name
            );

            let mut message = format!(
                "Desktop '{}' reassigned from '{}' to '{}'.",
                desktop, existing.context_type, context_type
            );
            append_conflicts(&mut message, &conflicts);
            Assignment {
                config,
                outcome: AssignOutcome::Reassigned { previous: existing },
                message,
                icon: icon_for_context(context_type),
                conflicts,
            }
        }
        Choice::Remove => remove(config, desktop, existing),
        Choice::Cancel => canceled(config),
    }
}

fn remove(mut config: Configuration, desktop: &str, existing: Binding) -> Assignment {
    config.nodegraphdesk_map.remove(desktop);
    tracing::info!(
        "Removed context {} from desktop {}",
        existing.context_type,
        desktop
    );

    Assignment {
        message: format!(
            "Context '{}' removed from desktop '{}'.",
            existing.context_type, desktop
        ),
        icon: icon_for_context(&existing.context_type),
        config,
        outcome: AssignOutcome::Removed { previous: existing },
        conflicts: Vec::new(),
    }
}

fn canceled(config: Configuration) -> Assignment {
    tracing::debug!("Assignment canceled");
    Assignment {
        config,
        outcome: AssignOutcome::Canceled,
        message: "Canceled".to_string(),
        icon: ICON_CANCELED,
        conflicts: Vec::new(),
    }
}

fn conflicting_desktops(config: &Configuration, desktop: &str, candidates: &[String]) -> Vec<String> {
    config
        .nodegraphdesk_map
        .iter()
        .filter(|(name, binding)| *name != desktop && candidates.contains(&binding.context_type))
        .map(|(name, _)| name.to_string())
        .collect()
}

fn append_conflicts(message: &mut String, conflicts: &[String]) {
    if !conflicts.is_empty() {
        message.push_str(&format!(" Also assigned to: {}.", conflicts.join(", ")));
    }
}

/// Result of `clear_mapping`.
#[derive(Debug, Clone)]
pub struct Clearing {
    pub config: Configuration,
    pub cleared: bool,
    pub message: String,
    pub icon: &'static str,
}

/// Drop every desktop binding once the user confirms.
pub fn clear_mapping<D: Dialogs + ?Sized>(mut config: Configuration, dialogs: &D) -> Clearing {
    let count = config.nodegraphdesk_map.len();
    let prompt = format!("Remove all desktop context assignments ({})?", count);
    if !dialogs.prompt_confirm(&prompt) {
        tracing::debug!("Clear mapping canceled");
        return Clearing {
            config,
            cleared: false,
            message: "Canceled".to_string(),
            icon: ICON_CANCELED,
        };
    }

    config.nodegraphdesk_map.clear();
    tracing::info!("Cleared {} desktop assignments", count);
    Clearing {
        config,
        cleared: true,
        message: "All desktop context assignments removed.".to_string(),
        icon: ICON_CLEARED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockDialogs;

    fn request<'a>(desktop: &'a str, pane_name: &'a str, context_type: &'a str) -> AssignRequest<'a> {
        AssignRequest {
            desktop,
            pane_name,
            context_type,
        }
    }

    fn bound_config() -> Configuration {
        let mut config = Configuration::new();
        config.alias_mapping = true;
        config.set_alias("obj", "scene");
        config
            .nodegraphdesk_map
            .insert("Build", Binding::new("panetab1", "obj"));
        config
    }

    #[test]
    fn test_unbound_desktop_assigns_without_prompt() {
        let dialogs = MockDialogs::new();
        let result = assign_context(
            &request("Shading", "panetab3", "mat"),
            bound_config(),
            &dialogs,
        );

        assert_eq!(result.outcome, AssignOutcome::Assigned);
        assert!(result.is_mutation());
        assert_eq!(
            result.config.binding("Shading"),
            Some(&Binding::new("panetab3", "mat"))
        );
        assert_eq!(result.icon, "NETWORKS_mat");
        assert!(dialogs.prompts().is_empty());
    }

    #[test]
    fn test_same_context_offers_remove_or_cancel() {
        let dialogs = MockDialogs::new().with_choices(vec![Choice::Remove]);
        let result = assign_context(&request("Build", "panetab2", "obj"), bound_config(), &dialogs);

        let prompts = dialogs.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].1, vec![Choice::Remove, Choice::Cancel]);
        assert_eq!(
            result.outcome,
            AssignOutcome::Removed {
                previous: Binding::new("panetab1", "obj")
            }
        );
        assert!(!result.config.nodegraphdesk_map.contains_key("Build"));
    }

    #[test]
    fn test_alias_counts_as_same_context() {
        let dialogs = MockDialogs::new().with_choices(vec![Choice::Remove]);
        let result = assign_context(
            &request("Build", "panetab1", "scene"),
            bound_config(),
            &dialogs,
        );

        assert_eq!(dialogs.prompts()[0].1, vec![Choice::Remove, Choice::Cancel]);
        assert!(matches!(result.outcome, AssignOutcome::Removed { .. }));
        assert!(result.config.nodegraphdesk_map.is_empty());
    }

    #[test]
    fn test_alias_ignored_when_switched_off() {
        let mut config = bound_config();
        config.alias_mapping = false;
        let dialogs = MockDialogs::new().with_choices(vec![Choice::Cancel]);

        assign_context(&request("Build", "panetab1", "scene"), config, &dialogs);

        assert_eq!(
            dialogs.prompts()[0].1,
            vec![Choice::Reassign, Choice::Remove, Choice::Cancel]
        );
    }

    #[test]
    fn test_same_context_cancel_keeps_binding() {
        let dialogs = MockDialogs::new().with_choices(vec![Choice::Cancel]);
        let config = bound_config();
        let result = assign_context(&request("Build", "panetab1", "obj"), config.clone(), &dialogs);

        assert_eq!(result.outcome, AssignOutcome::Canceled);
        assert!(!result.is_mutation());
        assert_eq!(result.message, "Canceled");
        assert_eq!(result.config, config);
    }

    #[test]
    fn test_unoffered_answer_is_treated_as_cancel() {
        let dialogs = MockDialogs::new().with_choices(vec![Choice::Reassign]);
        let result = assign_context(&request("Build", "panetab1", "obj"), bound_config(), &dialogs);
        assert_eq!(result.outcome, AssignOutcome::Canceled);
    }

    #[test]
    fn test_different_context_reassign() {
        let dialogs = MockDialogs::new().with_choices(vec![Choice::Reassign]);
        let result = assign_context(&request("Build", "panetab2", "mat"), bound_config(), &dialogs);

        assert_eq!(
            dialogs.prompts()[0].1,
            vec![Choice::Reassign, Choice::Remove, Choice::Cancel]
        );
        assert_eq!(
            result.outcome,
            AssignOutcome::Reassigned {
                previous: Binding::new("panetab1", "obj")
            }
        );
        assert_eq!(
            result.config.binding("Build"),
            Some(&Binding::new("panetab2", "mat"))
        );
        assert_eq!(result.config.nodegraphdesk_map.len(), 1);
        assert!(result.message.contains("reassigned from 'obj' to 'mat'"));
    }

    #[test]
    fn test_different_context_remove() {
        let dialogs = MockDialogs::new().with_choices(vec![Choice::Remove]);
        let result = assign_context(&request("Build", "panetab2", "mat"), bound_config(), &dialogs);

        assert!(matches!(result.outcome, AssignOutcome::Removed { .. }));
        assert!(result.config.nodegraphdesk_map.is_empty());
        assert_eq!(result.icon, "NETWORKS_obj");
    }

    #[test]
    fn test_different_context_cancel() {
        let dialogs = MockDialogs::new().with_choices(vec![Choice::Cancel]);
        let config = bound_config();
        let result = assign_context(&request("Build", "panetab2", "mat"), config.clone(), &dialogs);

        assert_eq!(result.outcome, AssignOutcome::Canceled);
        assert_eq!(result.config, config);
    }

    #[test]
    fn test_repeated_assign_leads_to_remove_dialog() {
        let dialogs = MockDialogs::new().with_choices(vec![Choice::Cancel]);
        let first = assign_context(
            &request("Shading", "panetab3", "mat"),
            Configuration::new(),
            &dialogs,
        );
        let second = assign_context(&request("Shading", "panetab3", "mat"), first.config, &dialogs);

        assert_eq!(first.outcome, AssignOutcome::Assigned);
        assert_eq!(second.outcome, AssignOutcome::Canceled);
        assert_eq!(dialogs.prompts()[0].1, vec![Choice::Remove, Choice::Cancel]);
    }

    #[test]
    fn test_conflicts_are_reported_not_deduplicated() {
        let dialogs = MockDialogs::new();
        let result = assign_context(
            &request("Layout", "panetab5", "scene"),
            bound_config(),
            &dialogs,
        );

        assert_eq!(result.outcome, AssignOutcome::Assigned);
        assert_eq!(result.conflicts, vec!["Build".to_string()]);
        assert!(result.message.contains("Also assigned to: Build."));
        assert_eq!(result.config.nodegraphdesk_map.len(), 2);
    }

    #[test]
    fn test_assigned_desktop_keeps_insertion_order() {
        let dialogs = MockDialogs::new();
        let result = assign_context(
            &request("Comp", "panetab4", "img"),
            bound_config(),
            &dialogs,
        );
        assert_eq!(
            result.config.nodegraphdesk_map.keys().collect::<Vec<_>>(),
            vec!["Build", "Comp"]
        );
    }

    #[test]
    fn test_clear_mapping_confirmed() {
        let mut config = bound_config();
        config.assign_hotkey = "alt-d".to_string();
        let dialogs = MockDialogs::new().with_confirm(true);

        let result = clear_mapping(config.clone(), &dialogs);

        assert!(result.cleared);
        assert!(result.config.nodegraphdesk_map.is_empty());
        assert_eq!(result.config.assign_hotkey, "alt-d");
        assert_eq!(result.config.alias_map, config.alias_map);
        assert_eq!(dialogs.confirms().len(), 1);
    }

    #[test]
    fn test_clear_mapping_canceled() {
        let config = bound_config();
        let dialogs = MockDialogs::new().with_confirm(false);

        let result = clear_mapping(config.clone(), &dialogs);

        assert!(!result.cleared);
        assert_eq!(result.message, "Canceled");
        assert_eq!(result.config, config);
    }
}
