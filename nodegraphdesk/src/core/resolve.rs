use nodegraphdesk_proto::Configuration;

use super::alias::candidate_types;

/// A pane's context change, seen from the desktop that is active.
#[derive(Debug, Clone, Copy)]
pub struct ContextChange<'a> {
    pub editor_pane_name: &'a str,
    pub old_path: &'a str,
    pub new_path: &'a str,
    pub current_desktop: &'a str,
}

/// What the host should do after a context change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Activate `desktop`, then point `pane_name` at `path`.
    SwitchDesktop {
        desktop: String,
        pane_name: String,
        path: String,
    },
}

/// Decide whether a context change should switch desktops.
///
/// Only a bound desktop reacts, and unless `arbitrary_nodegraph_change` is
/// set only its bound pane may trigger. The first desktop in document order
/// bound to the new context (alias-aware) is the target. Several desktops
/// bound to one context is not rejected here; the earliest simply wins.
/// A target that is the pane already showing the path is not a switch.
pub fn resolve_context_change(
    change: &ContextChange,
    node_type: &str,
    config: &Configuration,
) -> Action {
    let Some(current) = config.binding(change.current_desktop) else {
        return Action::None;
    };

    let candidates = candidate_types(node_type, config);

    if !config.arbitrary_nodegraph_change && current.pane_name != change.editor_pane_name {
        tracing::debug!(
            "Ignoring context change from pane {} (desktop {} is bound to pane {})",
            change.editor_pane_name,
            change.current_desktop,
            current.pane_name
        );
        return Action::None;
    }

    if change.old_path == change.new_path {
        return Action::None;
    }

    let Some((desktop, binding)) = config
        .nodegraphdesk_map
        .iter()
        .find(|(_, binding)| candidates.contains(&binding.context_type))
    else {
        tracing::debug!("No desktop bound to context {:?}", candidates);
        return Action::None;
    };

    if desktop == change.current_desktop && binding.pane_name == change.editor_pane_name {
        tracing::debug!(
            "Context {} already shown by pane {} on desktop {}",
            node_type,
            binding.pane_name,
            desktop
        );
        return Action::None;
    }

    Action::SwitchDesktop {
        desktop: desktop.to_string(),
        pane_name: binding.pane_name.clone(),
        path: change.new_path.to_string(),
    }
}
