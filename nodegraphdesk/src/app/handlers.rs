use nodegraphdesk_proto::{Configuration, UiEvent};

use crate::core::{
    assign_context, clear_mapping, resolve_context_change, subnetwork_context, top_level_context,
    Action, AssignRequest, ContextChange, ICON_ERROR,
};
use crate::effect::{Effect, MESSAGE_DURATION_SECS};
use crate::error::StoreError;

use super::dispatch::{EventHandler, HostContext, Propagation};
use super::effects::execute_effects;

/// Consumes the assign and clear-mapping hotkeys.
pub struct HotkeyHandler;

impl EventHandler for HotkeyHandler {
    fn handle(&self, event: &UiEvent, ctx: &HostContext<'_>) -> Propagation {
        let UiEvent::KeyPress { key } = event else {
            return Propagation::Continue;
        };
        // Any key may arrive here, so an unreadable store is only logged.
        let config = match ctx.store.load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring key {}: {}", key, e);
                return Propagation::Continue;
            }
        };

        if config.is_assign_hotkey(key) {
            let effects = assign_effects(ctx, config);
            if let Err(e) = apply(ctx, effects) {
                tracing::debug!("Assign hotkey failed: {}", e);
            }
            Propagation::Stop
        } else if config.is_clear_mapping_hotkey(key) {
            let effects = clear_effects(ctx, config);
            if let Err(e) = apply(ctx, effects) {
                tracing::debug!("Clear mapping hotkey failed: {}", e);
            }
            Propagation::Stop
        } else {
            Propagation::Continue
        }
    }
}

/// Switches desktops on context change. Never consumes the event: the host
/// editor still has to process it.
pub struct ContextChangeHandler;

impl EventHandler for ContextChangeHandler {
    fn handle(&self, event: &UiEvent, ctx: &HostContext<'_>) -> Propagation {
        if let UiEvent::ContextChanged {
            editor_pane_name,
            old_path,
            new_path,
        } = event
        {
            if let Err(e) = apply_context_change(ctx, editor_pane_name, old_path, new_path) {
                tracing::debug!("Context change on {} failed: {}", editor_pane_name, e);
            }
        }
        Propagation::Continue
    }
}

/// Bind the pane under the cursor to the current desktop, or rebind/unbind
/// after asking. A no-op without a pane under the cursor.
pub fn assign_under_cursor(ctx: &HostContext<'_>) -> Result<(), StoreError> {
    let config = load(ctx)?;
    let effects = assign_effects(ctx, config);
    apply(ctx, effects)
}

/// Drop every binding after confirmation.
pub fn clear_all(ctx: &HostContext<'_>) -> Result<(), StoreError> {
    let config = load(ctx)?;
    let effects = clear_effects(ctx, config);
    apply(ctx, effects)
}

pub fn apply_context_change(
    ctx: &HostContext<'_>,
    editor_pane_name: &str,
    old_path: &str,
    new_path: &str,
) -> Result<(), StoreError> {
    let config = load(ctx)?;
    let effects = context_change_effects(ctx, &config, editor_pane_name, old_path, new_path);
    apply(ctx, effects)
}

fn assign_effects(ctx: &HostContext<'_>, config: Configuration) -> Vec<Effect> {
    let Some(pane) = ctx.system.pane_under_cursor() else {
        tracing::debug!("No network editor under the cursor");
        return Vec::new();
    };
    let desktop = ctx.system.current_desktop_name();
    let context_type = context_at(ctx, &pane.path, &config);
    if context_type.is_empty() {
        tracing::warn!("No context at {} in pane {}", pane.path, pane.name);
        return Vec::new();
    }

    let request = AssignRequest {
        desktop: &desktop,
        pane_name: &pane.name,
        context_type: &context_type,
    };
    let assignment = assign_context(&request, config, ctx.dialogs);

    let mut effects = Vec::new();
    if assignment.is_mutation() {
        effects.push(Effect::SaveConfig(assignment.config));
    }
    effects.push(Effect::message(assignment.icon, assignment.message));
    effects
}

fn clear_effects(ctx: &HostContext<'_>, config: Configuration) -> Vec<Effect> {
    let clearing = clear_mapping(config, ctx.dialogs);

    let mut effects = Vec::new();
    if clearing.cleared {
        effects.push(Effect::SaveConfig(clearing.config));
    }
    effects.push(Effect::message(clearing.icon, clearing.message));
    effects
}

fn context_change_effects(
    ctx: &HostContext<'_>,
    config: &Configuration,
    editor_pane_name: &str,
    old_path: &str,
    new_path: &str,
) -> Vec<Effect> {
    let current_desktop = ctx.system.current_desktop_name();
    let node_type = context_at(ctx, new_path, config);

    let change = ContextChange {
        editor_pane_name,
        old_path,
        new_path,
        current_desktop: &current_desktop,
    };

    match resolve_context_change(&change, &node_type, config) {
        Action::None => Vec::new(),
        Action::SwitchDesktop {
            desktop,
            pane_name,
            path,
        } => {
            if !ctx.system.desktop_exists(&desktop) {
                tracing::warn!(
                    "Desktop {} is bound to context {} but no longer exists",
                    desktop,
                    node_type
                );
                return Vec::new();
            }
            vec![
                Effect::SetActiveDesktop { name: desktop },
                Effect::SetPanePath { pane_name, path },
            ]
        }
    }
}

/// Subnetwork mapping first, then the host's node type, then the path itself.
fn context_at(ctx: &HostContext<'_>, path: &str, config: &Configuration) -> String {
    subnetwork_context(path, config)
        .or_else(|| ctx.system.node_type_of(path))
        .unwrap_or_else(|| top_level_context(path))
}

fn load(ctx: &HostContext<'_>) -> Result<Configuration, StoreError> {
    ctx.store.load().inspect_err(|e| report(ctx, e))
}

fn apply(ctx: &HostContext<'_>, effects: Vec<Effect>) -> Result<(), StoreError> {
    execute_effects(effects, ctx.store, ctx.manipulator).inspect_err(|e| report(ctx, e))
}

fn report(ctx: &HostContext<'_>, err: &StoreError) {
    tracing::error!("{}", err);
    ctx.manipulator
        .show_transient_message(ICON_ERROR, &err.to_string(), MESSAGE_DURATION_SECS);
}
