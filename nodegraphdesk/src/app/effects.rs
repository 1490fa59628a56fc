use crate::effect::Effect;
use crate::error::StoreError;
use crate::platform::HostManipulator;
use crate::store::MappingStore;

/// Execute side effects in order.
/// A failed save stops execution so no success message follows it.
pub fn execute_effects(
    effects: Vec<Effect>,
    store: &dyn MappingStore,
    manipulator: &dyn HostManipulator,
) -> Result<(), StoreError> {
    for effect in effects {
        match effect {
            Effect::SaveConfig(config) => {
                store.save(&config)?;
            }
            Effect::SetActiveDesktop { name } => {
                tracing::info!("Switching to desktop {}", name);
                manipulator.set_active_desktop(&name);
            }
            Effect::SetPanePath { pane_name, path } => {
                tracing::debug!("Setting pane {} to {}", pane_name, path);
                manipulator.set_pane_path(&pane_name, &path);
            }
            Effect::ShowMessage {
                icon,
                text,
                duration_seconds,
            } => {
                manipulator.show_transient_message(&icon, &text, duration_seconds);
            }
        }
    }
    Ok(())
}
