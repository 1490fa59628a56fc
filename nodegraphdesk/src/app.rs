mod dispatch;
mod effects;
mod handlers;

pub use dispatch::{Dispatcher, EventHandler, HostContext, Propagation};
pub use effects::execute_effects;
pub use handlers::{
    apply_context_change, assign_under_cursor, clear_all, ContextChangeHandler, HotkeyHandler,
};
