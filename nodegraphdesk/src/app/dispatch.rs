use nodegraphdesk_proto::UiEvent;

use crate::platform::{Dialogs, HostManipulator, HostSystem};
use crate::store::MappingStore;

use super::handlers::{ContextChangeHandler, HotkeyHandler};

/// Host ports handed to every handler for one event.
#[derive(Clone, Copy)]
pub struct HostContext<'a> {
    pub system: &'a dyn HostSystem,
    pub dialogs: &'a dyn Dialogs,
    pub manipulator: &'a dyn HostManipulator,
    pub store: &'a dyn MappingStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// One link in the handler chain.
pub trait EventHandler {
    fn handle(&self, event: &UiEvent, ctx: &HostContext<'_>) -> Propagation;
}

/// Runs handlers in registration order until one stops propagation.
/// The host's own editor handler is registered last so it sees every event
/// nodegraphdesk does not consume.
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher with the hotkey and context-change handlers registered.
    pub fn with_default_handlers() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(HotkeyHandler);
        dispatcher.register(ContextChangeHandler);
        dispatcher
    }

    pub fn register(&mut self, handler: impl EventHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn dispatch(&self, event: &UiEvent, ctx: &HostContext<'_>) -> Propagation {
        for (index, handler) in self.handlers.iter().enumerate() {
            if handler.handle(event, ctx) == Propagation::Stop {
                tracing::debug!("Handler {} stopped propagation of {:?}", index, event);
                return Propagation::Stop;
            }
        }
        Propagation::Continue
    }
}
