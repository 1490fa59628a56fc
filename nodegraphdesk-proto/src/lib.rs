pub mod command;
pub mod config;
pub mod event;
pub mod ordered_map;

pub use command::{Choice, HostCommand};
pub use config::{AliasMap, Binding, Configuration, DeskMap};
pub use event::UiEvent;
pub use ordered_map::OrderedMap;
