use serde::{Deserialize, Serialize};

use crate::OrderedMap;

/// Desktop name -> bound pane and context.
pub type DeskMap = OrderedMap<Binding>;

/// Canonical type name -> alias type name.
pub type AliasMap = OrderedMap<String>;

/// A desktop's binding: the pane that drives it and the context it shows.
/// Persisted as a two-element array `[pane_name, context_type]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Binding {
    pub pane_name: String,
    pub context_type: String,
}

impl Binding {
    pub fn new(pane_name: impl Into<String>, context_type: impl Into<String>) -> Self {
        Self {
            pane_name: pane_name.into(),
            context_type: context_type.into(),
        }
    }
}

impl From<(String, String)> for Binding {
    fn from((pane_name, context_type): (String, String)) -> Self {
        Self {
            pane_name,
            context_type,
        }
    }
}

impl From<Binding> for (String, String) {
    fn from(binding: Binding) -> Self {
        (binding.pane_name, binding.context_type)
    }
}

/// The persisted configuration document.
///
/// Every field falls back to its default when absent, so a document written
/// by an older release still loads. Keys this type does not know about are
/// kept in `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub assign_hotkey: String,
    pub clear_mapping_hotkey: String,
    pub alias_mapping: bool,
    pub alias_map: AliasMap,
    pub arbitrary_nodegraph_change: bool,
    /// Map subnetwork paths onto a context by matching their last segment.
    pub subnetwork_mapping: bool,
    /// Context -> substring pattern tested against the last path segment.
    pub subnetwork_context_map: OrderedMap<String>,
    pub nodegraphdesk_map: DeskMap,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binding(&self, desktop: &str) -> Option<&Binding> {
        self.nodegraphdesk_map.get(desktop)
    }

    pub fn is_assign_hotkey(&self, key: &str) -> bool {
        !self.assign_hotkey.is_empty() && self.assign_hotkey == key
    }

    pub fn is_clear_mapping_hotkey(&self, key: &str) -> bool {
        !self.clear_mapping_hotkey.is_empty() && self.clear_mapping_hotkey == key
    }

    /// Declare `alias` interchangeable with `canonical`.
    /// Any existing entry that mentions either name is dropped first so each
    /// name takes part in at most one pair.
    pub fn set_alias(&mut self, canonical: &str, alias: &str) {
        self.remove_alias(canonical);
        self.remove_alias(alias);
        self.alias_map.insert(canonical, alias.to_string());
    }

    /// Remove every pair `name` takes part in, as key or as value.
    pub fn remove_alias(&mut self, name: &str) -> bool {
        let mut removed = self.alias_map.remove(name).is_some();
        while let Some(key) = self.alias_map.key_of(&name.to_string()).map(str::to_string) {
            self.alias_map.remove(&key);
            removed = true;
        }
        removed
    }
}
