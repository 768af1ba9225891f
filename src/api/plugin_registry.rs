use indexmap::IndexMap;
use tracing::debug;

use crate::error::{TimelineError, TimelineResult};
use crate::extensions::{AttachContext, Hook, ListenerList, TimelinePlugin};
use crate::interaction::InputKind;
use crate::render::Renderer;

use super::Timeline;

pub(super) struct PluginEntry {
    pub(super) plugin: Box<dyn TimelinePlugin>,
    pub(super) listeners: ListenerList,
}

/// Attached plugins keyed by id, in registration order.
#[derive(Default)]
pub(super) struct PluginRegistry {
    pub(super) entries: IndexMap<String, PluginEntry>,
    pub(super) next_listener_id: u64,
}

impl<R: Renderer> Timeline<R> {
    /// Registers a plugin with unique identifier and runs its `construct`
    /// hook.
    ///
    /// A failing `construct` is logged; the plugin stays attached.
    pub fn register_plugin(&mut self, plugin: Box<dyn TimelinePlugin>) -> TimelineResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(TimelineError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.registry.entries.contains_key(&plugin_id) {
            return Err(TimelineError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }

        let mut entry = PluginEntry {
            plugin,
            listeners: ListenerList::new(),
        };
        if entry.plugin.hooks().contains(Hook::Construct) {
            let clipboard_available = self.clipboard_available();
            let mut ctx = AttachContext::new(
                &self.chart,
                &mut self.overlay,
                clipboard_available,
                &mut self.registry.next_listener_id,
                &mut entry.listeners,
            );
            let result = entry.plugin.construct(&mut ctx);
            log_hook_failure(&plugin_id, Hook::Construct.name(), result);
        }

        debug!(
            plugin = %plugin_id,
            listeners = entry.listeners.len(),
            "plugin registered"
        );
        self.registry.entries.insert(plugin_id, entry);
        Ok(())
    }

    /// Unregisters a plugin by id, running its `destroy` hook and releasing
    /// its listeners. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let Some(mut entry) = self.registry.entries.shift_remove(plugin_id) else {
            return false;
        };
        self.destroy_entry(plugin_id, &mut entry);
        true
    }

    /// Detaches every plugin in registration order.
    pub fn detach_all(&mut self) {
        let entries = std::mem::take(&mut self.registry.entries);
        for (plugin_id, mut entry) in entries {
            self.destroy_entry(&plugin_id, &mut entry);
        }
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.registry.entries.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.registry.entries.contains_key(plugin_id)
    }

    /// Plugin ids in registration (and therefore dispatch) order.
    #[must_use]
    pub fn plugin_ids(&self) -> Vec<&str> {
        self.registry.entries.keys().map(String::as_str).collect()
    }

    /// Installed listeners for `kind` across all plugins.
    #[must_use]
    pub fn listener_count(&self, kind: InputKind) -> usize {
        self.registry
            .entries
            .values()
            .flat_map(|entry| entry.listeners.iter())
            .filter(|listener| listener.kind == kind)
            .count()
    }
}

pub(super) fn log_hook_failure<E: std::fmt::Display>(
    plugin_id: &str,
    hook: &str,
    result: Result<(), E>,
) {
    if let Err(err) = result {
        tracing::warn!(plugin = %plugin_id, hook, error = %err, "plugin hook failed");
    }
}
