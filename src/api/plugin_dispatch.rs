use tracing::{debug, trace};

use crate::extensions::{DrawContext, Hook, HookContext};
use crate::interaction::InputEvent;
use crate::render::{RenderFrame, Renderer};

use super::Timeline;
use super::plugin_registry::{PluginEntry, log_hook_failure};

impl<R: Renderer> Timeline<R> {
    /// Runs `draw_after` for every plugin that declares it, in registration
    /// order. A failing hook is logged and the next plugin still runs.
    pub(super) fn dispatch_draw_after(&mut self, frame: &mut RenderFrame) {
        let Self {
            chart,
            overlay,
            registry,
            ..
        } = self;
        for (plugin_id, entry) in &mut registry.entries {
            if !entry.plugin.hooks().contains(Hook::DrawAfter) {
                continue;
            }
            let mut ctx = DrawContext::new(&*chart, &mut *frame, &mut *overlay);
            let result = entry.plugin.draw_after(&mut ctx);
            log_hook_failure(plugin_id, Hook::DrawAfter.name(), result);
        }
    }

    /// Delivers `event` once per matching listener.
    pub(super) fn dispatch_input(&mut self, event: InputEvent) {
        let kind = event.kind();
        let Self {
            chart,
            overlay,
            clipboard,
            registry,
            ..
        } = self;
        for (plugin_id, entry) in &mut registry.entries {
            let PluginEntry { plugin, listeners } = entry;
            for listener in listeners.iter().filter(|listener| listener.kind == kind) {
                trace!(
                    plugin = %plugin_id,
                    listener = listener.id.get(),
                    event = kind.as_str(),
                    "dispatch input"
                );
                let mut ctx = HookContext::new(&*chart, &mut *overlay, clipboard.as_mut());
                let result = plugin.on_input(event, &mut ctx);
                log_hook_failure(plugin_id, kind.as_str(), result);
            }
        }
    }

    /// Runs `destroy` when declared, then releases the plugin's listeners.
    pub(super) fn destroy_entry(&mut self, plugin_id: &str, entry: &mut PluginEntry) {
        if entry.plugin.hooks().contains(Hook::Destroy) {
            let mut ctx = HookContext::new(&self.chart, &mut self.overlay, self.clipboard.as_mut());
            let result = entry.plugin.destroy(&mut ctx);
            log_hook_failure(plugin_id, Hook::Destroy.name(), result);
        }
        debug!(
            plugin = %plugin_id,
            listeners = entry.listeners.len(),
            "plugin detached"
        );
        entry.listeners.clear();
    }
}
