//! Host-facing API: chart state, configuration and the plugin runner.

mod chart;
mod plugin_dispatch;
mod plugin_registry;
mod timeline;
mod timeline_config;

pub use chart::Chart;
pub use timeline::Timeline;
pub use timeline_config::TimelineConfig;

use plugin_registry::PluginRegistry;
