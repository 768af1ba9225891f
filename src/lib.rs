//! timeline-plugins: interaction plugins for time-series charts.
//!
//! A [`Timeline`] owns one chart attachment and runs registered plugins
//! through their `construct`, `draw:after` and `destroy` hooks. The bundled
//! plugins highlight the data point nearest to the pointer, show it in a
//! floating popup and copy it to the clipboard on double click.

pub mod api;
pub mod clipboard;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod locator;
pub mod overlay;
pub mod render;
pub mod telemetry;

pub use api::{Chart, Timeline, TimelineConfig};
pub use error::{PluginError, PluginResult, TimelineError, TimelineResult};
pub use locator::{DistanceMetric, LocatorOptions, NearestPoint, find_nearest};
