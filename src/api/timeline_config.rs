use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, Padding, PixelPoint, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::locator::LocatorOptions;
use crate::overlay::TextMetrics;

/// Public host bootstrap configuration.
///
/// Serializable so embedding applications can persist chart setup next to
/// their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: Padding,
    /// Canvas top-left corner in viewport coordinates.
    #[serde(default = "default_canvas_origin")]
    pub canvas_origin: PixelPoint,
    pub time_start: f64,
    pub time_end: f64,
    #[serde(default = "default_value_min")]
    pub value_min: f64,
    #[serde(default = "default_value_max")]
    pub value_max: f64,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default)]
    pub locator: LocatorOptions,
    #[serde(default)]
    pub text_metrics: TextMetrics,
}

impl TimelineConfig {
    /// Creates a minimal config with default value range and labels.
    #[must_use]
    pub fn new(viewport: Viewport, time_start: f64, time_end: f64) -> Self {
        Self {
            viewport,
            padding: Padding::default(),
            canvas_origin: default_canvas_origin(),
            time_start,
            time_end,
            value_min: default_value_min(),
            value_max: default_value_max(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            locator: LocatorOptions::default(),
            text_metrics: TextMetrics::default(),
        }
    }

    #[must_use]
    pub fn with_value_domain(mut self, value_min: f64, value_max: f64) -> Self {
        self.value_min = value_min;
        self.value_max = value_max;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_canvas_origin(mut self, x: f64, y: f64) -> Self {
        self.canvas_origin = PixelPoint::new(x, y);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub fn with_locator(mut self, locator: LocatorOptions) -> Self {
        self.locator = locator;
        self
    }

    #[must_use]
    pub fn with_text_metrics(mut self, text_metrics: TextMetrics) -> Self {
        self.text_metrics = text_metrics;
        self
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        ChartLayout {
            viewport: self.viewport,
            padding: self.padding,
            canvas_origin: self.canvas_origin,
        }
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize timeline config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse timeline config json: {e}"))
        })
    }
}

fn default_canvas_origin() -> PixelPoint {
    PixelPoint::new(0.0, 0.0)
}

fn default_value_min() -> f64 {
    0.0
}

fn default_value_max() -> f64 {
    1.0
}

fn default_x_label() -> String {
    "Time".to_owned()
}

fn default_y_label() -> String {
    "Value".to_owned()
}
