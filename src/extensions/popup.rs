use serde::{Deserialize, Serialize};

use crate::api::Chart;
use crate::core::Rect;
use crate::error::{PluginError, PluginResult};
use crate::locator::NearestPoint;
use crate::overlay::ElementId;

use super::format::{ValueFormatter, default_formatter};
use super::{AttachContext, DrawContext, Hook, HookContext, HookSet, TimelinePlugin};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupConfig {
    pub class_name: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            class_name: "timeline-hover-text".to_owned(),
        }
    }
}

/// Left edge of the popup in viewport coordinates.
///
/// With the cursor in the right half of the plot the popup hugs the plot's
/// left edge; otherwise it hugs the canvas right edge (the extra pixel keeps
/// its border off the canvas border).
#[must_use]
pub fn popup_left(
    canvas_rect: Rect,
    chart_x: f64,
    width_without_padding: f64,
    left_padding: f64,
    popup_width: f64,
) -> f64 {
    if chart_x > width_without_padding / 2.0 {
        canvas_rect.x + left_padding
    } else {
        canvas_rect.right() - popup_width - 1.0
    }
}

/// Shows a text element describing the point nearest to the pointer.
pub struct NearestPointPopupPlugin {
    id: String,
    config: PopupConfig,
    format_x: ValueFormatter,
    format_y: ValueFormatter,
    element: Option<ElementId>,
}

impl NearestPointPopupPlugin {
    pub const DEFAULT_ID: &'static str = "nearest-point-popup";

    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Self::DEFAULT_ID.to_owned(),
            config: PopupConfig::default(),
            format_x: default_formatter(),
            format_y: default_formatter(),
            element: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: PopupConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_x_formatter(mut self, format_x: impl Fn(f64) -> String + 'static) -> Self {
        self.format_x = Box::new(format_x);
        self
    }

    #[must_use]
    pub fn with_y_formatter(mut self, format_y: impl Fn(f64) -> String + 'static) -> Self {
        self.format_y = Box::new(format_y);
        self
    }

    /// Overlay element owned by this plugin, once constructed.
    #[must_use]
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    #[must_use]
    pub fn popup_text(&self, chart: &Chart, point: &NearestPoint) -> String {
        format!(
            "{}: {}\n{}: {}",
            chart.y_label(),
            (self.format_y)(point.y),
            chart.x_label(),
            (self.format_x)(point.x)
        )
    }
}

impl Default for NearestPointPopupPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelinePlugin for NearestPointPopupPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn hooks(&self) -> HookSet {
        HookSet::EMPTY
            .with(Hook::Construct)
            .with(Hook::DrawAfter)
            .with(Hook::Destroy)
    }

    fn construct(&mut self, ctx: &mut AttachContext<'_>) -> PluginResult<()> {
        self.element = Some(ctx.overlay().create_element(self.config.class_name.clone()));
        Ok(())
    }

    fn draw_after(&mut self, ctx: &mut DrawContext<'_>) -> PluginResult<()> {
        let id = self.element.ok_or(PluginError::MissingElement(None))?;
        let chart = ctx.chart();
        let rect = chart.canvas_rect();

        let hit = chart
            .input()
            .pointer()
            .filter(|pointer| rect.contains(pointer.x, pointer.y))
            .and_then(|pointer| {
                let local = chart.layout().to_chart_local(pointer);
                chart.nearest_point(local).map(|point| (local, point))
            });

        let overlay = ctx.overlay();
        let metrics = overlay.metrics();
        let element = overlay
            .element_mut(id)
            .ok_or(PluginError::MissingElement(Some(id)))?;

        let Some((local, point)) = hit else {
            element.visible = false;
            return Ok(());
        };

        let text = self.popup_text(chart, &point);
        element.left = popup_left(
            rect,
            local.x,
            chart.width_without_padding(),
            chart.left_padding(),
            metrics.client_width(&text),
        );
        element.top = rect.y;
        element.text = text;
        element.visible = true;
        Ok(())
    }

    fn destroy(&mut self, ctx: &mut HookContext<'_>) -> PluginResult<()> {
        if let Some(id) = self.element.take() {
            ctx.overlay().remove_element(id);
        }
        Ok(())
    }
}
