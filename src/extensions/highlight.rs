use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::error::PluginResult;
use crate::render::{CirclePrimitive, Color, LinePrimitive};

use super::{DrawContext, Hook, HookSet, TimelinePlugin};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// Ring radius; also the half-length of the crosshair arms.
    pub radius_px: f64,
    pub line_width_px: f64,
    pub color: Color,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            radius_px: 10.0,
            line_width_px: 1.2,
            color: Color::BLACK,
        }
    }
}

/// Draws a ring and crosshair on the point nearest to the cursor while the
/// cursor is over the plot area.
pub struct HighlightNearestPointPlugin {
    id: String,
    style: HighlightStyle,
}

impl HighlightNearestPointPlugin {
    pub const DEFAULT_ID: &'static str = "highlight-nearest-point";

    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Self::DEFAULT_ID.to_owned(),
            style: HighlightStyle::default(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: HighlightStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn style(&self) -> HighlightStyle {
        self.style
    }
}

impl Default for HighlightNearestPointPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelinePlugin for HighlightNearestPointPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn hooks(&self) -> HookSet {
        HookSet::EMPTY.with(Hook::DrawAfter)
    }

    fn draw_after(&mut self, ctx: &mut DrawContext<'_>) -> PluginResult<()> {
        let chart = ctx.chart();
        let cursor = chart.cursor();
        if !cursor.over_chart {
            return Ok(());
        }
        let Some(point) = chart.nearest_point(PixelPoint::new(cursor.chart_x, cursor.chart_y))
        else {
            return Ok(());
        };

        let HighlightStyle {
            radius_px: r,
            line_width_px: width,
            color,
        } = self.style;
        let (x, y) = (point.render_x, point.render_y);

        let canvas = ctx.canvas();
        canvas.stroke_circle(CirclePrimitive::new(x, y, r, width, color));
        canvas.stroke_line(LinePrimitive::new(x, y - r, x, y + r, width, color));
        canvas.stroke_line(LinePrimitive::new(x - r, y, x + r, y, width, color));
        Ok(())
    }
}
