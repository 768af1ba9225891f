use serde::{Deserialize, Serialize};

use crate::core::geometry::{Padding, Rect};
use crate::core::scale::PixelRange;
use crate::core::types::{PixelPoint, Viewport};
use crate::error::{TimelineError, TimelineResult};

/// Placement of the chart canvas and its plot area.
///
/// `canvas_origin` is the canvas top-left corner in viewport coordinates, the
/// space input events are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub padding: Padding,
    pub canvas_origin: PixelPoint,
}

impl ChartLayout {
    #[must_use]
    pub fn new(viewport: Viewport, padding: Padding) -> Self {
        Self {
            viewport,
            padding,
            canvas_origin: PixelPoint::new(0.0, 0.0),
        }
    }

    #[must_use]
    pub fn with_canvas_origin(mut self, x: f64, y: f64) -> Self {
        self.canvas_origin = PixelPoint::new(x, y);
        self
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.padding.horizontal() >= u64::from(self.viewport.width)
            || self.padding.vertical() >= u64::from(self.viewport.height)
        {
            return Err(TimelineError::InvalidData(format!(
                "padding {:?} leaves no plot area inside {}x{}",
                self.padding, self.viewport.width, self.viewport.height
            )));
        }
        if !self.canvas_origin.is_finite() {
            return Err(TimelineError::InvalidData(
                "canvas origin must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn width_without_padding(self) -> f64 {
        f64::from(self.viewport.width) - self.padding.horizontal() as f64
    }

    #[must_use]
    pub fn height_without_padding(self) -> f64 {
        f64::from(self.viewport.height) - self.padding.vertical() as f64
    }

    #[must_use]
    pub fn left_padding(self) -> f64 {
        f64::from(self.padding.left)
    }

    /// Canvas bounds in viewport coordinates.
    #[must_use]
    pub fn canvas_rect(self) -> Rect {
        Rect::new(
            self.canvas_origin.x,
            self.canvas_origin.y,
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
        )
    }

    /// Plot area in chart-local coordinates.
    #[must_use]
    pub fn plot_rect(self) -> Rect {
        Rect::new(
            f64::from(self.padding.left),
            f64::from(self.padding.top),
            self.width_without_padding(),
            self.height_without_padding(),
        )
    }

    /// Converts a viewport position into chart-local pixels.
    #[must_use]
    pub fn to_chart_local(self, point: PixelPoint) -> PixelPoint {
        PixelPoint::new(point.x - self.canvas_origin.x, point.y - self.canvas_origin.y)
    }

    #[must_use]
    pub fn x_range(self) -> PixelRange {
        let plot = self.plot_rect();
        PixelRange::new(plot.x, plot.right())
    }

    /// Value axis grows upwards: domain start sits on the plot bottom.
    #[must_use]
    pub fn y_range(self) -> PixelRange {
        let plot = self.plot_rect();
        PixelRange::new(plot.bottom(), plot.y)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartLayout;
    use crate::core::geometry::{Padding, Rect};
    use crate::core::types::{PixelPoint, Viewport};

    #[test]
    fn plot_rect_excludes_padding() {
        let layout = ChartLayout::new(Viewport::new(800, 400), Padding::new(60, 20, 10, 30))
            .with_canvas_origin(15.0, 25.0);

        assert_eq!(layout.width_without_padding(), 720.0);
        assert_eq!(layout.height_without_padding(), 360.0);
        assert_eq!(layout.plot_rect(), Rect::new(60.0, 10.0, 720.0, 360.0));
        assert_eq!(layout.canvas_rect(), Rect::new(15.0, 25.0, 800.0, 400.0));
        assert_eq!(
            layout.to_chart_local(PixelPoint::new(115.0, 30.0)),
            PixelPoint::new(100.0, 5.0)
        );
    }

    #[test]
    fn padding_swallowing_the_canvas_is_rejected() {
        let layout = ChartLayout::new(Viewport::new(100, 100), Padding::new(60, 40, 0, 0));
        assert!(layout.validate().is_err());
        let layout = ChartLayout::new(Viewport::new(0, 100), Padding::uniform(0));
        assert!(layout.validate().is_err());
    }
}
