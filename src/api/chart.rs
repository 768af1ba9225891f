use crate::core::{ChartLayout, DataPoint, LinearScale, PixelPoint, Rect};
use crate::error::TimelineResult;
use crate::interaction::{CursorInfo, InputState};
use crate::locator::{CoordinateTransform, LocatorOptions, NearestPoint, find_nearest};

use super::TimelineConfig;

/// Chart state as plugins see it.
///
/// The host owns and mutates it; hooks only get shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    x_label: String,
    y_label: String,
    layout: ChartLayout,
    x_scale: LinearScale,
    y_scale: LinearScale,
    points: Vec<DataPoint>,
    input: InputState,
    locator: LocatorOptions,
}

impl Chart {
    pub(crate) fn from_config(config: &TimelineConfig) -> TimelineResult<Self> {
        let layout = config.layout();
        layout.validate()?;
        Ok(Self {
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            layout,
            x_scale: LinearScale::new(config.time_start, config.time_end)?,
            y_scale: LinearScale::new(config.value_min, config.value_max)?,
            points: Vec::new(),
            input: InputState::default(),
            locator: config.locator,
        })
    }

    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn locator_options(&self) -> LocatorOptions {
        self.locator
    }

    #[must_use]
    pub fn width_without_padding(&self) -> f64 {
        self.layout.width_without_padding()
    }

    #[must_use]
    pub fn left_padding(&self) -> f64 {
        self.layout.left_padding()
    }

    /// Canvas bounds in viewport coordinates.
    #[must_use]
    pub fn canvas_rect(&self) -> Rect {
        self.layout.canvas_rect()
    }

    /// Plot area in chart-local coordinates.
    #[must_use]
    pub fn plot_rect(&self) -> Rect {
        self.layout.plot_rect()
    }

    /// Cursor in chart-local pixels, derived from the last pointer position.
    #[must_use]
    pub fn cursor(&self) -> CursorInfo {
        let Some(pointer) = self.input.pointer() else {
            return CursorInfo::default();
        };
        let local = self.layout.to_chart_local(pointer);
        CursorInfo {
            over_chart: self.plot_rect().contains(local.x, local.y),
            chart_x: local.x,
            chart_y: local.y,
        }
    }

    pub fn pixel_to_data(&self, pixel: PixelPoint) -> TimelineResult<DataPoint> {
        Ok(DataPoint::new(
            self.x_scale.pixel_to_domain(pixel.x, self.layout.x_range())?,
            self.y_scale.pixel_to_domain(pixel.y, self.layout.y_range())?,
        ))
    }

    /// Nearest rendered point to a chart-local pixel position, using the
    /// chart's locator options.
    #[must_use]
    pub fn nearest_point(&self, pointer: PixelPoint) -> Option<NearestPoint> {
        self.nearest_point_with(pointer, self.locator)
    }

    #[must_use]
    pub fn nearest_point_with(
        &self,
        pointer: PixelPoint,
        options: LocatorOptions,
    ) -> Option<NearestPoint> {
        find_nearest(&self.points, self, pointer, options)
    }

    pub(crate) fn set_points(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }

    pub(crate) fn push_point(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub(crate) fn set_layout(&mut self, layout: ChartLayout) {
        self.layout = layout;
    }

    pub(crate) fn set_scales(&mut self, x_scale: LinearScale, y_scale: LinearScale) {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
    }

    pub(crate) fn set_locator_options(&mut self, options: LocatorOptions) {
        self.locator = options;
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }
}

impl CoordinateTransform for Chart {
    fn data_to_pixel(&self, point: DataPoint) -> TimelineResult<PixelPoint> {
        Ok(PixelPoint::new(
            self.x_scale.domain_to_pixel(point.x, self.layout.x_range())?,
            self.y_scale.domain_to_pixel(point.y, self.layout.y_range())?,
        ))
    }
}
