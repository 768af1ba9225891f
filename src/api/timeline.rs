use tracing::{debug, trace};

use crate::clipboard::Clipboard;
use crate::core::{ChartLayout, DataPoint, LinearScale, PixelPoint, Viewport};
use crate::error::TimelineResult;
use crate::interaction::InputEvent;
use crate::locator::{CoordinateTransform, LocatorOptions};
use crate::overlay::OverlayContainer;
use crate::render::{Canvas, Color, LinePrimitive, RenderFrame, Renderer};

use super::{Chart, PluginRegistry, TimelineConfig};

const SERIES_STROKE_WIDTH: f64 = 2.0;
const SERIES_COLOR: Color = Color::rgb(0.25, 0.63, 1.0);

/// One chart attachment: chart state, overlay container, clipboard sink,
/// plugins and the backend that receives finished frames.
///
/// All calls run on the caller's thread. Hooks fire synchronously in plugin
/// registration order.
pub struct Timeline<R: Renderer> {
    pub(super) renderer: R,
    pub(super) chart: Chart,
    pub(super) overlay: OverlayContainer,
    pub(super) clipboard: Option<Box<dyn Clipboard>>,
    pub(super) registry: PluginRegistry,
}

impl<R: Renderer> Timeline<R> {
    pub fn new(renderer: R, config: TimelineConfig) -> TimelineResult<Self> {
        let chart = Chart::from_config(&config)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "timeline attached"
        );
        Ok(Self {
            renderer,
            chart,
            overlay: OverlayContainer::new(config.text_metrics),
            clipboard: None,
            registry: PluginRegistry::default(),
        })
    }

    /// Installs a clipboard sink. Plugins probe it when constructed, so set
    /// it before registering them.
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Some(Box::new(clipboard));
        self
    }

    pub fn set_clipboard(&mut self, clipboard: Option<Box<dyn Clipboard>>) {
        self.clipboard = clipboard;
    }

    #[must_use]
    pub fn clipboard_available(&self) -> bool {
        self.clipboard
            .as_ref()
            .is_some_and(|clipboard| clipboard.is_available())
    }

    #[must_use]
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    #[must_use]
    pub fn overlay(&self) -> &OverlayContainer {
        &self.overlay
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Replaces the plotted samples.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        debug!(count = points.len(), "set data points");
        self.chart.set_points(points);
    }

    pub fn append_point(&mut self, point: DataPoint) {
        self.chart.push_point(point);
        trace!(count = self.chart.points().len(), "append data point");
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        self.chart.points()
    }

    /// Replaces both axis domains; nothing changes on error.
    pub fn set_domains(&mut self, time: (f64, f64), value: (f64, f64)) -> TimelineResult<()> {
        let x_scale = LinearScale::new(time.0, time.1)?;
        let y_scale = LinearScale::new(value.0, value.1)?;
        self.chart.set_scales(x_scale, y_scale);
        Ok(())
    }

    pub fn set_locator_options(&mut self, options: LocatorOptions) {
        self.chart.set_locator_options(options);
    }

    pub fn resize(&mut self, viewport: Viewport) -> TimelineResult<()> {
        let layout = ChartLayout {
            viewport,
            ..self.chart.layout()
        };
        self.apply_layout(layout)
    }

    /// Moves the canvas within the viewport (for example after the host
    /// page scrolled or re-laid out).
    pub fn set_canvas_origin(&mut self, x: f64, y: f64) -> TimelineResult<()> {
        let layout = self.chart.layout().with_canvas_origin(x, y);
        self.apply_layout(layout)
    }

    fn apply_layout(&mut self, layout: ChartLayout) -> TimelineResult<()> {
        layout.validate()?;
        self.chart.set_layout(layout);
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.handle_input(InputEvent::PointerMoved { x, y });
    }

    pub fn pointer_leave(&mut self) {
        self.handle_input(InputEvent::PointerLeft);
    }

    pub fn double_click(&mut self, x: f64, y: f64) {
        self.handle_input(InputEvent::DoubleClicked { x, y });
    }

    fn handle_input(&mut self, event: InputEvent) {
        self.chart.input_mut().apply(event);
        self.dispatch_input(event);
    }

    /// Paints the series, then lets every plugin draw over it.
    #[must_use]
    pub fn build_render_frame(&mut self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.chart.layout().viewport);
        self.paint_series(&mut frame);
        self.dispatch_draw_after(&mut frame);
        frame
    }

    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.build_render_frame();
        trace!(commands = frame.commands.len(), "render frame");
        self.renderer.render(&frame)
    }

    fn paint_series(&self, canvas: &mut dyn Canvas) {
        let projected: Vec<PixelPoint> = self
            .chart
            .points()
            .iter()
            .filter_map(|point| self.chart.data_to_pixel(*point).ok())
            .collect();
        for pair in projected.windows(2) {
            canvas.stroke_line(LinePrimitive::new(
                pair[0].x,
                pair[0].y,
                pair[1].x,
                pair[1].y,
                SERIES_STROKE_WIDTH,
                SERIES_COLOR,
            ));
        }
    }
}
