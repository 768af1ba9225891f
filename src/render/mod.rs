mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{CirclePrimitive, Color, DrawCommand, LinePrimitive};

use crate::core::Viewport;
use crate::error::TimelineResult;

/// Shared 2D drawing target handed to `draw_after` hooks.
///
/// It already holds the host's content for the current pass and is never
/// cleared between plugins.
pub trait Canvas {
    fn viewport(&self) -> Viewport;

    fn draw(&mut self, command: DrawCommand);

    fn stroke_line(&mut self, line: LinePrimitive) {
        self.draw(DrawCommand::Line(line));
    }

    fn stroke_circle(&mut self, circle: CirclePrimitive) {
        self.draw(DrawCommand::Circle(circle));
    }
}

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` after every plugin has
/// drawn into it.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
