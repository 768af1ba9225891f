use tracing::warn;

use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};
use crate::render::{Canvas, CirclePrimitive, DrawCommand, LinePrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Commands are kept in the order they were issued, host content first and
/// then every `draw_after` hook in registration order. Later commands paint
/// over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for command in &self.commands {
            command.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            DrawCommand::Circle(_) => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            DrawCommand::Line(_) => None,
        })
    }
}

impl Canvas for RenderFrame {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Invalid geometry is dropped with a warning instead of failing the
    /// whole pass later in the backend.
    fn draw(&mut self, command: DrawCommand) {
        if let Err(err) = command.validate() {
            warn!(error = %err, "dropping invalid draw command");
            return;
        }
        self.commands.push(command);
    }
}
