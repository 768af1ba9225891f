use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;

/// Input events a plugin can listen for, reported in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    DoubleClicked { x: f64, y: f64 },
}

impl InputEvent {
    #[must_use]
    pub fn kind(self) -> InputKind {
        match self {
            Self::PointerMoved { .. } => InputKind::PointerMove,
            Self::PointerLeft => InputKind::PointerLeave,
            Self::DoubleClicked { .. } => InputKind::DoubleClick,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    PointerMove,
    PointerLeave,
    DoubleClick,
}

impl InputKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PointerMove => "pointermove",
            Self::PointerLeave => "pointerleave",
            Self::DoubleClick => "dblclick",
        }
    }
}

/// Cursor snapshot in chart-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorInfo {
    /// Pointer is over the plot area (canvas minus padding).
    pub over_chart: bool,
    pub chart_x: f64,
    pub chart_y: f64,
}

impl Default for CursorInfo {
    fn default() -> Self {
        Self {
            over_chart: false,
            chart_x: -1.0,
            chart_y: -1.0,
        }
    }
}

/// Pointer state owned by one chart attachment.
///
/// Every host keeps its own instance, so several charts can track their
/// pointers independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputState {
    pointer: Option<PixelPoint>,
    last_double_click: Option<PixelPoint>,
    pointer_events: u64,
}

impl InputState {
    /// Last known pointer position in viewport coordinates.
    #[must_use]
    pub fn pointer(self) -> Option<PixelPoint> {
        self.pointer
    }

    #[must_use]
    pub fn last_double_click(self) -> Option<PixelPoint> {
        self.last_double_click
    }

    /// Pointer moves seen so far; not coalesced.
    #[must_use]
    pub fn pointer_events(self) -> u64 {
        self.pointer_events
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer = Some(PixelPoint::new(x, y));
                self.pointer_events += 1;
            }
            InputEvent::PointerLeft => {
                self.pointer = None;
            }
            InputEvent::DoubleClicked { x, y } => {
                self.last_double_click = Some(PixelPoint::new(x, y));
            }
        }
    }
}
