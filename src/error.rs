use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::overlay::ElementId;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type PluginResult<T> = Result<T, PluginError>;

/// Failure reported by a plugin hook. The host logs it and moves on to the
/// next plugin.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error(transparent)]
    Chart(#[from] TimelineError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("overlay element {0:?} is not attached")]
    MissingElement(Option<ElementId>),
}
