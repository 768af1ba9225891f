//! Plugin contract and the interaction plugins built on it.
//!
//! Plugins never reach into the host or into each other; everything they
//! may touch arrives through the hook contexts.

pub mod copy;
pub mod format;
pub mod highlight;
pub mod plugins;
pub mod popup;

pub use copy::{DoubleClickCopyPlugin, clipboard_text};
pub use format::{ValueFormatter, default_formatter, unix_seconds_formatter};
pub use highlight::{HighlightNearestPointPlugin, HighlightStyle};
pub use plugins::{
    AttachContext, DrawContext, Hook, HookContext, HookSet, ListenerId, TimelinePlugin,
};
pub(crate) use plugins::ListenerList;
pub use popup::{NearestPointPopupPlugin, PopupConfig, popup_left};
