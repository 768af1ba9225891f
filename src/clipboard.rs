//! Write-only text clipboard sink.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,

    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

pub trait Clipboard {
    /// Capability probe, checked once when a plugin is constructed.
    fn is_available(&self) -> bool {
        true
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard keeping the last written text.
///
/// Clones share the same buffer, so a host can hand one clone to the chart
/// and read the copied text back through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    state: Rc<RefCell<MemoryClipboardState>>,
}

#[derive(Debug, Default)]
struct MemoryClipboardState {
    contents: Option<String>,
    writes: usize,
    disabled: bool,
}

impl MemoryClipboard {
    /// A clipboard that reports itself unavailable and refuses writes, like a
    /// host without clipboard permission.
    #[must_use]
    pub fn disabled() -> Self {
        let clipboard = Self::default();
        clipboard.state.borrow_mut().disabled = true;
        clipboard
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.state.borrow().contents.clone()
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

impl Clipboard for MemoryClipboard {
    fn is_available(&self) -> bool {
        !self.state.borrow().disabled
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut state = self.state.borrow_mut();
        if state.disabled {
            return Err(ClipboardError::Unavailable);
        }
        state.contents = Some(text.to_owned());
        state.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Clipboard, ClipboardError, MemoryClipboard};

    #[test]
    fn clones_share_contents() {
        let reader = MemoryClipboard::default();
        let mut writer = reader.clone();
        writer.write_text("a\tb").expect("write");
        assert_eq!(reader.contents().as_deref(), Some("a\tb"));
        assert_eq!(reader.writes(), 1);
    }

    #[test]
    fn disabled_clipboard_refuses_writes() {
        let reader = MemoryClipboard::disabled();
        let mut writer = reader.clone();
        assert!(!writer.is_available());
        assert_eq!(writer.write_text("x"), Err(ClipboardError::Unavailable));
        assert_eq!(reader.contents(), None);
        assert_eq!(reader.writes(), 0);
    }
}
