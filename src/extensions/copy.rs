use tracing::{debug, warn};

use crate::core::PixelPoint;
use crate::error::PluginResult;
use crate::interaction::{InputEvent, InputKind};

use super::{AttachContext, Hook, HookContext, HookSet, ListenerId, TimelinePlugin};

/// Clipboard payload for one point: two `label<TAB>value` lines, value axis
/// first, so it pastes into two spreadsheet rows.
#[must_use]
pub fn clipboard_text(x_label: &str, y_label: &str, x: f64, y: f64) -> String {
    format!("{y_label}\t{y}\n{x_label}\t{x}")
}

/// Copies the point nearest to a double click to the clipboard.
///
/// Clipboard availability is probed once at construct time; without a
/// clipboard no listener is installed.
pub struct DoubleClickCopyPlugin {
    id: String,
    listener: Option<ListenerId>,
}

impl DoubleClickCopyPlugin {
    pub const DEFAULT_ID: &'static str = "double-click-copy";

    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Self::DEFAULT_ID.to_owned(),
            listener: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }
}

impl Default for DoubleClickCopyPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelinePlugin for DoubleClickCopyPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn hooks(&self) -> HookSet {
        HookSet::EMPTY.with(Hook::Construct).with(Hook::Destroy)
    }

    fn construct(&mut self, ctx: &mut AttachContext<'_>) -> PluginResult<()> {
        if !ctx.clipboard_available() {
            warn!(
                plugin = %self.id,
                "clipboard not available; double click to copy is disabled"
            );
            return Ok(());
        }
        self.listener = Some(ctx.listen(InputKind::DoubleClick));
        Ok(())
    }

    fn on_input(&mut self, event: InputEvent, ctx: &mut HookContext<'_>) -> PluginResult<()> {
        let InputEvent::DoubleClicked { x, y } = event else {
            return Ok(());
        };
        let chart = ctx.chart();
        if !chart.canvas_rect().contains(x, y) {
            return Ok(());
        }

        let local = chart.layout().to_chart_local(PixelPoint::new(x, y));
        let Some(point) = chart.nearest_point(local) else {
            return Ok(());
        };
        let text = clipboard_text(chart.x_label(), chart.y_label(), point.x, point.y);

        match ctx.clipboard() {
            Some(clipboard) => match clipboard.write_text(&text) {
                Ok(()) => debug!(plugin = %self.id, index = point.index, "copied point to clipboard"),
                Err(err) => warn!(plugin = %self.id, error = %err, "error writing to clipboard"),
            },
            None => warn!(plugin = %self.id, "clipboard detached after construct; copy skipped"),
        }
        Ok(())
    }

    fn destroy(&mut self, _ctx: &mut HookContext<'_>) -> PluginResult<()> {
        self.listener = None;
        Ok(())
    }
}
