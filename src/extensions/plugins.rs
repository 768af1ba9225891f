use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::api::Chart;
use crate::clipboard::Clipboard;
use crate::error::PluginResult;
use crate::interaction::{InputEvent, InputKind};
use crate::overlay::OverlayContainer;
use crate::render::Canvas;

/// Lifecycle callbacks a plugin may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hook {
    Construct,
    DrawAfter,
    Destroy,
}

impl Hook {
    pub const ALL: [Hook; 3] = [Hook::Construct, Hook::DrawAfter, Hook::Destroy];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Construct => "construct",
            Self::DrawAfter => "draw:after",
            Self::Destroy => "destroy",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Construct => 1 << 0,
            Self::DrawAfter => 1 << 1,
            Self::Destroy => 1 << 2,
        }
    }
}

/// Capability tag: the hooks a plugin actually implements.
///
/// The runner only calls hooks present in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct HookSet(u8);

impl HookSet {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn with(self, hook: Hook) -> Self {
        Self(self.0 | hook.bit())
    }

    #[must_use]
    pub const fn contains(self, hook: Hook) -> bool {
        self.0 & hook.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Hook> {
        Hook::ALL.into_iter().filter(move |hook| self.contains(*hook))
    }
}

impl FromIterator<Hook> for HookSet {
    fn from_iter<I: IntoIterator<Item = Hook>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Handle for an input listener installed during `construct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Listener {
    pub(crate) id: ListenerId,
    pub(crate) kind: InputKind,
}

pub(crate) type ListenerList = SmallVec<[Listener; 2]>;

/// Context for `construct`.
pub struct AttachContext<'a> {
    chart: &'a Chart,
    overlay: &'a mut OverlayContainer,
    clipboard_available: bool,
    next_listener_id: &'a mut u64,
    listeners: &'a mut ListenerList,
}

impl<'a> AttachContext<'a> {
    pub(crate) fn new(
        chart: &'a Chart,
        overlay: &'a mut OverlayContainer,
        clipboard_available: bool,
        next_listener_id: &'a mut u64,
        listeners: &'a mut ListenerList,
    ) -> Self {
        Self {
            chart,
            overlay,
            clipboard_available,
            next_listener_id,
            listeners,
        }
    }

    #[must_use]
    pub fn chart(&self) -> &'a Chart {
        self.chart
    }

    pub fn overlay(&mut self) -> &mut OverlayContainer {
        self.overlay
    }

    /// Whether the host has a usable clipboard sink.
    #[must_use]
    pub fn clipboard_available(&self) -> bool {
        self.clipboard_available
    }

    /// Subscribes this plugin to `kind` input events.
    ///
    /// Each call installs a separate listener. The host releases all of them
    /// when the plugin is unregistered.
    pub fn listen(&mut self, kind: InputKind) -> ListenerId {
        let id = ListenerId(*self.next_listener_id);
        *self.next_listener_id += 1;
        self.listeners.push(Listener { id, kind });
        id
    }
}

/// Context for `draw_after`.
pub struct DrawContext<'a> {
    chart: &'a Chart,
    canvas: &'a mut dyn Canvas,
    overlay: &'a mut OverlayContainer,
}

impl<'a> DrawContext<'a> {
    pub(crate) fn new(
        chart: &'a Chart,
        canvas: &'a mut dyn Canvas,
        overlay: &'a mut OverlayContainer,
    ) -> Self {
        Self {
            chart,
            canvas,
            overlay,
        }
    }

    #[must_use]
    pub fn chart(&self) -> &'a Chart {
        self.chart
    }

    pub fn canvas(&mut self) -> &mut dyn Canvas {
        self.canvas
    }

    pub fn overlay(&mut self) -> &mut OverlayContainer {
        self.overlay
    }
}

/// Context for input listeners and `destroy`.
pub struct HookContext<'a> {
    chart: &'a Chart,
    overlay: &'a mut OverlayContainer,
    clipboard: Option<&'a mut Box<dyn Clipboard>>,
}

impl<'a> HookContext<'a> {
    pub(crate) fn new(
        chart: &'a Chart,
        overlay: &'a mut OverlayContainer,
        clipboard: Option<&'a mut Box<dyn Clipboard>>,
    ) -> Self {
        Self {
            chart,
            overlay,
            clipboard,
        }
    }

    #[must_use]
    pub fn chart(&self) -> &'a Chart {
        self.chart
    }

    pub fn overlay(&mut self) -> &mut OverlayContainer {
        self.overlay
    }

    pub fn clipboard(&mut self) -> Option<&mut dyn Clipboard> {
        match self.clipboard {
            Some(ref mut clipboard) => Some(&mut ***clipboard),
            None => None,
        }
    }
}

/// Extension hook interface for optional chart behaviors.
///
/// Every hook has a no-op default; `hooks` declares which ones the runner
/// should call. The implementing struct's fields are the plugin's private
/// state and live as long as the registration.
pub trait TimelinePlugin {
    fn id(&self) -> &str;

    fn hooks(&self) -> HookSet;

    /// Called once at registration, before the plugin's first `draw_after`.
    fn construct(&mut self, _ctx: &mut AttachContext<'_>) -> PluginResult<()> {
        Ok(())
    }

    /// Called after every host render pass, on the canvas the host drew into.
    fn draw_after(&mut self, _ctx: &mut DrawContext<'_>) -> PluginResult<()> {
        Ok(())
    }

    /// Called for each listener the plugin installed for `event.kind()`.
    fn on_input(&mut self, _event: InputEvent, _ctx: &mut HookContext<'_>) -> PluginResult<()> {
        Ok(())
    }

    /// Called once when the plugin is detached.
    fn destroy(&mut self, _ctx: &mut HookContext<'_>) -> PluginResult<()> {
        Ok(())
    }
}
