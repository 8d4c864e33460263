//! Host-facing traits.
//!
//! The surrounding window manager (the host) owns every window and screen;
//! this crate only reads their state and requests mutations through the
//! narrow interfaces below. A compositor adapter implements [`WmHost`] and
//! [`WindowHandle`] over its native object model and feeds [`HostEvent`]s
//! into the daemon's event loop.

use anyhow::Result;
use async_trait::async_trait;

use crate::core::geometry::Rect;

#[cfg(test)]
pub mod mock;

/// A screen known to the host. Identity is the host-assigned name.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub name: String,
    /// Absolute desktop coordinates.
    pub geometry: Rect,
}

impl Screen {
    pub fn new(name: impl Into<String>, geometry: Rect) -> Self {
        Self {
            name: name.into(),
            geometry,
        }
    }
}

/// Events delivered by the host. These are the only notifications the crate
/// consumes; the host serializes delivery, so handling never overlaps.
#[derive(Debug, Clone)]
pub enum HostEvent {
    WindowAdded { id: String },
    WindowClosed { id: String },
    WindowFocusChanged { id: String, focused: bool },
    ShortcutInvoked { name: String },
}

/// Read/write view over a single host window.
///
/// Attribute access is synchronous and idempotent; the host applies writes
/// immediately. Handles are short-lived: they are only valid within the
/// event dispatch that obtained them, and state is re-read on every call
/// because the host mutates windows outside this crate's control.
pub trait WindowHandle {
    fn id(&self) -> String;
    fn window_class(&self) -> String;
    fn is_deleted(&self) -> bool;
    fn is_normal_window(&self) -> bool;
    fn is_minimized(&self) -> bool;
    fn is_focused(&self) -> bool;
    fn geometry(&self) -> Rect;
    /// Name of the screen the window is currently assigned to.
    fn screen(&self) -> String;

    fn set_geometry(&self, rect: Rect);
    fn set_minimized(&self, minimized: bool);
    fn set_keep_above(&self, keep_above: bool);
    fn set_fullscreen(&self, fullscreen: bool);
    fn set_no_border(&self, no_border: bool);
    fn set_skip_taskbar(&self, skip: bool);
    fn set_skip_switcher(&self, skip: bool);
    fn set_skip_pager(&self, skip: bool);
    fn set_on_all_desktops(&self, on_all: bool);
}

/// Capabilities required of the hosting window manager.
#[async_trait]
pub trait WmHost: Send + Sync {
    /// Enumerate all windows currently known to the host, in the host's
    /// stable enumeration order. Called afresh on every query; results are
    /// never cached across events.
    fn windows(&self) -> Vec<Box<dyn WindowHandle>>;

    /// Look up a single window by host identity.
    fn window(&self, id: &str) -> Option<Box<dyn WindowHandle>> {
        self.windows().into_iter().find(|w| w.id() == id)
    }

    /// Screen currently containing the pointer.
    fn pointer_screen(&self) -> Screen;

    /// Screen currently holding the window focus.
    fn focused_screen(&self) -> Screen;

    /// Request that `id` receive focus. Focusing also raises the window.
    fn focus_window(&self, id: &str);

    /// Request that `id` be moved to `screen`.
    fn send_to_screen(&self, id: &str, screen: &Screen);

    /// Register a named global shortcut. `default_binding` may be empty for
    /// "no default key combination". Invocations come back as
    /// [`HostEvent::ShortcutInvoked`] carrying `name`.
    fn register_shortcut(&self, name: &str, description: &str, default_binding: &str)
        -> Result<()>;

    /// Next host event, or `None` once the host shuts the stream down.
    async fn next_event(&self) -> Option<HostEvent>;
}
