use tracing::debug;

use crate::core::geometry::centered_geometry;
use crate::core::registry::ScratchpadRegistry;
use crate::host::{Screen, WindowHandle, WmHost};

/// What a toggle or activate request ended up doing. Evaluated fresh from
/// live window state on every call; nothing is persisted between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// An active scratchpad was minimized.
    Hidden,
    /// A window was repositioned, shown and focused.
    Shown,
    /// No live window matched; the request was a no-op.
    NoWindow,
}

/// Decides between hiding and showing a class's scratchpad window and
/// applies the centered placement. Configuration is explicit constructor
/// state so independent engines with different parameters can coexist.
pub struct ToggleEngine {
    max_aspect: f64,
    scale_factor: f64,
}

impl ToggleEngine {
    pub fn new(max_aspect: f64, scale_factor: f64) -> Self {
        Self {
            max_aspect,
            scale_factor,
        }
    }

    /// Toggle the scratchpad for `class`.
    ///
    /// An active (visible and focused) window is hidden. Otherwise the
    /// first visible window — or, failing that, any window of the class —
    /// is presented on the screen under the pointer, so a shortcut pressed
    /// on monitor B summons the scratchpad there even if focus was last on
    /// monitor A. A class with no live windows is silently left alone.
    pub fn toggle(&self, host: &dyn WmHost, class: &str) -> ToggleOutcome {
        let registry = ScratchpadRegistry::new(host);

        if let Some(window) = registry.find_active(class) {
            debug!("🙈 Hiding active scratchpad {} ({class})", window.id());
            hide(window.as_ref());
            return ToggleOutcome::Hidden;
        }

        let candidate = registry
            .find_visible(class)
            .or_else(|| registry.find_any(class));
        match candidate {
            Some(window) => {
                self.present(host, window.as_ref(), &host.pointer_screen());
                ToggleOutcome::Shown
            }
            None => {
                debug!("No live window for class '{class}'");
                ToggleOutcome::NoWindow
            }
        }
    }

    /// Apply the centered placement to whichever window currently holds
    /// focus, without any class check. Targets the focused screen rather
    /// than the pointer screen.
    pub fn activate_current(&self, host: &dyn WmHost) -> ToggleOutcome {
        match focused_window(host) {
            Some(window) => {
                self.present(host, window.as_ref(), &host.focused_screen());
                ToggleOutcome::Shown
            }
            None => ToggleOutcome::NoWindow,
        }
    }

    /// Promote the focused window into a centered, regular window: strip
    /// any scratchpad-style decorations, then present it on the focused
    /// screen. The window is not tracked afterwards.
    pub fn adopt_as_normal(&self, host: &dyn WmHost) -> ToggleOutcome {
        match focused_window(host) {
            Some(window) => {
                configure_as_normal(window.as_ref());
                self.present(host, window.as_ref(), &host.focused_screen());
                ToggleOutcome::Shown
            }
            None => ToggleOutcome::NoWindow,
        }
    }

    /// Shared presentation primitive: centered geometry, send to screen,
    /// un-minimize, focus. Both toggle and activate funnel through here,
    /// parameterized only by which screen was chosen.
    fn present(&self, host: &dyn WmHost, window: &dyn WindowHandle, screen: &Screen) {
        let target = centered_geometry(screen.geometry, self.max_aspect, self.scale_factor)
            .translate(screen.geometry.x, screen.geometry.y);
        debug!(
            "📐 Moving {} from {:?} to {:?} on screen '{}'",
            window.id(),
            window.geometry(),
            target,
            screen.name
        );

        window.set_geometry(target);
        host.send_to_screen(&window.id(), screen);
        window.set_minimized(false);
        host.focus_window(&window.id());
    }
}

/// Hide a scratchpad: minimize and drop always-on-top, in case the
/// application or a host window rule raised it.
pub fn hide(window: &dyn WindowHandle) {
    window.set_minimized(true);
    window.set_keep_above(false);
}

/// Strip scratchpad-style decorations so the window behaves like a regular
/// taskbar/pager-visible window again.
pub fn configure_as_normal(window: &dyn WindowHandle) {
    window.set_on_all_desktops(false);
    window.set_skip_taskbar(false);
    window.set_skip_switcher(false);
    window.set_skip_pager(false);
    window.set_keep_above(false);
    window.set_fullscreen(false);
    window.set_minimized(false);
    window.set_no_border(false);
}

fn focused_window(host: &dyn WmHost) -> Option<Box<dyn WindowHandle>> {
    host.windows()
        .into_iter()
        .find(|w| !w.is_deleted() && w.is_focused())
}
