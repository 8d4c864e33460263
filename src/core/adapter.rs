use std::collections::{HashMap, HashSet};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::ToggleConfig;
use crate::core::classifier::matches_class;
use crate::core::toggle::{configure_as_normal, hide, ToggleEngine, ToggleOutcome};
use crate::host::{HostEvent, WindowHandle, WmHost};

/// Default key combination for the first configured class's toggle.
const DEFAULT_TOGGLE_BINDING: &str = "Meta+Return";

/// Name of the class-independent activate shortcut.
const ACTIVATE_SHORTCUT: &str = "Activate Current Window";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShortcutAction {
    Toggle(String),
    ActivateCurrent,
}

/// Normalizes host lifecycle events into registry and state-machine calls.
///
/// Owns the shortcut dispatch table and the per-window unfocus
/// subscriptions. A subscription is recorded once, when a window of a
/// configured class first becomes known, and torn down when the host
/// reports the window closed (or when it silently vanishes from the
/// enumeration — stale entries are pruned on sight).
pub struct LifecycleAdapter {
    engine: ToggleEngine,
    classes: Vec<String>,
    shortcuts: HashMap<String, ShortcutAction>,
    /// Window id → class of windows with a standing unfocus subscription.
    watched: HashMap<String, String>,
}

impl LifecycleAdapter {
    pub fn new(config: &ToggleConfig) -> Self {
        Self {
            engine: ToggleEngine::new(config.max_aspect, config.scale_factor),
            classes: config.classes.clone(),
            shortcuts: HashMap::new(),
            watched: HashMap::new(),
        }
    }

    /// Register one toggle shortcut per configured class plus the generic
    /// activate shortcut. Only the first class gets a default binding; the
    /// rest are left for the user to bind in the host.
    pub fn register_shortcuts(&mut self, host: &dyn WmHost) -> Result<()> {
        for (index, class) in self.classes.iter().enumerate() {
            let name = format!("Toggle {class}");
            let description = format!("Toggle scratchpad for {class}");
            let binding = if index == 0 { DEFAULT_TOGGLE_BINDING } else { "" };
            host.register_shortcut(&name, &description, binding)?;
            self.shortcuts
                .insert(name, ShortcutAction::Toggle(class.clone()));
            info!("⌨️ Registered toggle shortcut for '{class}'");
        }

        host.register_shortcut(
            ACTIVATE_SHORTCUT,
            "Apply centered scratchpad geometry to the current window",
            "",
        )?;
        self.shortcuts
            .insert(ACTIVATE_SHORTCUT.to_string(), ShortcutAction::ActivateCurrent);
        info!("⌨️ Registered shortcut for activating the current window");

        Ok(())
    }

    /// Adopt scratchpad windows that already exist at startup and prune
    /// subscriptions for windows the host no longer reports.
    pub fn sweep_existing(&mut self, host: &dyn WmHost) {
        let windows = host.windows();

        let live: HashSet<String> = windows.iter().map(|w| w.id()).collect();
        self.watched.retain(|id, _| {
            if live.contains(id) {
                true
            } else {
                debug!("🗑️ Pruning subscription for vanished window {id}");
                false
            }
        });

        for window in &windows {
            if let Some(class) = self.class_of(window.as_ref()) {
                self.setup_window(window.as_ref(), &class);
            }
        }
    }

    pub fn handle_event(&mut self, host: &dyn WmHost, event: &HostEvent) {
        match event {
            HostEvent::WindowAdded { id } => {
                if let Some(window) = host.window(id) {
                    if let Some(class) = self.class_of(window.as_ref()) {
                        self.setup_window(window.as_ref(), &class);
                    }
                }
            }
            HostEvent::WindowClosed { id } => {
                if self.watched.remove(id).is_some() {
                    debug!("🗑️ Dropped unfocus subscription for closed window {id}");
                }
            }
            HostEvent::WindowFocusChanged { id, focused } => {
                if !focused {
                    self.handle_unfocus(host, id);
                }
            }
            HostEvent::ShortcutInvoked { name } => self.handle_shortcut(host, name),
        }
    }

    /// One-time setup for a freshly discovered scratchpad window: make it a
    /// regular window, hide it, and record the unfocus subscription.
    fn setup_window(&mut self, window: &dyn WindowHandle, class: &str) {
        let id = window.id();
        if self.watched.contains_key(&id) {
            return;
        }

        configure_as_normal(window);
        hide(window);
        self.watched.insert(id.clone(), class.to_string());
        info!("🪟 Tracking scratchpad window {id} ({class})");
    }

    /// Normalize-on-unfocus: a tracked scratchpad that loses focus is
    /// re-hidden without an explicit toggle.
    fn handle_unfocus(&mut self, host: &dyn WmHost, id: &str) {
        if !self.watched.contains_key(id) {
            return;
        }

        match host.window(id) {
            Some(window) if !window.is_deleted() => {
                debug!("🙈 Auto-hiding unfocused scratchpad {id}");
                hide(window.as_ref());
            }
            _ => {
                self.watched.remove(id);
                debug!("🗑️ Pruning subscription for vanished window {id}");
            }
        }
    }

    fn handle_shortcut(&mut self, host: &dyn WmHost, name: &str) {
        match self.shortcuts.get(name).cloned() {
            Some(ShortcutAction::Toggle(class)) => match self.engine.toggle(host, &class) {
                ToggleOutcome::Hidden => info!("🙈 Hid scratchpad '{class}'"),
                ToggleOutcome::Shown => info!("👁️ Showed scratchpad '{class}'"),
                ToggleOutcome::NoWindow => debug!("No running window for scratchpad '{class}'"),
            },
            Some(ShortcutAction::ActivateCurrent) => {
                if self.engine.activate_current(host) == ToggleOutcome::NoWindow {
                    debug!("No focused window to activate");
                }
            }
            None => warn!("⚠️ Unknown shortcut invoked: '{name}'"),
        }
    }

    fn class_of(&self, window: &dyn WindowHandle) -> Option<String> {
        self.classes
            .iter()
            .find(|class| matches_class(window, class))
            .cloned()
    }
}
