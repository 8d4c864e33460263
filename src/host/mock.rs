//! In-memory host double for unit tests.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::core::geometry::Rect;
use crate::host::{HostEvent, Screen, WindowHandle, WmHost};

/// Mutable state of one fake window. Tests poke fields directly before
/// handing the state to [`MockHost::add_window`].
#[derive(Debug, Clone, PartialEq)]
pub struct MockWindowState {
    pub id: String,
    pub class: String,
    pub deleted: bool,
    pub normal: bool,
    pub minimized: bool,
    pub focused: bool,
    pub geometry: Rect,
    pub screen: String,
    pub keep_above: bool,
    pub fullscreen: bool,
    pub no_border: bool,
    pub skip_taskbar: bool,
    pub skip_switcher: bool,
    pub skip_pager: bool,
    pub on_all_desktops: bool,
}

impl MockWindowState {
    pub fn new(id: &str, class: &str) -> Self {
        Self {
            id: id.to_string(),
            class: class.to_string(),
            deleted: false,
            normal: true,
            minimized: false,
            focused: false,
            geometry: Rect::new(0, 0, 800, 600),
            screen: "primary".to_string(),
            keep_above: false,
            fullscreen: false,
            no_border: false,
            skip_taskbar: false,
            skip_switcher: false,
            skip_pager: false,
            on_all_desktops: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredShortcut {
    pub name: String,
    pub description: String,
    pub default_binding: String,
}

#[derive(Debug)]
struct Shared {
    windows: Vec<MockWindowState>,
    screens: Vec<Screen>,
    pointer_screen: String,
    focused_screen: String,
    shortcuts: Vec<RegisteredShortcut>,
}

/// Implements [`WmHost`] over plain in-memory state. Starts with a single
/// 1920x1080 screen named `"primary"` holding both the pointer and the
/// focus.
pub struct MockHost {
    shared: Arc<Mutex<Shared>>,
    events: tokio::sync::Mutex<mpsc::UnboundedReceiver<HostEvent>>,
}

impl MockHost {
    /// Returns the host together with the sender that feeds
    /// [`WmHost::next_event`]. Dropping the sender ends the event stream.
    pub fn new() -> (Self, mpsc::UnboundedSender<HostEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let shared = Shared {
            windows: Vec::new(),
            screens: vec![Screen::new("primary", Rect::new(0, 0, 1920, 1080))],
            pointer_screen: "primary".to_string(),
            focused_screen: "primary".to_string(),
            shortcuts: Vec::new(),
        };

        let host = Self {
            shared: Arc::new(Mutex::new(shared)),
            events: tokio::sync::Mutex::new(rx),
        };
        (host, tx)
    }

    pub fn add_window(&self, state: MockWindowState) {
        self.shared.lock().unwrap().windows.push(state);
    }

    pub fn remove_window(&self, id: &str) {
        self.shared.lock().unwrap().windows.retain(|w| w.id != id);
    }

    pub fn add_screen(&self, screen: Screen) {
        self.shared.lock().unwrap().screens.push(screen);
    }

    pub fn set_pointer_screen(&self, name: &str) {
        self.shared.lock().unwrap().pointer_screen = name.to_string();
    }

    pub fn set_focused_screen(&self, name: &str) {
        self.shared.lock().unwrap().focused_screen = name.to_string();
    }

    pub fn unfocus_all(&self) {
        for window in &mut self.shared.lock().unwrap().windows {
            window.focused = false;
        }
    }

    /// Snapshot of a window's state for assertions.
    pub fn window_state(&self, id: &str) -> Option<MockWindowState> {
        self.shared
            .lock()
            .unwrap()
            .windows
            .iter()
            .find(|w| w.id == id)
            .cloned()
    }

    pub fn registered_shortcuts(&self) -> Vec<RegisteredShortcut> {
        self.shared.lock().unwrap().shortcuts.clone()
    }

    fn screen_by_name(&self, name: &str) -> Screen {
        self.shared
            .lock()
            .unwrap()
            .screens
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .expect("unknown screen in mock host")
    }
}

struct MockWindowHandle {
    id: String,
    shared: Arc<Mutex<Shared>>,
}

impl MockWindowHandle {
    fn read<T>(&self, f: impl FnOnce(&MockWindowState) -> T, missing: T) -> T {
        let shared = self.shared.lock().unwrap();
        shared
            .windows
            .iter()
            .find(|w| w.id == self.id)
            .map(f)
            .unwrap_or(missing)
    }

    fn write(&self, f: impl FnOnce(&mut MockWindowState)) {
        let mut shared = self.shared.lock().unwrap();
        if let Some(window) = shared.windows.iter_mut().find(|w| w.id == self.id) {
            f(window);
        }
    }
}

impl WindowHandle for MockWindowHandle {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn window_class(&self) -> String {
        self.read(|w| w.class.clone(), String::new())
    }

    // A handle whose window vanished from the host reads as deleted.
    fn is_deleted(&self) -> bool {
        self.read(|w| w.deleted, true)
    }

    fn is_normal_window(&self) -> bool {
        self.read(|w| w.normal, false)
    }

    fn is_minimized(&self) -> bool {
        self.read(|w| w.minimized, true)
    }

    fn is_focused(&self) -> bool {
        self.read(|w| w.focused, false)
    }

    fn geometry(&self) -> Rect {
        self.read(|w| w.geometry, Rect::default())
    }

    fn screen(&self) -> String {
        self.read(|w| w.screen.clone(), String::new())
    }

    fn set_geometry(&self, rect: Rect) {
        self.write(|w| w.geometry = rect);
    }

    fn set_minimized(&self, minimized: bool) {
        self.write(|w| w.minimized = minimized);
    }

    fn set_keep_above(&self, keep_above: bool) {
        self.write(|w| w.keep_above = keep_above);
    }

    fn set_fullscreen(&self, fullscreen: bool) {
        self.write(|w| w.fullscreen = fullscreen);
    }

    fn set_no_border(&self, no_border: bool) {
        self.write(|w| w.no_border = no_border);
    }

    fn set_skip_taskbar(&self, skip: bool) {
        self.write(|w| w.skip_taskbar = skip);
    }

    fn set_skip_switcher(&self, skip: bool) {
        self.write(|w| w.skip_switcher = skip);
    }

    fn set_skip_pager(&self, skip: bool) {
        self.write(|w| w.skip_pager = skip);
    }

    fn set_on_all_desktops(&self, on_all: bool) {
        self.write(|w| w.on_all_desktops = on_all);
    }
}

#[async_trait]
impl WmHost for MockHost {
    fn windows(&self) -> Vec<Box<dyn WindowHandle>> {
        let shared = self.shared.lock().unwrap();
        shared
            .windows
            .iter()
            .map(|w| {
                Box::new(MockWindowHandle {
                    id: w.id.clone(),
                    shared: Arc::clone(&self.shared),
                }) as Box<dyn WindowHandle>
            })
            .collect()
    }

    fn pointer_screen(&self) -> Screen {
        let name = self.shared.lock().unwrap().pointer_screen.clone();
        self.screen_by_name(&name)
    }

    fn focused_screen(&self) -> Screen {
        let name = self.shared.lock().unwrap().focused_screen.clone();
        self.screen_by_name(&name)
    }

    fn focus_window(&self, id: &str) {
        for window in &mut self.shared.lock().unwrap().windows {
            window.focused = window.id == id;
        }
    }

    fn send_to_screen(&self, id: &str, screen: &Screen) {
        if let Some(window) = self
            .shared
            .lock()
            .unwrap()
            .windows
            .iter_mut()
            .find(|w| w.id == id)
        {
            window.screen = screen.name.clone();
        }
    }

    fn register_shortcut(
        &self,
        name: &str,
        description: &str,
        default_binding: &str,
    ) -> Result<()> {
        self.shared.lock().unwrap().shortcuts.push(RegisteredShortcut {
            name: name.to_string(),
            description: description.to_string(),
            default_binding: default_binding.to_string(),
        });
        Ok(())
    }

    async fn next_event(&self) -> Option<HostEvent> {
        self.events.lock().await.recv().await
    }
}
