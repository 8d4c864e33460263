use crate::host::WindowHandle;

/// True iff `window` is a live, normal window whose class-tag matches
/// `class`. Both sides are trimmed before comparison so configured names
/// with stray whitespace still match.
pub fn matches_class(window: &dyn WindowHandle, class: &str) -> bool {
    if window.is_deleted() || !window.is_normal_window() {
        return false;
    }
    window.window_class().trim() == class.trim()
}

/// Visibility is derived from the minimized flag on demand, never cached.
pub fn is_visible(window: &dyn WindowHandle) -> bool {
    !window.is_minimized()
}

/// A window is active when it is both visible and holds focus.
pub fn is_active(window: &dyn WindowHandle) -> bool {
    is_visible(window) && window.is_focused()
}
