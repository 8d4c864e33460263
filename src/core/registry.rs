use crate::core::classifier::{is_active, is_visible, matches_class};
use crate::host::{WindowHandle, WmHost};

/// Lookup view over the live window enumeration for one query.
///
/// Constructed fresh inside each event dispatch; holds no state of its own,
/// so class membership always reflects windows created or destroyed since
/// the previous event. Ties are broken by host enumeration order, first
/// match wins.
pub struct ScratchpadRegistry<'h> {
    host: &'h dyn WmHost,
}

impl<'h> ScratchpadRegistry<'h> {
    pub fn new(host: &'h dyn WmHost) -> Self {
        Self { host }
    }

    /// All live windows of `class`, in host enumeration order.
    pub fn find_all(&self, class: &str) -> Vec<Box<dyn WindowHandle>> {
        self.host
            .windows()
            .into_iter()
            .filter(|w| matches_class(w.as_ref(), class))
            .collect()
    }

    /// A window of `class` that is both visible and focused.
    pub fn find_active(&self, class: &str) -> Option<Box<dyn WindowHandle>> {
        self.find_all(class)
            .into_iter()
            .find(|w| is_active(w.as_ref()))
    }

    /// A window of `class` that is not minimized, focused or not.
    pub fn find_visible(&self, class: &str) -> Option<Box<dyn WindowHandle>> {
        self.find_all(class)
            .into_iter()
            .find(|w| is_visible(w.as_ref()))
    }

    /// Any window of `class`.
    pub fn find_any(&self, class: &str) -> Option<Box<dyn WindowHandle>> {
        self.find_all(class).into_iter().next()
    }
}
