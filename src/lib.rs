//! Togglepad - centered scratchpad window toggling for compositor hosts
//!
//! This crate decides when a scratchpad window should be hidden or shown
//! and computes its centered, aspect-constrained placement. The hosting
//! window manager supplies windows, screens, shortcuts and events through
//! the traits in [`host`]; the crate never creates or destroys windows
//! itself.

pub mod config;
pub mod core;
pub mod host;

// Re-export commonly used types
pub use crate::config::{Config, ToggleConfig};
pub use crate::core::daemon::Daemon;
pub use crate::core::geometry::{centered_geometry, Rect};
pub use crate::core::toggle::{ToggleEngine, ToggleOutcome};
pub use crate::host::{HostEvent, Screen, WindowHandle, WmHost};

/// Set up the tracing subscriber for an embedding host process. Safe to
/// call more than once; later calls are ignored.
pub fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(format!("togglepad={log_level}"))
        .with_target(false)
        .try_init();
}
