use serde::{Deserialize, Serialize};

/// Rectangle in pixel coordinates.
///
/// Screen rects are absolute desktop coordinates; the rect returned by
/// [`centered_geometry`] is relative to its screen's origin and must be
/// [`translate`](Rect::translate)d by that origin before being applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same rect shifted by `(dx, dy)`.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Compute the centered target rect for a scratchpad on `screen`.
///
/// Ultra-wide screens are first letterboxed to a working area at most
/// `max_aspect` wide-to-tall, so a scratchpad never stretches across the
/// whole of a 21:9 display. The working area is then scaled by
/// `scale_factor` and centered within the original screen rect. Offsets in
/// the result are relative to the screen origin.
///
/// Pure and deterministic. Callers guarantee positive screen dimensions and
/// `max_aspect > 0`, `0 < scale_factor <= 1`.
pub fn centered_geometry(screen: Rect, max_aspect: f64, scale_factor: f64) -> Rect {
    let mut ws_width = screen.width as f64;
    let mut ws_height = screen.height as f64;

    if ws_width / ws_height > max_aspect {
        ws_height = ws_width.min(ws_height);
        ws_width = ws_height * max_aspect;
    }

    let width = ws_width * scale_factor;
    let height = ws_height * scale_factor;
    let x = (screen.width as f64 - width) / 2.0;
    let y = (screen.height as f64 - height) / 2.0;

    Rect {
        x: x.round() as i32,
        y: y.round() as i32,
        width: width.round() as i32,
        height: height.round() as i32,
    }
}
