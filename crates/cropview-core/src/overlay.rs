//! Selection overlay layout.
//!
//! While a drag is in progress (and after it finalizes) the display surface
//! shows the image darkened everywhere outside the selection, with a dashed
//! border on the selection itself. The darkened area decomposes into four
//! strips around the selection; this module computes those rectangles so
//! the canvas layer only has to fill them.

use crate::geometry::Rect;
use crate::placement::SurfaceSize;
use serde::{Deserialize, Serialize};

/// Stroke width of the selection border, in surface pixels.
pub const BORDER_WIDTH: f64 = 2.0;
/// Dash pattern of the selection border: 5 on, 5 off.
pub const BORDER_DASH: [f64; 2] = [5.0, 5.0];
/// Border stroke color (CSS).
pub const BORDER_COLOR: &str = "#00FFFF";
/// Fill for the darkened mask outside the selection (CSS).
pub const MASK_COLOR: &str = "rgba(0, 0, 0, 0.5)";

/// Rectangles the canvas layer paints for one frame of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayLayout {
    /// Mask strips: above, below, left of, and right of the selection.
    pub mask: [Rect; 4],
    /// The selection rectangle itself, stroked with the dashed border.
    pub border: Rect,
}

/// Compute the overlay layout for a selection on the given surface.
///
/// The selection may extend past the surface (the pointer can be released
/// outside it); the mask strips are clipped to the surface so the canvas
/// layer never fills a negative rectangle. The border is the selection
/// itself, unclipped.
pub fn overlay_layout(surface: SurfaceSize, selection: &Rect) -> OverlayLayout {
    let sel_x = selection.x.clamp(0.0, surface.width);
    let sel_y = selection.y.clamp(0.0, surface.height);
    let sel_right = selection.right().clamp(sel_x, surface.width);
    let sel_bottom = selection.bottom().clamp(sel_y, surface.height);

    let top = Rect::new(0.0, 0.0, surface.width, sel_y);
    let bottom = Rect::new(0.0, sel_bottom, surface.width, surface.height - sel_bottom);
    let left = Rect::new(0.0, sel_y, sel_x, sel_bottom - sel_y);
    let right = Rect::new(
        sel_right,
        sel_y,
        surface.width - sel_right,
        sel_bottom - sel_y,
    );

    OverlayLayout {
        mask: [top, bottom, left, right],
        border: *selection,
    }
}
