//! Display-to-source coordinate mapping.
//!
//! Converts a selection rectangle drawn on the (possibly padded) display
//! surface into source-image pixel coordinates, discounting the letterbox
//! offsets and undoing the display scale.
//!
//! # Coordinate System
//!
//! - Selection coordinates are display-surface pixels, origin top-left
//! - Crop coordinates are source-image pixels at natural resolution
//!
//! The low side is clamped to 0 so a selection that starts inside the
//! letterbox padding never produces negative source coordinates. The high
//! side is left unclamped here; the pixel extractor bounds the copy window
//! to the actual buffer (see [`crate::extract`]).

use crate::geometry::Rect;
use crate::placement::Placement;
use serde::{Deserialize, Serialize};

/// A crop window in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Map a finalized selection into source-image pixel space.
///
/// # Arguments
///
/// * `selection` - Normalized selection in display-surface coordinates
/// * `placement` - Current letterbox placement of the image
/// * `natural_width` / `natural_height` - Source image dimensions in pixels
pub fn map_selection(
    selection: &Rect,
    placement: &Placement,
    natural_width: f64,
    natural_height: f64,
) -> CropRegion {
    let scale_x = natural_width / placement.drawn_width;
    let scale_y = natural_height / placement.drawn_height;

    let rel_x = selection.x - placement.offset_x;
    let rel_y = selection.y - placement.offset_y;

    CropRegion {
        x: (rel_x * scale_x).max(0.0),
        y: (rel_y * scale_y).max(0.0),
        width: selection.width * scale_x,
        height: selection.height * scale_y,
    }
}
