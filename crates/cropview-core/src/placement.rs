//! Letterbox placement of a source image on the display surface.
//!
//! The display surface has a fixed logical size; the source image is scaled
//! to fit inside it without distortion and centered, leaving symmetric
//! padding on the constrained axis. The resulting placement is recomputed
//! every time the image or surface changes and is never persisted.

use serde::{Deserialize, Serialize};

/// Fixed logical size of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Where and how large the source image is drawn inside the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub offset_x: f64,
    pub offset_y: f64,
    pub drawn_width: f64,
    pub drawn_height: f64,
}

impl Placement {
    /// Compute the aspect-ratio-preserving letterbox fit.
    ///
    /// Proposes a width-filling fit first and re-derives from the height
    /// when that would overflow the surface, then centers the result. The
    /// full image is always visible, uncropped and undistorted.
    pub fn letterbox(natural_width: f64, natural_height: f64, surface: SurfaceSize) -> Self {
        let aspect_ratio = natural_width / natural_height;

        let mut drawn_width = surface.width;
        let mut drawn_height = drawn_width / aspect_ratio;

        if drawn_height > surface.height {
            drawn_height = surface.height;
            drawn_width = drawn_height * aspect_ratio;
        }

        Self {
            offset_x: (surface.width - drawn_width) / 2.0,
            offset_y: (surface.height - drawn_height) / 2.0,
            drawn_width,
            drawn_height,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn natural_size_strategy() -> impl Strategy<Value = (f64, f64)> {
        (1.0f64..=10_000.0, 1.0f64..=10_000.0)
    }

    proptest! {
        /// Property: the drawn aspect ratio matches the natural aspect ratio.
        #[test]
        fn prop_aspect_ratio_preserved((w, h) in natural_size_strategy()) {
            let p = Placement::letterbox(w, h, SurfaceSize::default());
            let natural_ratio = w / h;
            let drawn_ratio = p.drawn_width / p.drawn_height;
            prop_assert!((natural_ratio - drawn_ratio).abs() < 1e-6 * natural_ratio.max(1.0));
        }

        /// Property: the drawn image fits inside the surface.
        #[test]
        fn prop_fits_within_surface((w, h) in natural_size_strategy()) {
            let surface = SurfaceSize::default();
            let p = Placement::letterbox(w, h, surface);
            prop_assert!(p.drawn_width <= surface.width + 1e-9);
            prop_assert!(p.drawn_height <= surface.height + 1e-9);
            prop_assert!(p.offset_x >= 0.0);
            prop_assert!(p.offset_y >= 0.0);
        }

        /// Property: padding is symmetric (the image is centered).
        #[test]
        fn prop_centered((w, h) in natural_size_strategy()) {
            let surface = SurfaceSize::default();
            let p = Placement::letterbox(w, h, surface);
            let right_pad = surface.width - p.drawn_width - p.offset_x;
            let bottom_pad = surface.height - p.drawn_height - p.offset_y;
            prop_assert!((p.offset_x - right_pad).abs() < 1e-9);
            prop_assert!((p.offset_y - bottom_pad).abs() < 1e-9);
        }

        /// Property: one axis of the drawn image fills the surface exactly.
        #[test]
        fn prop_constrained_axis_fills((w, h) in natural_size_strategy()) {
            let surface = SurfaceSize::default();
            let p = Placement::letterbox(w, h, surface);
            let fills_width = (p.drawn_width - surface.width).abs() < 1e-9;
            let fills_height = (p.drawn_height - surface.height).abs() < 1e-9;
            prop_assert!(fills_width || fills_height);
        }
    }
}
