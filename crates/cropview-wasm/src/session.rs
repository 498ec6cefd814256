//! WASM bindings for the crop session.
//!
//! The JavaScript side forwards pointer events and settled loads into a
//! [`CropSession`] and reads back the selection, overlay layout, and crop
//! results. Structured values (rects, placement, overlay) cross the
//! boundary through `serde-wasm-bindgen`; errors cross as strings.
//!
//! # Load protocol
//!
//! ```typescript
//! const ticket = session.begin_load();
//! try {
//!   const response = await fetch(url, { mode: "cors" });
//!   check_response(response.status, response.headers.get("Content-Type") ?? "");
//!   const bytes = new Uint8Array(await response.arrayBuffer());
//!   session.complete_load(ticket, bytes);
//! } catch (e) {
//!   session.fail_load(ticket, String(e));
//! }
//! ```
//!
//! Completions for superseded tickets are silently discarded, so a stale
//! slow fetch can never overwrite a newer image.

use crate::types::JsSourceImage;
use cropview_core::session::{CropSession as CoreSession, LoadTicket};
use cropview_core::source::{decode_image, LoadError};
use cropview_core::{Point, SurfaceSize};
use wasm_bindgen::prelude::*;

/// State for one crop widget instance.
#[wasm_bindgen]
pub struct CropSession {
    inner: CoreSession,
}

#[wasm_bindgen]
impl CropSession {
    /// Create a session for a display surface of the given logical size.
    #[wasm_bindgen(constructor)]
    pub fn new(surface_width: f64, surface_height: f64) -> CropSession {
        CropSession {
            inner: CoreSession::new(SurfaceSize::new(surface_width, surface_height)),
        }
    }

    /// Forward a pointerdown at surface coordinates.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.inner.pointer_down(Point::new(x, y));
    }

    /// Forward a pointermove at surface coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.pointer_move(Point::new(x, y));
    }

    /// Forward a pointerup (or pointerleave) at surface coordinates.
    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.inner.pointer_up(Point::new(x, y));
    }

    /// The selection rectangle to draw this frame, as
    /// `{ x, y, width, height }`, or `undefined` when there is none.
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.selection())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Overlay layout for the current selection as
    /// `{ mask: [rect, rect, rect, rect], border: rect }`, or `undefined`.
    pub fn overlay(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.overlay())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current letterbox placement as
    /// `{ offset_x, offset_y, drawn_width, drawn_height }`, or `undefined`
    /// when no image is loaded. This is where the canvas draws the image.
    pub fn placement(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.placement())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Whether a load is in flight (disable the load control meanwhile).
    #[wasm_bindgen(getter)]
    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    /// Natural width of the loaded image, if any.
    pub fn image_width(&self) -> Option<u32> {
        self.inner.image().map(|img| img.width)
    }

    /// Natural height of the loaded image, if any.
    pub fn image_height(&self) -> Option<u32> {
        self.inner.image().map(|img| img.height)
    }

    /// Resize the display surface, recomputing the placement.
    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.inner.set_surface_size(SurfaceSize::new(width, height));
    }

    /// Start a new load, superseding any load still in flight.
    ///
    /// Returns the ticket to pass back to `complete_load` / `fail_load`.
    pub fn begin_load(&mut self) -> u64 {
        self.inner.begin_load().id()
    }

    /// Decode fetched bytes and install them as the source image.
    ///
    /// Returns `true` if the load was applied, `false` if the ticket was
    /// stale and the completion discarded. Decode failures surface as an
    /// error string for the message slot.
    pub fn complete_load(&mut self, ticket: u64, bytes: &[u8]) -> Result<bool, JsValue> {
        let result = decode_image(bytes);
        match self.inner.complete_load(LoadTicket::from_id(ticket), result) {
            Ok(applied) => {
                if !applied {
                    log_discarded(ticket);
                }
                Ok(applied)
            }
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    /// Record a failed fetch (network error, CORS rejection, ...).
    ///
    /// Returns the message to display, or `undefined` when the ticket was
    /// stale and the failure is irrelevant.
    pub fn fail_load(&mut self, ticket: u64, message: &str) -> Option<String> {
        match self.inner.complete_load(
            LoadTicket::from_id(ticket),
            Err(LoadError::Network(message.to_string())),
        ) {
            Ok(_) => {
                log_discarded(ticket);
                None
            }
            Err(e) => Some(e.to_string()),
        }
    }

    /// Map the finalized selection to source space and extract the cropped
    /// pixels at 1:1 source resolution for the preview canvas.
    pub fn confirm_crop(&self) -> Result<JsSourceImage, JsValue> {
        self.inner
            .confirm_crop()
            .map(JsSourceImage::from_source)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Note a discarded stale load completion in the browser console.
///
/// Console access only exists on wasm32; native test runs drop the note.
fn log_discarded(ticket: u64) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("Discarding stale image load (ticket {ticket})").into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ticket;
}

/// Validate the content type of a picked file before reading it.
#[wasm_bindgen]
pub fn check_file_type(content_type: &str) -> Result<(), JsValue> {
    cropview_core::check_file_type(content_type).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Pre-validate the URL input before starting a fetch.
#[wasm_bindgen]
pub fn check_url(url: &str) -> Result<(), JsValue> {
    cropview_core::check_url(url).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate an HTTP response before decoding its body.
#[wasm_bindgen]
pub fn check_response(status: u16, content_type: &str) -> Result<(), JsValue> {
    cropview_core::check_response(status, content_type)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for the session bindings.
///
/// Note: these stay on success paths and string-returning errors. Paths
/// that construct a `JsValue` only work on wasm32 targets; those are
/// covered in `wasm_tests` below.
#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a small PNG for decode-driven tests.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        bytes
    }

    #[test]
    fn test_load_and_crop() {
        let mut session = CropSession::new(600.0, 400.0);
        let ticket = session.begin_load();
        let applied = session.complete_load(ticket, &png_bytes(1200, 600)).unwrap();
        assert!(applied);
        assert_eq!(session.image_width(), Some(1200));
        assert!(!session.is_loading());

        session.pointer_down(100.0, 100.0);
        session.pointer_move(200.0, 150.0);
        session.pointer_up(300.0, 200.0);

        let cropped = session.confirm_crop().unwrap();
        assert_eq!(cropped.width(), 400);
        assert_eq!(cropped.height(), 200);
    }

    #[test]
    fn test_stale_ticket_discarded() {
        let mut session = CropSession::new(600.0, 400.0);
        let slow = session.begin_load();
        let fast = session.begin_load();

        assert!(session.complete_load(fast, &png_bytes(800, 800)).unwrap());
        assert!(!session.complete_load(slow, &png_bytes(100, 100)).unwrap());
        assert_eq!(session.image_width(), Some(800));
    }

    #[test]
    fn test_fail_load_reports_message() {
        let mut session = CropSession::new(600.0, 400.0);
        let ticket = session.begin_load();
        let message = session.fail_load(ticket, "fetch rejected").unwrap();
        assert_eq!(message, "Failed to load image from URL: fetch rejected");
        assert!(session.image_width().is_none());
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let mut session = CropSession::new(600.0, 400.0);
        let slow = session.begin_load();
        let fast = session.begin_load();
        session.complete_load(fast, &png_bytes(800, 800)).unwrap();

        assert!(session.fail_load(slow, "timed out").is_none());
        assert_eq!(session.image_width(), Some(800));
    }

}
