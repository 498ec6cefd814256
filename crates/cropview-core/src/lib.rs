//! Cropview Core - Interactive image-cropping logic
//!
//! This crate provides the deterministic core of the Cropview widget:
//! letterbox placement, selection normalization, display-to-source
//! coordinate mapping, the selection gesture state machine, and pixel
//! extraction. The browser layer (see `cropview-wasm`) owns canvases,
//! pointer events, and fetching; everything here is pure state and math.

pub mod extract;
pub mod geometry;
pub mod mapping;
pub mod overlay;
pub mod placement;
pub mod review;
pub mod session;
pub mod source;

pub use extract::extract_region;
pub use geometry::{Point, Rect};
pub use mapping::{map_selection, CropRegion};
pub use overlay::{overlay_layout, OverlayLayout};
pub use placement::{Placement, SurfaceSize};
pub use review::{resolve_review, ReviewPage};
pub use session::{CropError, CropSession, LoadTicket};
pub use source::{check_file_type, check_response, check_url, decode_image, LoadError, SourceImage};
