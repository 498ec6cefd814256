//! Crop session state.
//!
//! A [`CropSession`] is the single owner of everything the widget mutates:
//! the loaded source image, the surface size and derived placement, the
//! selection gesture, and load sequencing. The UI layer feeds it pointer
//! and load events and reads back the selection, overlay, and crop results.
//!
//! # Gesture state machine
//!
//! `Idle -> Dragging -> Finalized`. A drag can only start with an image
//! loaded. Releasing a zero-area drag returns to `Idle`. Loading a new
//! image discards any selection and returns to `Idle`. There is no editing
//! of an existing selection; each gesture replaces the prior one.
//!
//! # Load sequencing
//!
//! Loads are asynchronous in the browser and may complete out of order. A
//! completion is only applied if it carries the most recently issued
//! [`LoadTicket`]; stale completions are discarded rather than clobbering a
//! newer image.

use crate::extract::extract_region;
use crate::geometry::{Point, Rect};
use crate::mapping::map_selection;
use crate::overlay::{overlay_layout, OverlayLayout};
use crate::placement::{Placement, SurfaceSize};
use crate::source::{LoadError, SourceImage};
use thiserror::Error;

/// Error types for crop confirmation.
#[derive(Debug, Error)]
pub enum CropError {
    /// Crop was confirmed without a finalized selection.
    #[error("Please select a crop area first")]
    NoSelection,
}

/// Identifies one load request so stale completions can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(&self) -> u64 {
        self.0
    }

    /// Rebuild a ticket from its raw id after crossing an FFI boundary.
    pub fn from_id(id: u64) -> Self {
        Self(id)
    }
}

/// The selection gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Gesture {
    #[default]
    Idle,
    Dragging {
        start: Point,
        current: Point,
    },
    Finalized(Rect),
}

/// State for one crop widget instance.
#[derive(Debug, Default)]
pub struct CropSession {
    image: Option<SourceImage>,
    surface: SurfaceSize,
    placement: Option<Placement>,
    gesture: Gesture,
    loading: bool,
    load_seq: u64,
}

impl CropSession {
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            ..Default::default()
        }
    }

    /// The currently loaded source image, if any.
    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// Current letterbox placement. Present exactly when an image is loaded.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Whether a load is in flight (the load control is disabled meanwhile).
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Change the surface size, recomputing the placement.
    pub fn set_surface_size(&mut self, surface: SurfaceSize) {
        self.surface = surface;
        self.placement = self
            .image
            .as_ref()
            .map(|img| Placement::letterbox(img.width as f64, img.height as f64, surface));
    }

    /// Issue a ticket for a new load and disable the load control.
    ///
    /// Issuing a new ticket supersedes any in-flight load; the superseded
    /// completion will be discarded when it arrives.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.loading = true;
        LoadTicket(self.load_seq)
    }

    /// Apply a settled load.
    ///
    /// Returns `Ok(false)` when the ticket is stale (a newer load was
    /// requested after this one) and the completion was discarded. For the
    /// latest ticket: a successful load replaces the image wholesale,
    /// recomputes the placement, and clears any selection; a failed load
    /// clears the image and propagates the error for display.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<SourceImage, LoadError>,
    ) -> Result<bool, LoadError> {
        if ticket.0 != self.load_seq {
            return Ok(false);
        }
        self.loading = false;
        self.gesture = Gesture::Idle;

        match result {
            Ok(image) => {
                self.placement = Some(Placement::letterbox(
                    image.width as f64,
                    image.height as f64,
                    self.surface,
                ));
                self.image = Some(image);
                Ok(true)
            }
            Err(e) => {
                self.image = None;
                self.placement = None;
                Err(e)
            }
        }
    }

    /// Start a selection drag. Ignored while no image is loaded.
    pub fn pointer_down(&mut self, pos: Point) {
        if self.image.is_none() {
            return;
        }
        self.gesture = Gesture::Dragging {
            start: pos,
            current: pos,
        };
    }

    /// Update the active drag. Ignored outside a drag.
    pub fn pointer_move(&mut self, pos: Point) {
        if let Gesture::Dragging { start, .. } = self.gesture {
            self.gesture = Gesture::Dragging {
                start,
                current: pos,
            };
        }
    }

    /// End the gesture, finalizing the selection if it has area.
    pub fn pointer_up(&mut self, pos: Point) {
        if let Gesture::Dragging { start, .. } = self.gesture {
            let rect = Rect::from_drag(start, pos);
            self.gesture = if rect.is_empty() {
                Gesture::Idle
            } else {
                Gesture::Finalized(rect)
            };
        }
    }

    /// The selection to draw this frame: the live drag rectangle while
    /// dragging, or the finalized rectangle. Empty rectangles are not
    /// drawn and yield `None`.
    pub fn selection(&self) -> Option<Rect> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging { start, current } => {
                let rect = Rect::from_drag(start, current);
                (!rect.is_empty()).then_some(rect)
            }
            Gesture::Finalized(rect) => Some(rect),
        }
    }

    /// Overlay layout for the current selection, if there is one.
    pub fn overlay(&self) -> Option<OverlayLayout> {
        self.selection()
            .map(|sel| overlay_layout(self.surface, &sel))
    }

    /// Map the finalized selection into source space and extract the
    /// cropped pixels at 1:1 source resolution.
    ///
    /// The selection stays in place so the user can re-confirm or replace
    /// it with a new gesture.
    pub fn confirm_crop(&self) -> Result<SourceImage, CropError> {
        let (Gesture::Finalized(selection), Some(image), Some(placement)) =
            (self.gesture, self.image.as_ref(), self.placement)
        else {
            return Err(CropError::NoSelection);
        };

        let region = map_selection(
            &selection,
            &placement,
            image.width as f64,
            image.height as f64,
        );
        Ok(extract_region(image, &region))
    }
}
