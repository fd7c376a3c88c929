//! On-screen feedback for a running rotation session: two lines from the
//! pivot (to the initial and the current pointer position) and an angle
//! readout.
//!
//! The host owns a [`HudOverlay`] and draws whatever [`HudOverlay::frame`]
//! returns. A session holds an [`OverlayRegistration`] for its lifetime;
//! dropping the registration clears the overlay, so every way out of a
//! session releases it.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::options::HudOptions;

/// Read-only session state the overlay draws from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    /// Rotation pivot in region pixels.
    pub pivot: Vec2,
    /// Pointer position when the session started.
    pub initial_point: Vec2,
    /// Unit direction from the pivot to `initial_point`.
    pub initial_direction: Vec2,
    /// Latest pointer position.
    pub current_point: Vec2,
    /// Signed angle in radians.
    pub angle: f32,
}

impl OverlayFrame {
    /// Pivot→initial and pivot→current line segments.
    #[must_use]
    pub fn segments(&self) -> [(Vec2, Vec2); 2] {
        [
            (self.pivot, self.initial_point),
            (self.pivot, self.current_point),
        ]
    }

    /// Angle readout in degrees.
    #[must_use]
    pub fn label(&self) -> String {
        format!("angle: {:.1}", self.angle.to_degrees())
    }
}

/// Host-owned overlay slot. Cloning shares the slot.
#[derive(Debug, Clone, Default)]
pub struct HudOverlay {
    slot: Rc<RefCell<Option<OverlayFrame>>>,
}

impl HudOverlay {
    /// Empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the overlay for a session, starting from `frame`.
    #[must_use]
    pub fn register(&self, frame: OverlayFrame) -> OverlayRegistration {
        *self.slot.borrow_mut() = Some(frame);
        OverlayRegistration {
            slot: Rc::clone(&self.slot),
        }
    }

    /// What to draw this frame, if a session is showing feedback.
    #[must_use]
    pub fn frame(&self) -> Option<OverlayFrame> {
        *self.slot.borrow()
    }

    /// Whether a session currently holds the overlay.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

/// A session's claim on the [`HudOverlay`]. Dropping it clears the
/// overlay.
#[derive(Debug)]
pub struct OverlayRegistration {
    slot: Rc<RefCell<Option<OverlayFrame>>>,
}

impl OverlayRegistration {
    /// Replace the frame being shown.
    pub fn update(&self, frame: OverlayFrame) {
        *self.slot.borrow_mut() = Some(frame);
    }
}

impl Drop for OverlayRegistration {
    fn drop(&mut self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Colors and placement for drawing an [`OverlayFrame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStyle {
    /// RGBA of the pivot→initial line.
    pub initial_color: [f32; 4],
    /// RGBA of the pivot→current line.
    pub current_color: [f32; 4],
    /// Line width in pixels.
    pub line_width: f32,
    /// Label anchor in region pixels.
    pub label_position: Vec2,
    /// Label font size in points.
    pub label_size: f32,
}

impl From<&HudOptions> for HudStyle {
    fn from(options: &HudOptions) -> Self {
        Self {
            initial_color: options.initial_color,
            current_color: options.current_color,
            line_width: options.line_width,
            label_position: Vec2::from_array(options.label_position),
            label_size: options.label_size,
        }
    }
}
