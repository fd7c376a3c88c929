//! Interactive view rotation: drag the pointer around a fixed screen pivot
//! to roll the scene camera or the free view about its forward axis.

/// Session state machine.
pub mod controller;
/// Pivot projection, pointer directions and signed angles.
pub mod geometry;
/// Camera and free-view rotation targets.
pub mod target;

pub use controller::{OperatorStatus, RotationController, RotationEvent, Session};
pub use target::{CameraSnapshot, FreeViewSnapshot, RotationTarget};
