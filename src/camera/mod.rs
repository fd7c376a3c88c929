//! Scene model for view rotation.
//!
//! Provides the scene camera and free-view orientation that a rotation
//! session drives, plus the viewport they are seen through.

/// Transforms, rotation modes, scene camera and free view.
pub mod core;
/// Viewport region, navigation mode and point projection.
pub mod viewport;

pub use self::core::{
    EulerOrder, FreeView, RotationMode, SceneCamera, Transform,
};
pub use self::viewport::{project_point, Region, ViewPerspective, Viewport};
