//! What a rotation session rotates: the scene camera the view looks
//! through, or the free-navigation orientation.
//!
//! The variant is picked once when the session starts. Every later call
//! addresses that same object, even if the viewport has since left camera
//! view, and works from the snapshot captured at that point. Applying the
//! same angle twice gives the same result and cancelling restores the
//! exact starting state.

use glam::{Mat3, Quat, Vec2, Vec3};

use super::geometry::project_frame_center;
use crate::camera::{EulerOrder, RotationMode, Transform, Viewport};
use crate::error::ViewRollError;

/// World up used when levelling a reset view.
const WORLD_UP: Vec3 = Vec3::Z;

/// Camera state captured at session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSnapshot {
    /// Camera world transform before the session.
    pub transform: Transform,
    /// Rotation mode before the session forced it to Euler.
    pub rotation_mode: RotationMode,
}

/// Free-view state captured at session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeViewSnapshot {
    /// View rotation before the session.
    pub rotation: Quat,
}

/// The object a rotation session drives, with its captured snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationTarget {
    /// The scene camera the viewport is looking through.
    Camera(CameraSnapshot),
    /// The free-navigation view orientation.
    FreeView(FreeViewSnapshot),
}

impl RotationTarget {
    /// Pick the target for the current view and capture its state.
    ///
    /// Looking through a scene camera selects the camera; anything else
    /// selects the free view. A camera capture switches the camera to
    /// Euler rotation mode until [`finish`](Self::finish).
    ///
    /// # Errors
    ///
    /// [`ViewRollError::LockedAxis`] if the camera has any rotation axis
    /// locked. The viewport is left untouched in that case.
    pub fn capture(viewport: &mut Viewport) -> Result<Self, ViewRollError> {
        if let Some(camera) = viewport.active_camera_mut() {
            if camera.is_rotation_locked() {
                return Err(ViewRollError::LockedAxis(camera.lock_rotation));
            }
            let snapshot = CameraSnapshot {
                transform: camera.transform,
                rotation_mode: camera.rotation_mode,
            };
            camera.rotation_mode = RotationMode::Euler(EulerOrder::Xyz);
            return Ok(Self::Camera(snapshot));
        }

        Ok(Self::FreeView(FreeViewSnapshot {
            rotation: viewport.free_view.rotation,
        }))
    }

    /// Screen point the session measures angles around.
    ///
    /// For the camera this is the projected center of its frame; if the
    /// frame does not project cleanly the region center is used instead.
    /// For the free view it is the region center.
    #[must_use]
    pub fn pivot(&self, viewport: &Viewport) -> Vec2 {
        let fallback = viewport.region.center();
        match self {
            Self::Camera(_) => {
                let Some(camera) = viewport.active_camera() else {
                    return fallback;
                };
                project_frame_center(
                    &camera.view_frame(),
                    camera.world_matrix(),
                    viewport.view_projection(),
                    viewport.region,
                )
                .unwrap_or_else(|e| {
                    log::debug!("camera pivot falls back to region center: {e}");
                    fallback
                })
            }
            Self::FreeView(_) => fallback,
        }
    }

    /// Roll the target `angle` radians about its local Z axis, measured
    /// from the captured snapshot.
    pub fn apply(&self, viewport: &mut Viewport, angle: f32) {
        let roll = Quat::from_rotation_z(angle);
        match self {
            Self::Camera(snapshot) => {
                if let Some(camera) = viewport.scene_camera.as_mut() {
                    camera.transform = Transform {
                        rotation: (snapshot.transform.rotation * roll)
                            .normalize(),
                        ..snapshot.transform
                    };
                }
            }
            Self::FreeView(snapshot) => {
                viewport.free_view.rotation =
                    (snapshot.rotation * roll).normalize();
            }
        }
    }

    /// Put the target back exactly as captured, rotation mode included.
    pub fn restore(&self, viewport: &mut Viewport) {
        match self {
            Self::Camera(snapshot) => {
                if let Some(camera) = viewport.scene_camera.as_mut() {
                    camera.transform = snapshot.transform;
                    camera.rotation_mode = snapshot.rotation_mode;
                }
            }
            Self::FreeView(snapshot) => {
                viewport.free_view.rotation = snapshot.rotation;
            }
        }
    }

    /// Undo the session-only side effects while keeping the applied
    /// rotation. For the camera this restores the original rotation
    /// mode.
    pub fn finish(&self, viewport: &mut Viewport) {
        if let Self::Camera(snapshot) = self {
            if let Some(camera) = viewport.scene_camera.as_mut() {
                camera.rotation_mode = snapshot.rotation_mode;
            }
        }
    }

    /// Re-level a free view that was released without rotating: keep its
    /// view axis and bring its up axis as close to world up as possible.
    /// Does nothing for the camera.
    pub fn reset_forward(&self, viewport: &mut Viewport) {
        if let Self::FreeView(_) = self {
            let aim = viewport.free_view.rotation * Vec3::Z;
            viewport.free_view.rotation = track_z_up_y(aim);
        }
    }

    /// Whether this session drives the scene camera.
    #[must_use]
    pub fn is_camera(&self) -> bool {
        matches!(self, Self::Camera(_))
    }
}

/// Rotation whose local +Z points along `aim` and whose local +Y leans
/// toward world up.
fn track_z_up_y(aim: Vec3) -> Quat {
    let Some(z) = aim.try_normalize() else {
        return Quat::IDENTITY;
    };
    let up = if z.cross(WORLD_UP).length_squared() > 1e-10 {
        WORLD_UP
    } else {
        Vec3::Y
    };
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}
