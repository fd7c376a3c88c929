//! Screen-space geometry for view rotation: pivot projection, pointer
//! directions and signed angles.

use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

use crate::camera::{project_point, Region};
use crate::error::ViewRollError;

/// Screen-space center of a camera frame.
///
/// `corners` are the frame corners in camera-local space (see
/// [`SceneCamera::view_frame`](crate::camera::SceneCamera::view_frame)),
/// `world` is the camera's local-to-world matrix and `view_proj` the
/// viewport's world-to-clip matrix. The center is the mean of the two
/// diagonal midpoints (pairs (0, 2) and (1, 3)).
///
/// # Errors
///
/// [`ViewRollError::DegenerateProjection`] if any corner lies behind the
/// viewer or projects to a non-finite position.
pub fn project_frame_center(
    corners: &[Vec3; 4],
    world: Mat4,
    view_proj: Mat4,
    region: Region,
) -> Result<Vec2, ViewRollError> {
    let mut pixels = [Vec2::ZERO; 4];
    for (pixel, corner) in pixels.iter_mut().zip(corners) {
        *pixel = project_point(view_proj, region, world.transform_point3(*corner))
            .ok_or(ViewRollError::DegenerateProjection)?;
    }
    let diagonal_a = (pixels[0] + pixels[2]) * 0.5;
    let diagonal_b = (pixels[1] + pixels[3]) * 0.5;
    Ok((diagonal_a + diagonal_b) * 0.5)
}

/// Unit vector pointing from `from` to `to`.
///
/// # Errors
///
/// [`ViewRollError::DegenerateVector`] if the points coincide.
pub fn direction(from: Vec2, to: Vec2) -> Result<Vec2, ViewRollError> {
    (to - from)
        .try_normalize()
        .ok_or(ViewRollError::DegenerateVector)
}

/// Signed angle in radians from `a` to `b`, in (−π, π].
///
/// Positive is counter-clockwise as seen on screen. Pixel space is y-down,
/// so this is the negated mathematical winding of the raw coordinates.
#[must_use]
pub fn signed_angle(a: Vec2, b: Vec2) -> f32 {
    let angle = (-a.perp_dot(b)).atan2(a.dot(b));
    if angle <= -PI {
        PI
    } else {
        angle
    }
}
