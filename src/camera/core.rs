use glam::{EulerRot, Mat4, Quat, Vec3};

/// Euler axis order used when a rotation is edited as three angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EulerOrder {
    /// X, then Y, then Z.
    #[default]
    Xyz,
    /// X, then Z, then Y.
    Xzy,
    /// Y, then X, then Z.
    Yxz,
    /// Y, then Z, then X.
    Yzx,
    /// Z, then X, then Y.
    Zxy,
    /// Z, then Y, then X.
    Zyx,
}

impl EulerOrder {
    /// The matching glam Euler convention.
    #[must_use]
    pub fn to_glam(self) -> EulerRot {
        match self {
            Self::Xyz => EulerRot::XYZ,
            Self::Xzy => EulerRot::XZY,
            Self::Yxz => EulerRot::YXZ,
            Self::Yzx => EulerRot::YZX,
            Self::Zxy => EulerRot::ZXY,
            Self::Zyx => EulerRot::ZYX,
        }
    }
}

/// How the host stores and edits an object's rotation.
///
/// The transform itself is always kept as a quaternion; the mode only
/// decides which representation the host exposes for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    /// Edited as a quaternion.
    Quaternion,
    /// Edited as an axis and an angle.
    AxisAngle,
    /// Edited as three Euler angles in the given order.
    Euler(EulerOrder),
}

impl Default for RotationMode {
    fn default() -> Self {
        Self::Euler(EulerOrder::Xyz)
    }
}

/// Translation, rotation and scale of an object in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub translation: Vec3,
    /// World-space orientation (unit quaternion).
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Object placed at `translation` and oriented by `rotation`.
    #[must_use]
    pub fn from_rotation_translation(rotation: Quat, translation: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Object at `eye` whose -Z axis looks at `target`, with `up` kept
    /// as close to its +Y axis as possible.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let view = Mat4::look_at_rh(eye, target, up);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        Self::from_rotation_translation(rotation, eye)
    }

    /// Local-to-world matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }
}

/// A scene camera the viewport can look through.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCamera {
    /// World transform. The camera looks down its local -Z axis.
    pub transform: Transform,
    /// How the host edits the camera's rotation.
    pub rotation_mode: RotationMode,
    /// Per-axis rotation locks (`[x, y, z]`).
    pub lock_rotation: [bool; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Sensor width / height.
    pub sensor_aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            transform: Transform::looking_at(
                Vec3::new(0.0, -10.0, 0.0),
                Vec3::ZERO,
                Vec3::Z,
            ),
            rotation_mode: RotationMode::default(),
            lock_rotation: [false; 3],
            fovy: 40.0,
            sensor_aspect: 16.0 / 9.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl SceneCamera {
    /// Whether any rotation axis is locked.
    #[must_use]
    pub fn is_rotation_locked(&self) -> bool {
        self.lock_rotation.iter().any(|locked| *locked)
    }

    /// Local-to-world matrix.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    /// Corners of the camera frame in camera-local space, one unit in
    /// front of the lens.
    ///
    /// Ordered top-right, bottom-right, bottom-left, top-left, so index
    /// pairs (0, 2) and (1, 3) are diagonals.
    #[must_use]
    pub fn view_frame(&self) -> [Vec3; 4] {
        let half_h = (self.fovy.to_radians() * 0.5).tan();
        let half_w = half_h * self.sensor_aspect;
        [
            Vec3::new(half_w, half_h, -1.0),
            Vec3::new(half_w, -half_h, -1.0),
            Vec3::new(-half_w, -half_h, -1.0),
            Vec3::new(-half_w, half_h, -1.0),
        ]
    }

    /// Projection matrix for a viewport of the given aspect ratio.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, self.znear, self.zfar)
    }
}

/// Orientation of a freely navigated viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeView {
    /// View-to-world rotation. The view looks down its local -Z axis.
    pub rotation: Quat,
    /// Point the view orbits around.
    pub focus: Vec3,
    /// Distance from the focus point to the eye.
    pub distance: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for FreeView {
    fn default() -> Self {
        Self {
            rotation: Quat::from_rotation_x(60.0_f32.to_radians()),
            focus: Vec3::ZERO,
            distance: 15.0,
            fovy: 50.0,
            znear: 0.01,
            zfar: 1000.0,
        }
    }
}

impl FreeView {
    /// Direction the view looks along, in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.focus + self.rotation * Vec3::Z * self.distance
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.eye()).inverse()
    }

    /// Projection matrix for a viewport of the given aspect ratio.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, self.znear, self.zfar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_frame_diagonals_share_a_midpoint() {
        let camera = SceneCamera::default();
        let frame = camera.view_frame();
        let mid_a = (frame[0] + frame[2]) * 0.5;
        let mid_b = (frame[1] + frame[3]) * 0.5;
        assert!((mid_a - mid_b).length() < 1e-6);
        assert!((mid_a - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn looking_at_points_negative_z_at_target() {
        let t = Transform::looking_at(
            Vec3::new(0.0, -10.0, 0.0),
            Vec3::ZERO,
            Vec3::Z,
        );
        let forward = t.rotation * Vec3::NEG_Z;
        assert!((forward - Vec3::Y).length() < 1e-5);
        let up = t.rotation * Vec3::Y;
        assert!((up - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn rotation_lock_detection() {
        let mut camera = SceneCamera::default();
        assert!(!camera.is_rotation_locked());
        camera.lock_rotation = [false, false, true];
        assert!(camera.is_rotation_locked());
    }

    #[test]
    fn free_view_eye_sits_behind_forward() {
        let view = FreeView::default();
        let to_focus = (view.focus - view.eye()).normalize();
        assert!((to_focus - view.forward()).length() < 1e-5);
    }
}
