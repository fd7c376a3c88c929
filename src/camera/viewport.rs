//! The view a rotation session operates on: pixel region, navigation
//! mode, free-view orientation and the scene camera.

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::core::{FreeView, SceneCamera};

/// Projected points with `w` at or below this are treated as behind the
/// viewer.
const MIN_CLIP_W: f32 = 1e-6;

/// Viewport pixel rectangle. Pixel space is y-down with the origin at
/// the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Region {
    /// Region of the given pixel size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Exact center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Width / height, or 1.0 for an empty region.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Project a world-space point to region pixels.
///
/// Returns `None` when the point lies behind the viewer or the result is
/// not finite.
#[must_use]
pub fn project_point(view_proj: Mat4, region: Region, point: Vec3) -> Option<Vec2> {
    let clip: Vec4 = view_proj * point.extend(1.0);
    if clip.w <= MIN_CLIP_W {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    let pixel = Vec2::new(
        (ndc.x + 1.0) * 0.5 * region.width,
        (1.0 - ndc.y) * 0.5 * region.height,
    );
    pixel.is_finite().then_some(pixel)
}

/// How the viewport is currently navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPerspective {
    /// Free navigation, perspective projection.
    #[default]
    Perspective,
    /// Free navigation, orthographic projection.
    Orthographic,
    /// Looking through the scene camera.
    Camera,
}

/// A 3D viewport: everything a rotation session reads or writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Pixel rectangle of the view.
    pub region: Region,
    /// Current navigation mode.
    pub perspective: ViewPerspective,
    /// Free-navigation orientation.
    pub free_view: FreeView,
    /// The scene's active camera, if any.
    pub scene_camera: Option<SceneCamera>,
    /// Zoom of the camera frame inside the region in camera view.
    pub camera_zoom: f32,
    /// Pan of the camera frame inside the region, in NDC units.
    pub camera_offset: Vec2,
}

impl Viewport {
    /// Free-navigation viewport of the given size with no scene camera.
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            region,
            perspective: ViewPerspective::default(),
            free_view: FreeView::default(),
            scene_camera: None,
            camera_zoom: 1.0,
            camera_offset: Vec2::ZERO,
        }
    }

    /// Update the pixel size, e.g. on window resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.region = Region::new(width, height);
    }

    /// The scene camera, when the view is looking through it.
    #[must_use]
    pub fn active_camera(&self) -> Option<&SceneCamera> {
        match self.perspective {
            ViewPerspective::Camera => self.scene_camera.as_ref(),
            ViewPerspective::Perspective | ViewPerspective::Orthographic => {
                None
            }
        }
    }

    /// Mutable access to the scene camera when the view is looking
    /// through it.
    pub fn active_camera_mut(&mut self) -> Option<&mut SceneCamera> {
        match self.perspective {
            ViewPerspective::Camera => self.scene_camera.as_mut(),
            ViewPerspective::Perspective | ViewPerspective::Orthographic => {
                None
            }
        }
    }

    /// World-to-clip matrix for the current navigation mode.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        let aspect = self.region.aspect();
        if let Some(camera) = self.active_camera() {
            let frame = Mat4::from_translation(self.camera_offset.extend(0.0))
                * Mat4::from_scale(Vec3::new(
                    self.camera_zoom,
                    self.camera_zoom,
                    1.0,
                ));
            return frame
                * camera.projection(aspect)
                * camera.world_matrix().inverse();
        }

        let view = self.free_view.view_matrix();
        match self.perspective {
            ViewPerspective::Orthographic => {
                let half_h = self.free_view.distance
                    * (self.free_view.fovy.to_radians() * 0.5).tan();
                let half_w = half_h * aspect;
                Mat4::orthographic_rh(
                    -half_w,
                    half_w,
                    -half_h,
                    half_h,
                    self.free_view.znear,
                    self.free_view.zfar,
                ) * view
            }
            ViewPerspective::Perspective | ViewPerspective::Camera => {
                self.free_view.projection(aspect) * view
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_center_and_aspect() {
        let region = Region::new(800.0, 600.0);
        assert_eq!(region.center(), Vec2::new(400.0, 300.0));
        assert!((region.aspect() - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(Region::new(10.0, 0.0).aspect(), 1.0);
    }

    #[test]
    fn point_ahead_of_free_view_projects_to_center() {
        let viewport = Viewport::new(Region::new(800.0, 600.0));
        let vp = viewport.view_projection();
        let pixel =
            project_point(vp, viewport.region, viewport.free_view.focus)
                .unwrap();
        assert!((pixel - Vec2::new(400.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn point_behind_viewer_does_not_project() {
        let viewport = Viewport::new(Region::new(800.0, 600.0));
        let vp = viewport.view_projection();
        let behind = viewport.free_view.eye() - viewport.free_view.forward();
        assert!(project_point(vp, viewport.region, behind).is_none());
    }

    #[test]
    fn active_camera_requires_camera_perspective() {
        let mut viewport = Viewport::new(Region::new(800.0, 600.0));
        viewport.scene_camera = Some(SceneCamera::default());
        assert!(viewport.active_camera().is_none());
        viewport.perspective = ViewPerspective::Camera;
        assert!(viewport.active_camera().is_some());
    }
}
