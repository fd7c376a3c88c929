//! The rotation session state machine.
//!
//! `Idle → Active → {Finished, Cancelled}`. A session starts on the
//! trigger press, follows pointer moves while active, and ends on a button
//! release (keep the rotation) or escape (restore the snapshot). The host
//! pushes events in one at a time; nothing here blocks or spawns.

use glam::Vec2;

use super::geometry::{direction, signed_angle};
use super::target::RotationTarget;
use crate::camera::Viewport;
use crate::error::ViewRollError;
use crate::input::MouseButton;
use crate::overlay::{HudOverlay, OverlayFrame, OverlayRegistration};

/// Outcome of invoking the rotate action or feeding it an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorStatus {
    /// A session is active and waiting for more events.
    Running,
    /// The session ended and its rotation was kept.
    Finished,
    /// The session ended and the view was restored.
    Cancelled,
}

/// Events a running session reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationEvent {
    /// Pointer moved to a region-pixel position.
    PointerMoved(Vec2),
    /// A pointer button was released.
    Release(MouseButton),
    /// The cancel key was pressed.
    Escape,
}

/// State of one rotation interaction, from trigger press to release or
/// cancel.
#[derive(Debug)]
pub struct Session {
    target: RotationTarget,
    pivot: Vec2,
    initial_point: Vec2,
    /// `None` until the pointer has left the pivot.
    initial_direction: Option<Vec2>,
    current_point: Vec2,
    current_direction: Option<Vec2>,
    angle: f32,
    overlay: Option<OverlayRegistration>,
}

impl Session {
    /// The target variant and its captured snapshot.
    #[must_use]
    pub fn target(&self) -> &RotationTarget {
        &self.target
    }

    /// Fixed rotation center in region pixels.
    #[must_use]
    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Direction from the pivot to the pointer at session start.
    #[must_use]
    pub fn initial_direction(&self) -> Option<Vec2> {
        self.initial_direction
    }

    /// Latest valid direction from the pivot to the pointer.
    #[must_use]
    pub fn current_direction(&self) -> Option<Vec2> {
        self.current_direction
    }

    /// Latest pointer position.
    #[must_use]
    pub fn current_point(&self) -> Vec2 {
        self.current_point
    }

    /// Signed angle from the initial to the current direction.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Snapshot of the state the feedback overlay draws.
    #[must_use]
    pub fn overlay_frame(&self) -> OverlayFrame {
        OverlayFrame {
            pivot: self.pivot,
            initial_point: self.initial_point,
            initial_direction: self.initial_direction.unwrap_or(Vec2::ZERO),
            current_point: self.current_point,
            angle: self.angle,
        }
    }

    fn track_pointer(&mut self, point: Vec2) {
        self.current_point = point;
        let Ok(current) = direction(self.pivot, point) else {
            return;
        };
        self.current_direction = Some(current);
        match self.initial_direction {
            Some(initial) => self.angle = signed_angle(initial, current),
            None => self.initial_direction = Some(current),
        }
    }
}

/// Drives one rotation session at a time for a single view.
#[derive(Debug, Default)]
pub struct RotationController {
    session: Option<Session>,
}

impl RotationController {
    /// Idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The running session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Start a session with the pointer at `pointer`.
    ///
    /// Picks the target from the view, captures its snapshot, fixes the
    /// pivot and the initial direction. When `hud` is given the session
    /// shows feedback on it until it ends.
    ///
    /// # Errors
    ///
    /// - [`ViewRollError::SessionActive`] if a session is already running.
    /// - [`ViewRollError::LockedAxis`] if the scene camera has a locked
    ///   rotation axis; nothing is modified and the controller stays idle.
    pub fn begin(
        &mut self,
        viewport: &mut Viewport,
        pointer: Vec2,
        hud: Option<&HudOverlay>,
    ) -> Result<OperatorStatus, ViewRollError> {
        if self.session.is_some() {
            return Err(ViewRollError::SessionActive);
        }

        let target = RotationTarget::capture(viewport).inspect_err(|e| {
            log::warn!("{e}");
        })?;
        let pivot = target.pivot(viewport);
        let initial_direction = direction(pivot, pointer).ok();

        let mut session = Session {
            target,
            pivot,
            initial_point: pointer,
            initial_direction,
            current_point: pointer,
            current_direction: initial_direction,
            angle: 0.0,
            overlay: None,
        };
        session.overlay =
            hud.map(|overlay| overlay.register(session.overlay_frame()));

        log::debug!(
            "rotation session started (camera: {}, pivot: {pivot})",
            session.target.is_camera()
        );
        self.session = Some(session);
        Ok(OperatorStatus::Running)
    }

    /// Feed an event to the running session.
    ///
    /// # Errors
    ///
    /// [`ViewRollError::NoSession`] if no session is running.
    pub fn handle_event(
        &mut self,
        viewport: &mut Viewport,
        event: RotationEvent,
    ) -> Result<OperatorStatus, ViewRollError> {
        let session =
            self.session.as_mut().ok_or(ViewRollError::NoSession)?;

        match event {
            RotationEvent::PointerMoved(point) => {
                session.track_pointer(point);
                session.target.apply(viewport, session.angle);
                if let Some(overlay) = &session.overlay {
                    overlay.update(session.overlay_frame());
                }
                Ok(OperatorStatus::Running)
            }
            RotationEvent::Release(_) => {
                if session.angle == 0.0 {
                    session.target.reset_forward(viewport);
                }
                Ok(self.end(viewport, OperatorStatus::Finished))
            }
            RotationEvent::Escape => {
                session.target.restore(viewport);
                Ok(self.end(viewport, OperatorStatus::Cancelled))
            }
        }
    }

    /// Shared exit path: drop the overlay claim and undo session-only
    /// target state.
    fn end(
        &mut self,
        viewport: &mut Viewport,
        status: OperatorStatus,
    ) -> OperatorStatus {
        if let Some(session) = self.session.take() {
            session.target.finish(viewport);
            log::debug!(
                "rotation session ended ({status:?}, angle: {:.1}°)",
                session.angle.to_degrees()
            );
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    use glam::{Quat, Vec3};

    use super::*;
    use crate::camera::{
        EulerOrder, Region, RotationMode, SceneCamera, ViewPerspective,
    };
    use crate::rotation::target::CameraSnapshot;

    const EPS: f32 = 1e-4;

    fn free_viewport() -> Viewport {
        Viewport::new(Region::new(800.0, 600.0))
    }

    fn camera_viewport() -> Viewport {
        let mut viewport = free_viewport();
        viewport.perspective = ViewPerspective::Camera;
        viewport.scene_camera = Some(SceneCamera {
            rotation_mode: RotationMode::Quaternion,
            ..SceneCamera::default()
        });
        viewport
    }

    fn camera(viewport: &Viewport) -> &SceneCamera {
        viewport.scene_camera.as_ref().unwrap()
    }

    #[test]
    fn free_view_quarter_turn() {
        let mut viewport = free_viewport();
        let start = viewport.free_view.rotation;
        let mut controller = RotationController::new();
        let status = controller
            .begin(&mut viewport, Vec2::new(500.0, 300.0), None)
            .unwrap();
        assert_eq!(status, OperatorStatus::Running);

        let session = controller.session().unwrap();
        assert_eq!(session.pivot(), Vec2::new(400.0, 300.0));
        assert_eq!(session.initial_direction(), Some(Vec2::X));

        let status = controller
            .handle_event(
                &mut viewport,
                RotationEvent::PointerMoved(Vec2::new(400.0, 400.0)),
            )
            .unwrap();
        assert_eq!(status, OperatorStatus::Running);
        let session = controller.session().unwrap();
        assert_eq!(session.current_direction(), Some(Vec2::Y));
        assert!((session.angle() + FRAC_PI_2).abs() < EPS);

        let expected = start * Quat::from_rotation_z(-FRAC_PI_2);
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            let got = viewport.free_view.rotation * axis;
            assert!((got - expected * axis).length() < EPS);
        }
        assert!(
            (viewport.free_view.rotation.angle_between(start) - FRAC_PI_2)
                .abs()
                < EPS
        );
    }

    #[test]
    fn locked_camera_refuses_session() {
        let mut viewport = camera_viewport();
        viewport.scene_camera.as_mut().unwrap().lock_rotation =
            [true, false, false];
        let before = camera(&viewport).clone();
        let hud = HudOverlay::new();

        let mut controller = RotationController::new();
        let result =
            controller.begin(&mut viewport, Vec2::new(500.0, 300.0), Some(&hud));

        assert!(matches!(result, Err(ViewRollError::LockedAxis(_))));
        assert!(!controller.is_active());
        assert!(!hud.is_registered());
        assert_eq!(camera(&viewport), &before);
    }

    #[test]
    fn escape_restores_camera_and_mode() {
        let mut viewport = camera_viewport();
        let before = camera(&viewport).clone();
        let mut controller = RotationController::new();
        let _ = controller
            .begin(&mut viewport, Vec2::new(500.0, 300.0), None)
            .unwrap();
        assert_eq!(
            camera(&viewport).rotation_mode,
            RotationMode::Euler(EulerOrder::Xyz)
        );

        // 45° counter-clockwise on screen from the right of the pivot.
        let _ = controller
            .handle_event(
                &mut viewport,
                RotationEvent::PointerMoved(Vec2::new(500.0, 200.0)),
            )
            .unwrap();
        assert!((controller.session().unwrap().angle() - FRAC_PI_4).abs() < EPS);
        assert_ne!(camera(&viewport).transform, before.transform);

        let status = controller
            .handle_event(&mut viewport, RotationEvent::Escape)
            .unwrap();
        assert_eq!(status, OperatorStatus::Cancelled);
        assert!(!controller.is_active());
        assert_eq!(camera(&viewport), &before);
    }

    #[test]
    fn escape_after_leaving_camera_view_still_restores_camera() {
        let mut viewport = camera_viewport();
        let before = camera(&viewport).clone();
        let mut controller = RotationController::new();
        let _ = controller
            .begin(&mut viewport, Vec2::new(500.0, 300.0), None)
            .unwrap();
        let _ = controller
            .handle_event(
                &mut viewport,
                RotationEvent::PointerMoved(Vec2::new(400.0, 200.0)),
            )
            .unwrap();
        assert_ne!(camera(&viewport).transform, before.transform);

        viewport.perspective = ViewPerspective::Perspective;
        let status = controller
            .handle_event(&mut viewport, RotationEvent::Escape)
            .unwrap();
        assert_eq!(status, OperatorStatus::Cancelled);
        assert_eq!(camera(&viewport), &before);
    }

    #[test]
    fn release_keeps_camera_rotation_and_restores_mode() {
        let mut viewport = camera_viewport();
        let mut controller = RotationController::new();
        let _ = controller
            .begin(&mut viewport, Vec2::new(500.0, 300.0), None)
            .unwrap();
        let _ = controller
            .handle_event(
                &mut viewport,
                RotationEvent::PointerMoved(Vec2::new(400.0, 200.0)),
            )
            .unwrap();
        let rotated = camera(&viewport).transform;

        let status = controller
            .handle_event(&mut viewport, RotationEvent::Release(MouseButton::Right))
            .unwrap();
        assert_eq!(status, OperatorStatus::Finished);
        assert_eq!(camera(&viewport).transform, rotated);
        assert_eq!(camera(&viewport).rotation_mode, RotationMode::Quaternion);
    }

    #[test]
    fn release_without_motion_levels_free_view() {
        let mut viewport = free_viewport();
        // Rolled view looking diagonally down.
        viewport.free_view.rotation = Quat::from_rotation_x(1.0)
            * Quat::from_rotation_z(0.4)
            * Quat::from_rotation_y(0.3);
        let aim = viewport.free_view.rotation * Vec3::Z;

        let mut controller = RotationController::new();
        let _ = controller
            .begin(&mut viewport, Vec2::new(600.0, 100.0), None)
            .unwrap();
        let status = controller
            .handle_event(&mut viewport, RotationEvent::Release(MouseButton::Left))
            .unwrap();

        assert_eq!(status, OperatorStatus::Finished);
        let rotation = viewport.free_view.rotation;
        assert!((rotation * Vec3::Z - aim).length() < EPS);
        assert!((rotation * Vec3::X).z.abs() < EPS);
    }

    #[test]
    fn release_without_motion_leaves_camera_alone() {
        let mut viewport = camera_viewport();
        let before = camera(&viewport).clone();
        let mut controller = RotationController::new();
        let _ = controller
            .begin(&mut viewport, Vec2::new(500.0, 300.0), None)
            .unwrap();
        let _ = controller
            .handle_event(&mut viewport, RotationEvent::Release(MouseButton::Middle))
            .unwrap();
        assert_eq!(camera(&viewport), &before);
    }

    #[test]
    fn pointer_on_pivot_holds_last_direction() {
        let mut viewport = free_viewport();
        let mut controller = RotationController::new();
        let _ = controller
            .begin(&mut viewport, Vec2::new(500.0, 300.0), None)
            .unwrap();
        let _ = controller
            .handle_event(
                &mut viewport,
                RotationEvent::PointerMoved(Vec2::new(400.0, 200.0)),
            )
            .unwrap();
        let held = viewport.free_view.rotation;

        let status = controller
            .handle_event(
                &mut viewport,
                RotationEvent::PointerMoved(Vec2::new(400.0, 300.0)),
            )
            .unwrap();
        assert_eq!(status, OperatorStatus::Running);
        let session = controller.session().unwrap();
        assert_eq!(session.current_direction(), Some(Vec2::NEG_Y));
        assert_eq!(session.current_point(), Vec2::new(400.0, 300.0));
        assert!((session.angle() - FRAC_PI_2).abs() < EPS);
        assert_eq!(viewport.free_view.rotation, held);
    }

    #[test]
    fn session_started_on_pivot_takes_first_direction_as_initial() {
        let mut viewport = free_viewport();
        let mut controller = RotationController::new();
        let _ = controller
            .begin(&mut viewport, Vec2::new(400.0, 300.0), None)
            .unwrap();
        assert_eq!(controller.session().unwrap().initial_direction(), None);

        let _ = controller
            .handle_event(
                &mut viewport,
                RotationEvent::PointerMoved(Vec2::new(400.0, 250.0)),
            )
            .unwrap();
        let session = controller.session().unwrap();
        assert_eq!(session.initial_direction(), Some(Vec2::NEG_Y));
        assert_eq!(session.angle(), 0.0);
    }

    #[test]
    fn second_session_captures_state_left_by_first() {
        let mut viewport = camera_viewport();
        let mut controller = RotationController::new();
        let _ = controller
            .begin(&mut viewport, Vec2::new(500.0, 300.0), None)
            .unwrap();
        let _ = controller
            .handle_event(
                &mut viewport,
                RotationEvent::PointerMoved(Vec2::new(400.0, 200.0)),
            )
            .unwrap();
        let _ = controller
            .handle_event(&mut viewport, RotationEvent::Release(MouseButton::Right))
            .unwrap();
        let after_first = camera(&viewport).transform;

        let _ = controller
            .begin(&mut viewport, Vec2::new(500.0, 300.0), None)
            .unwrap();
        assert_eq!(
            *controller.session().unwrap().target(),
            RotationTarget::Camera(CameraSnapshot {
                transform: after_first,
                rotation_mode: RotationMode::Quaternion,
            })
        );

        let _ = controller
            .handle_event(&mut viewport, RotationEvent::Escape)
            .unwrap();
        assert_eq!(camera(&viewport).transform, after_first);
    }

    #[test]
    fn second_begin_while_active_is_refused() {
        let mut viewport = free_viewport();
        let mut controller = RotationController::new();
        let _ = controller
            .begin(&mut viewport, Vec2::new(500.0, 300.0), None)
            .unwrap();
        assert!(matches!(
            controller.begin(&mut viewport, Vec2::new(10.0, 10.0), None),
            Err(ViewRollError::SessionActive)
        ));
        assert_eq!(
            controller.session().unwrap().initial_direction(),
            Some(Vec2::X)
        );
    }

    #[test]
    fn events_without_session_are_rejected() {
        let mut viewport = free_viewport();
        let mut controller = RotationController::new();
        assert!(matches!(
            controller.handle_event(&mut viewport, RotationEvent::Escape),
            Err(ViewRollError::NoSession)
        ));
    }

    #[test]
    fn hud_follows_session_and_is_released_on_every_exit() {
        let hud = HudOverlay::new();
        for exit in [RotationEvent::Escape, RotationEvent::Release(MouseButton::Left)] {
            let mut viewport = free_viewport();
            let mut controller = RotationController::new();
            let _ = controller
                .begin(&mut viewport, Vec2::new(500.0, 300.0), Some(&hud))
                .unwrap();
            assert!(hud.is_registered());

            let _ = controller
                .handle_event(
                    &mut viewport,
                    RotationEvent::PointerMoved(Vec2::new(400.0, 400.0)),
                )
                .unwrap();
            let frame = hud.frame().unwrap();
            assert_eq!(frame.pivot, Vec2::new(400.0, 300.0));
            assert_eq!(frame.current_point, Vec2::new(400.0, 400.0));
            assert_eq!(frame.label(), "angle: -90.0");

            let _ = controller.handle_event(&mut viewport, exit).unwrap();
            assert!(!hud.is_registered());
        }
    }
}
