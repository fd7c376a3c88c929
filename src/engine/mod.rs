//! Host integration: one viewport, its preferences, its input bindings and
//! the rotation controller driving it.

mod command;

use glam::Vec2;

pub use self::command::ViewRollCommand;
use crate::camera::Viewport;
use crate::error::ViewRollError;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::overlay::{HudOverlay, HudStyle};
use crate::rotation::{OperatorStatus, RotationController, RotationEvent, Session};

/// Owns a viewport and routes input into rotation sessions on it.
///
/// The host must not modify the scene camera or the free-view
/// orientation through [`viewport_mut`](Self::viewport_mut) while
/// [`is_rotating`](Self::is_rotating) is true; the running session assumes
/// it is their only writer.
///
/// # Example
///
/// ```ignore
/// let mut engine = ViewRollEngine::new(viewport, Options::load(path)?);
/// // In the event loop:
/// match engine.handle_input(event) {
///     Ok(Some(OperatorStatus::Finished)) => request_redraw(),
///     Err(ViewRollError::LockedAxis(_)) => show_warning(),
///     _ => {}
/// }
/// ```
#[derive(Debug)]
pub struct ViewRollEngine {
    viewport: Viewport,
    options: Options,
    input: InputProcessor,
    hud: HudOverlay,
    controller: RotationController,
}

impl ViewRollEngine {
    /// Create an engine for `viewport`, binding the trigger gesture from
    /// `options`.
    #[must_use]
    pub fn new(viewport: Viewport, options: Options) -> Self {
        let input = InputProcessor::with_bindings(
            options.keybindings.clone(),
            &options.trigger,
        );
        Self {
            viewport,
            options,
            input,
            hud: HudOverlay::new(),
            controller: RotationController::new(),
        }
    }

    /// The viewport being driven.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable viewport access for host-side navigation and resizing.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Current preferences.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the preferences. A changed trigger gesture is rebound
    /// immediately; the HUD setting applies from the next session.
    pub fn set_options(&mut self, options: Options) {
        if options.trigger != self.options.trigger {
            let _ = self.input.triggers_mut().rebind(&options.trigger);
        }
        if options.keybindings != self.options.keybindings {
            self.input.set_key_bindings(options.keybindings.clone());
        }
        self.options = options;
    }

    /// The input processor, e.g. to bind extra trigger gestures.
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }

    /// Overlay the host draws from.
    #[must_use]
    pub fn hud(&self) -> &HudOverlay {
        &self.hud
    }

    /// How to draw [`hud`](Self::hud).
    #[must_use]
    pub fn hud_style(&self) -> HudStyle {
        HudStyle::from(&self.options.hud)
    }

    /// Whether a rotation session is running.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.controller.is_active()
    }

    /// The running session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.controller.session()
    }

    /// Process a platform-agnostic input event.
    ///
    /// Returns the operator status when the event started, advanced or
    /// ended a session, `None` when it had nothing to do with rotation.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn handle_input(
        &mut self,
        event: InputEvent,
    ) -> Result<Option<OperatorStatus>, ViewRollError> {
        match self.input.handle_event(event) {
            Some(command) => self.execute(command),
            None => Ok(None),
        }
    }

    /// Process a key press (`winit` `KeyCode` debug names, e.g.
    /// `"Escape"`).
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn handle_key_press(
        &mut self,
        key: &str,
    ) -> Result<Option<OperatorStatus>, ViewRollError> {
        match self.input.handle_key_press(key) {
            Some(command) => self.execute(command),
            None => Ok(None),
        }
    }

    /// Invoke the rotate action programmatically with the pointer at
    /// `pointer`.
    ///
    /// # Errors
    ///
    /// [`ViewRollError::LockedAxis`] if the scene camera being viewed
    /// through has a locked rotation axis.
    pub fn invoke_at(
        &mut self,
        pointer: Vec2,
    ) -> Result<OperatorStatus, ViewRollError> {
        if self.controller.is_active() {
            log::debug!("rotate action invoked during a running session");
            return Ok(OperatorStatus::Running);
        }
        let hud = self.options.hud.enabled.then_some(&self.hud);
        self.controller.begin(&mut self.viewport, pointer, hud)
    }

    /// Execute a command.
    ///
    /// Session events that arrive while no session runs are ignored and
    /// return `None`.
    ///
    /// # Errors
    ///
    /// [`ViewRollError::LockedAxis`] if a session was requested on a
    /// camera with a locked rotation axis. No other condition fails.
    pub fn execute(
        &mut self,
        command: ViewRollCommand,
    ) -> Result<Option<OperatorStatus>, ViewRollError> {
        let event = match command {
            ViewRollCommand::BeginRotation { pointer } => {
                return self.invoke_at(pointer).map(Some);
            }
            ViewRollCommand::PointerMoved { pointer } => {
                RotationEvent::PointerMoved(pointer)
            }
            ViewRollCommand::Release { button } => RotationEvent::Release(button),
            ViewRollCommand::Cancel => RotationEvent::Escape,
        };
        if !self.controller.is_active() {
            return Ok(None);
        }
        self.controller
            .handle_event(&mut self.viewport, event)
            .map(Some)
    }
}
