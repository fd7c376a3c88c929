//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by the bound gesture, a
//! key press or a programmatic call, is represented as a
//! `ViewRollCommand`. Consumers construct commands and pass them to
//! [`ViewRollEngine::execute`](super::ViewRollEngine::execute).

use glam::Vec2;

use crate::input::MouseButton;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(ViewRollCommand::BeginRotation { pointer })?;
/// engine.execute(ViewRollCommand::PointerMoved { pointer })?;
/// engine.execute(ViewRollCommand::Cancel)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewRollCommand {
    /// Start a rotation session with the pointer at `pointer`.
    BeginRotation {
        /// Pointer position in region pixels.
        pointer: Vec2,
    },
    /// The pointer moved.
    PointerMoved {
        /// Pointer position in region pixels.
        pointer: Vec2,
    },
    /// A pointer button was released; ends a running session keeping its
    /// rotation.
    Release {
        /// Released button.
        button: MouseButton,
    },
    /// Abort a running session and restore the view.
    Cancel,
}
