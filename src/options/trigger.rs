use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Shortcut", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// The pointer gesture that starts a rotation session.
///
/// Changing these at runtime rebinds the gesture
/// (see [`ViewRollEngine::set_options`](crate::engine::ViewRollEngine::set_options)).
pub struct TriggerOptions {
    /// Bind the gesture automatically. When off, the host binds the
    /// `rotate_canvas` action itself.
    #[schemars(title = "Bind Shortcut")]
    pub use_shortcut: bool,
    /// Pointer button that starts the session.
    #[schemars(title = "Mouse Button")]
    pub button: MouseButton,
    /// Require control.
    #[schemars(title = "Ctrl")]
    pub ctrl: bool,
    /// Require alt.
    #[schemars(title = "Alt")]
    pub alt: bool,
    /// Require shift.
    #[schemars(title = "Shift")]
    pub shift: bool,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            use_shortcut: true,
            button: MouseButton::Right,
            ctrl: true,
            alt: true,
            shift: false,
        }
    }
}
