//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! modifier keys), the key-binding map and the trigger-gesture registry.
//! It is the only thing that sits between raw window events and the
//! engine's [`execute`](crate::engine::ViewRollEngine::execute) method.

use glam::Vec2;

use super::bindings::BindingRegistry;
use super::event::{InputEvent, Modifiers, MouseButton};
use super::keyboard::KeyAction;
use crate::engine::ViewRollCommand;
use crate::options::{KeybindingOptions, TriggerOptions};

/// Converts raw window events into [`ViewRollCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd)?;
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("Escape") {
///     engine.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last known cursor position in region pixels.
    cursor: Vec2,
    /// Currently held modifiers.
    modifiers: Modifiers,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Gestures that start a rotation session.
    triggers: BindingRegistry,
}

impl InputProcessor {
    /// Create a processor with default key bindings and the default
    /// trigger gesture bound.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bindings(
            KeybindingOptions::default(),
            &TriggerOptions::default(),
        )
    }

    /// Create a processor from explicit bindings.
    #[must_use]
    pub fn with_bindings(
        key_bindings: KeybindingOptions,
        trigger: &TriggerOptions,
    ) -> Self {
        let mut processor = Self {
            cursor: Vec2::ZERO,
            modifiers: Modifiers::NONE,
            key_bindings,
            triggers: BindingRegistry::default(),
        };
        let _ = processor.triggers.rebind(trigger);
        processor
    }

    /// Current cursor position in region pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Currently held modifiers.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Read-only access to the trigger registry.
    #[must_use]
    pub fn triggers(&self) -> &BindingRegistry {
        &self.triggers
    }

    /// Mutable access to the trigger registry for manual binding.
    pub fn triggers_mut(&mut self) -> &mut BindingRegistry {
        &mut self.triggers
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewRollCommand> {
        match self.key_bindings.lookup(key)? {
            KeyAction::RotateCanvas => Some(ViewRollCommand::BeginRotation {
                pointer: self.cursor,
            }),
            KeyAction::Cancel => Some(ViewRollCommand::Cancel),
        }
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewRollCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                Some(ViewRollCommand::PointerMoved {
                    pointer: self.cursor,
                })
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
                None
            }
        }
    }

    /// Press fires the trigger when a bound gesture matches; release
    /// always ends a running session.
    fn handle_mouse_button(
        &self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewRollCommand> {
        if !pressed {
            return Some(ViewRollCommand::Release { button });
        }
        self.triggers
            .matches(button, self.modifiers)
            .then_some(ViewRollCommand::BeginRotation {
                pointer: self.cursor,
            })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl_alt() -> InputEvent {
        InputEvent::ModifiersChanged(Modifiers {
            shift: false,
            ctrl: true,
            alt: true,
        })
    }

    #[test]
    fn trigger_press_begins_rotation_at_cursor() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 120.0, y: 80.0 });
        assert_eq!(input.handle_event(ctrl_alt()), None);
        assert_eq!(
            input.handle_event(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            }),
            Some(ViewRollCommand::BeginRotation {
                pointer: Vec2::new(120.0, 80.0)
            })
        );
    }

    #[test]
    fn default_processor_binds_default_trigger() {
        let mut input = InputProcessor::default();
        assert_eq!(input.triggers().len(), 1);
        let _ = input.handle_event(ctrl_alt());
        assert_eq!(
            input.handle_event(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            }),
            Some(ViewRollCommand::BeginRotation { pointer: Vec2::ZERO })
        );
    }

    #[test]
    fn press_without_modifiers_is_ignored() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            }),
            None
        );
    }

    #[test]
    fn any_release_is_forwarded() {
        let mut input = InputProcessor::new();
        for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
            assert_eq!(
                input.handle_event(InputEvent::MouseButton {
                    button,
                    pressed: false,
                }),
                Some(ViewRollCommand::Release { button })
            );
        }
    }

    #[test]
    fn escape_cancels_and_unbound_keys_do_nothing() {
        let input = InputProcessor::new();
        assert_eq!(input.handle_key_press("Escape"), Some(ViewRollCommand::Cancel));
        assert_eq!(input.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn bound_rotate_key_starts_at_cursor() {
        let mut keys = KeybindingOptions::default();
        keys.bind(KeyAction::RotateCanvas, "KeyR");
        let mut input =
            InputProcessor::with_bindings(keys, &TriggerOptions::default());
        let _ = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 20.0 });
        assert_eq!(
            input.handle_key_press("KeyR"),
            Some(ViewRollCommand::BeginRotation {
                pointer: Vec2::new(10.0, 20.0)
            })
        );
    }
}
