//! Input handling: event types, trigger bindings, and the input processor
//! that converts raw window events into engine commands.

/// Trigger gestures and their registry.
pub mod bindings;
/// Platform-agnostic input events.
pub mod event;
/// Key-bindable actions.
pub mod keyboard;
/// Converts raw events into engine commands.
pub mod processor;

pub use bindings::{BindingId, BindingRegistry, TriggerGesture};
pub use event::{InputEvent, Modifiers, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
