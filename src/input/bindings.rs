//! Trigger gestures and the registry the host keeps them in.

use rustc_hash::FxHashMap;

use super::event::{Modifiers, MouseButton};
use crate::options::TriggerOptions;

/// A pointer button press combined with an exact modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerGesture {
    /// Button whose press starts a session.
    pub button: MouseButton,
    /// Modifiers that must be held, and no others.
    pub modifiers: Modifiers,
}

impl TriggerGesture {
    /// Whether a press of `button` with `modifiers` held fires this
    /// gesture.
    #[must_use]
    pub fn matches(&self, button: MouseButton, modifiers: Modifiers) -> bool {
        self.button == button && self.modifiers == modifiers
    }
}

impl From<&TriggerOptions> for TriggerGesture {
    fn from(options: &TriggerOptions) -> Self {
        Self {
            button: options.button,
            modifiers: Modifiers {
                shift: options.shift,
                ctrl: options.ctrl,
                alt: options.alt,
            },
        }
    }
}

/// Handle returned by [`BindingRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u64);

/// The trigger gestures currently bound to the rotate action.
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    bindings: FxHashMap<BindingId, TriggerGesture>,
    next_id: u64,
}

impl BindingRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `gesture` to the rotate action.
    pub fn register(&mut self, gesture: TriggerGesture) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        let _ = self.bindings.insert(id, gesture);
        id
    }

    /// Remove a binding. Returns the gesture if it was bound.
    pub fn unregister(&mut self, id: BindingId) -> Option<TriggerGesture> {
        self.bindings.remove(&id)
    }

    /// Remove every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Replace all bindings with the gesture described by `options`.
    ///
    /// Returns the new binding, or `None` when `options.use_shortcut` is
    /// off and the action is left for the host to bind manually.
    pub fn rebind(&mut self, options: &TriggerOptions) -> Option<BindingId> {
        self.clear();
        if !options.use_shortcut {
            log::info!(
                "no rotate shortcut bound; bind the rotate_canvas action manually"
            );
            return None;
        }
        let gesture = TriggerGesture::from(options);
        if gesture.modifiers.is_empty() {
            log::warn!(
                "rotate shortcut has no modifier; a plain {:?} click will start rotation",
                gesture.button
            );
        }
        Some(self.register(gesture))
    }

    /// Whether a press of `button` with `modifiers` fires any binding.
    #[must_use]
    pub fn matches(&self, button: MouseButton, modifiers: Modifiers) -> bool {
        self.bindings
            .values()
            .any(|gesture| gesture.matches(button, modifiers))
    }

    /// The gesture bound under `id`.
    #[must_use]
    pub fn get(&self, id: BindingId) -> Option<&TriggerGesture> {
        self.bindings.get(&id)
    }

    /// Number of bound gestures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
