//=========================================================================
// State Tracker
//=========================================================================
//
// Set of keys and mouse buttons currently held.
//
// Architecture:
//   InputEvent → process_event() → HashSet<DiscreteInput> → is_down()
//
// Edges are not tracked here. The control double buffer derives
// pressed/released from consecutive samples of the held set.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== DiscreteInput =======================================================

/// A key or mouse button; the key type of the control binding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscreteInput {
    Key(KeyCode),
    Button(MouseButton),
}

//=== StateTracker ========================================================

#[derive(Debug, Default)]
pub struct StateTracker {
    held: HashSet<DiscreteInput>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Event Processing -------------------------------------------------

    #[cfg(test)]
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Updates the held set. Pointer, wheel and resize events are ignored.
    pub(crate) fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key, .. } => {
                self.held.insert(DiscreteInput::Key(key));
            }
            InputEvent::KeyUp { key, .. } => {
                self.held.remove(&DiscreteInput::Key(key));
            }
            InputEvent::MouseButtonDown { button, .. } => {
                self.held.insert(DiscreteInput::Button(button));
            }
            InputEvent::MouseButtonUp { button, .. } => {
                self.held.remove(&DiscreteInput::Button(button));
            }
            InputEvent::Focused(false) => {
                // Key-up events are lost while unfocused
                self.held.clear();
            }
            _ => {}
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_down(&self, input: DiscreteInput) -> bool {
        self.held.contains(&input)
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.is_down(DiscreteInput::Key(key))
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.is_down(DiscreteInput::Button(button))
    }

    pub fn held(&self) -> impl Iterator<Item = &DiscreteInput> {
        self.held.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Modifiers;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    fn mouse_down(button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonDown { button, modifiers: Modifiers::NONE }
    }

    //=====================================================================
    // Held Set Tests
    //=====================================================================

    #[test]
    fn key_held_until_released() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_down(KeyCode::KeyW)]);
        assert!(tracker.is_key_down(KeyCode::KeyW));

        tracker.process_events(&[]);
        assert!(tracker.is_key_down(KeyCode::KeyW));

        tracker.process_events(&[key_up(KeyCode::KeyW)]);
        assert!(!tracker.is_key_down(KeyCode::KeyW));
    }

    #[test]
    fn fast_tap_ends_released() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_down(KeyCode::KeyF), key_up(KeyCode::KeyF)]);

        assert!(!tracker.is_key_down(KeyCode::KeyF));
    }

    #[test]
    fn key_up_without_down_ignored() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_up(KeyCode::KeyZ)]);

        assert_eq!(tracker.held().count(), 0);
    }

    #[test]
    fn mouse_buttons_tracked_separately_from_keys() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[mouse_down(MouseButton::Left)]);

        assert!(tracker.is_button_down(MouseButton::Left));
        assert!(!tracker.is_button_down(MouseButton::Right));
        assert_eq!(tracker.held().count(), 1);
    }

    #[test]
    fn pointer_and_window_events_leave_held_set_alone() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::Space)]);

        tracker.process_events(&[
            InputEvent::MouseMotion { dx: 3.0, dy: 1.0 },
            InputEvent::MouseWheel { delta: 1.0 },
            InputEvent::MouseMoved { x: 10.0, y: 20.0 },
            InputEvent::Focused(true),
            InputEvent::Resized { width: 640, height: 480 },
            InputEvent::Unidentified,
        ]);

        assert_eq!(tracker.held().collect::<Vec<_>>(), vec![&DiscreteInput::Key(KeyCode::Space)]);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::KeyW), mouse_down(MouseButton::Right)]);

        tracker.process_events(&[InputEvent::Focused(false)]);

        assert_eq!(tracker.held().count(), 0);
    }
}
