//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit events into engine InputEvents.
//
// Architecture:
//   winit events → InputProcessor → InputEvent → InputBuffer::push()
//
// The processor caches the modifier state from ModifiersChanged and
// stamps it on every key and button edge. OS key repeats and keys the
// engine does not know are dropped; held state lives in the core's
// tracker.
//
// Wheel deltas are normalised to lines. Pixel deltas (touchpads) are
// divided by `PIXELS_PER_LINE`.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== Constants ===========================================================

const PIXELS_PER_LINE: f32 = 20.0;

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    modifiers: Modifiers,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self { modifiers: Modifiers::NONE }
    }

    //--- Modifier State ---------------------------------------------------

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers::from(state);
    }

    //--- Discrete ---------------------------------------------------------

    /// Key edge, or `None` for repeats and unknown keys.
    pub(crate) fn process_key_event(&self, event: &KeyEvent) -> Option<InputEvent> {
        if event.repeat {
            return None;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        self.key_edge(KeyCode::from(code), event.state)
    }

    pub(crate) fn process_mouse_button(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.modifiers;
        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }

    fn key_edge(&self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if key == KeyCode::Unidentified {
            return None;
        }
        let modifiers = self.modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }

    //--- Continuous -------------------------------------------------------

    /// Cursor position in physical pixels from the top-left.
    pub(crate) fn process_mouse_move(&self, x: f64, y: f64) -> InputEvent {
        InputEvent::MouseMoved { x: x as f32, y: y as f32 }
    }

    /// Raw device motion in pixels, independent of the cursor.
    pub(crate) fn process_mouse_motion(&self, dx: f64, dy: f64) -> InputEvent {
        InputEvent::MouseMotion { dx: dx as f32, dy: dy as f32 }
    }

    /// Vertical wheel movement in lines (positive = away from the user).
    pub(crate) fn process_mouse_wheel(&self, delta: MouseScrollDelta) -> InputEvent {
        let delta = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
        };
        InputEvent::MouseWheel { delta }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// winit normalises platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Maps winit key codes onto the engine key codes of the same name.
macro_rules! same_name_keys {
    ($code:expr; $($name:ident),* $(,)?) => {
        match $code {
            $(WinitKeyCode::$name => KeyCode::$name,)*
            _ => KeyCode::Unidentified,
        }
    };
}

/// Digits, letters, arrows, modifier keys and common special keys.
/// Everything else (F-keys, numpad, media keys) is `Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        same_name_keys!(code;
            Digit0, Digit1, Digit2, Digit3, Digit4,
            Digit5, Digit6, Digit7, Digit8, Digit9,
            KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
            KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
            KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
            ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
            ShiftLeft, ShiftRight, ControlLeft, ControlRight, AltLeft, AltRight,
            Space, Enter, Escape, Tab, Backspace, Delete,
        )
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
