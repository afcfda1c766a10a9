//=========================================================================
// Input Events
//=========================================================================
//
// Platform-neutral keyboard, mouse and window events.
//
// Architecture:
//   winit → platform::InputProcessor → InputEvent
//     ├─ StateTracker        held keys and buttons
//     └─ Scene::handle_event commands, mouse look, item use
//
// Keys are physical locations: `KeyW` is the key left of `KeyE` on any
// layout.
//
//=========================================================================

//=== MouseButton =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Fires or uses the current item while on foot.
    Left,
    Right,
    Middle,
    /// Side and thumb buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical key, independent of the keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    // Modifiers double as bindable keys (sprint, walk, jump).
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Any key the platform layer does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// One input occurrence, as delivered to the logic thread.
///
/// Key and button edges are discrete and carry the modifiers held when
/// they fired. Cursor, motion, wheel, focus and resize are continuous:
/// the platform merges them per frame, so `MouseMotion` and `MouseWheel`
/// hold the frame's total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },
    MouseButtonDown {
        button: MouseButton,
        modifiers: Modifiers,
    },
    MouseButtonUp {
        button: MouseButton,
        modifiers: Modifiers,
    },

    /// Cursor position in physical pixels from the top-left corner.
    MouseMoved { x: f32, y: f32 },

    /// Raw device motion in pixels. Drives mouse look.
    MouseMotion { dx: f32, dy: f32 },

    /// Wheel movement in lines; positive scrolls away from the user.
    MouseWheel { delta: f32 },

    /// Keyboard focus gained (`true`) or lost.
    Focused(bool),

    /// New inner size in physical pixels.
    Resized { width: u32, height: u32 },

    Unidentified,
}

impl InputEvent {
    /// Key and mouse-button edges. These keep their arrival order through
    /// the platform buffer; everything else is merged.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Self::KeyDown { .. }
                | Self::KeyUp { .. }
                | Self::MouseButtonDown { .. }
                | Self::MouseButtonUp { .. }
        )
    }
}

//=== Modifiers ===========================================================

/// Held modifier keys, left and right merged.
///
/// On macOS `ctrl` is Command and `alt` is Option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ..Self::NONE };
    pub const CTRL: Self = Self { ctrl: true, ..Self::NONE };
    pub const ALT: Self = Self { alt: true, ..Self::NONE };
}

//=========================================================================
// Unit Tests
//=========================================================================
