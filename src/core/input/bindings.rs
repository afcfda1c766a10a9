//=========================================================================
// Input Bindings
//=========================================================================
//
// Maps raw inputs to game controls and commands.
//
// Architecture:
//   Control → Vec<DiscreteInput>   (held controls, sampled once per frame)
//   KeyCode → Command              (discrete commands, mapped per event)
//
// Controls are continuous/held and feed the control snapshot double
// buffer. Commands fire on a single key-down edge and are routed to the
// active scene.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};
use super::sampler::ControlSnapshot;
use super::state_tracker::{DiscreteInput, StateTracker};

//=== Control =============================================================

/// A logical player control sampled every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    GoForward,
    GoBackwards,
    GoLeft,
    GoRight,
    Sprint,
    Walk,
    Jump,
    EnterExitVehicle,
    Handbrake,
    LookLeft,
    LookRight,
}

impl Control {
    /// Number of controls; size of a [`ControlSnapshot`].
    pub const COUNT: usize = 11;

    /// All controls in index order.
    pub const ALL: [Control; Control::COUNT] = [
        Control::GoForward,
        Control::GoBackwards,
        Control::GoLeft,
        Control::GoRight,
        Control::Sprint,
        Control::Walk,
        Control::Jump,
        Control::EnterExitVehicle,
        Control::Handbrake,
        Control::LookLeft,
        Control::LookRight,
    ];

    /// Index into a control snapshot.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

//=== Command =============================================================

/// A discrete command bound to a single key-down edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance to the next camera mode (wraps).
    CycleCamera,
    /// Open the pause scene.
    Pause,
    /// Open the debug inspector with the current camera pose.
    OpenDebug,
    /// Skip the cutscene that is currently playing.
    SkipCutscene,
}

//=== InputBindings =======================================================

/// Binding tables for controls and commands.
///
/// A single input may drive several controls (Space is both sprint and
/// handbrake by default) and a control may be driven by several inputs.
#[derive(Debug, Clone)]
pub struct InputBindings {
    controls: HashMap<Control, Vec<DiscreteInput>>,
    commands: HashMap<KeyCode, Command>,
}

impl InputBindings {
    /// Creates empty binding tables.
    pub fn empty() -> Self {
        Self {
            controls: HashMap::new(),
            commands: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to a control (additive).
    pub fn bind_key(&mut self, key: KeyCode, control: Control) {
        self.bind(DiscreteInput::Key(key), control);
    }

    /// Binds a mouse button to a control (additive).
    pub fn bind_mouse(&mut self, button: MouseButton, control: Control) {
        self.bind(DiscreteInput::Button(button), control);
    }

    fn bind(&mut self, input: DiscreteInput, control: Control) {
        let inputs = self.controls.entry(control).or_default();
        if !inputs.contains(&input) {
            inputs.push(input);
        }
    }

    /// Removes every input bound to a control.
    pub fn unbind_control(&mut self, control: Control) {
        self.controls.remove(&control);
    }

    /// Binds a key to a command, replacing any previous command on that key.
    pub fn bind_command(&mut self, key: KeyCode, command: Command) {
        self.commands.insert(key, command);
    }

    /// Removes the command bound to a key.
    pub fn unbind_command(&mut self, key: KeyCode) {
        self.commands.remove(&key);
    }

    /// Returns the inputs bound to a control.
    pub fn inputs_for(&self, control: Control) -> &[DiscreteInput] {
        self.controls
            .get(&control)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    //--- Mapping ----------------------------------------------------------

    /// Maps a key-down event to its bound command.
    ///
    /// Only the key-down edge fires a command; everything else maps to
    /// `None`.
    pub fn map_command(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::KeyDown { key, .. } => self.commands.get(key).copied(),
            _ => None,
        }
    }

    /// Samples the raw value of every control from the tracker's held set.
    pub fn sample(&self, tracker: &StateTracker) -> ControlSnapshot {
        let mut snapshot = ControlSnapshot::default();
        for (control, inputs) in &self.controls {
            if inputs.iter().any(|input| tracker.is_down(*input)) {
                snapshot.set(*control, 1.0);
            }
        }
        snapshot
    }
}

impl Default for InputBindings {
    /// Classic keyboard + mouse layout.
    fn default() -> Self {
        let mut bindings = Self::empty();

        bindings.bind_key(KeyCode::KeyW, Control::GoForward);
        bindings.bind_key(KeyCode::ArrowUp, Control::GoForward);
        bindings.bind_key(KeyCode::KeyS, Control::GoBackwards);
        bindings.bind_key(KeyCode::ArrowDown, Control::GoBackwards);
        bindings.bind_key(KeyCode::KeyA, Control::GoLeft);
        bindings.bind_key(KeyCode::ArrowLeft, Control::GoLeft);
        bindings.bind_key(KeyCode::KeyD, Control::GoRight);
        bindings.bind_key(KeyCode::ArrowRight, Control::GoRight);

        bindings.bind_key(KeyCode::Space, Control::Sprint);
        bindings.bind_key(KeyCode::AltLeft, Control::Walk);
        bindings.bind_key(KeyCode::ShiftLeft, Control::Jump);
        bindings.bind_key(KeyCode::KeyF, Control::EnterExitVehicle);
        bindings.bind_key(KeyCode::Enter, Control::EnterExitVehicle);
        bindings.bind_key(KeyCode::Space, Control::Handbrake);
        bindings.bind_key(KeyCode::KeyQ, Control::LookLeft);
        bindings.bind_key(KeyCode::KeyE, Control::LookRight);

        bindings.bind_command(KeyCode::KeyC, Command::CycleCamera);
        bindings.bind_command(KeyCode::Escape, Command::Pause);
        bindings.bind_command(KeyCode::KeyM, Command::OpenDebug);
        bindings.bind_command(KeyCode::Space, Command::SkipCutscene);

        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
