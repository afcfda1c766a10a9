//=========================================================================
// Input System
//
// High-level interface for input handling on the logic thread.
// Owns the low-level `StateTracker` and the `InputBindings` tables and
// turns each frame of platform events into a control snapshot.
//
// Responsibilities:
// - Track which keys and mouse buttons are held
// - Map held inputs to game controls (sampled once per frame)
// - Map key-down edges to discrete commands (per event)
//
// Frame lifecycle:
// ```text
//   process_event() × N → sample() → ControlBuffer::advance()
// ```
//
// Notes:
// Gating by "input enabled" is not done here. The snapshot is always the
// raw device state; `ControlSampler` applies the player's gate.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod bindings;
pub mod event;
pub mod sampler;
pub mod state_tracker;

//=== Public API ==========================================================

pub use bindings::{Command, Control, InputBindings};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use sampler::{ControlBuffer, ControlSampler, ControlSnapshot};
pub use state_tracker::{DiscreteInput, StateTracker};

//=== InputSystem =========================================================

/// Owns raw input state and binding tables.
///
/// Exposed to scenes through the game context so they can resolve
/// commands for the events they receive.
pub struct InputSystem {
    tracker: StateTracker,
    bindings: InputBindings,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self::with_bindings(InputBindings::default())
    }

    pub fn with_bindings(bindings: InputBindings) -> Self {
        Self {
            tracker: StateTracker::new(),
            bindings,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Feeds one platform event into the tracker.
    pub(crate) fn process_event(&mut self, event: &InputEvent) {
        self.tracker.process_event(event);
    }

    /// Samples the raw control snapshot for this frame.
    pub fn sample(&self) -> ControlSnapshot {
        self.bindings.sample(&self.tracker)
    }

    //--- Queries ----------------------------------------------------------

    /// Resolves the command bound to a key-down event, if any.
    pub fn command_for(&self, event: &InputEvent) -> Option<Command> {
        self.bindings.map_command(event)
    }

    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    /// Mutable access for rebinding (typically during `Engine::init`).
    pub fn bindings_mut(&mut self) -> &mut InputBindings {
        &mut self.bindings
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
