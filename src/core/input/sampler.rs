//=========================================================================
// Control Sampler
//=========================================================================
//
// Per-frame control state with an "input enabled" gate.
//
// Architecture:
//   InputBindings::sample() → ControlSnapshot
//        ↓ advance()
//   ControlBuffer { current, previous }
//        ↓ borrow + enabled flag
//   ControlSampler → value() / pressed() / held()
//
// A control is held when its raw value is greater than zero. Pressed is
// the held edge between the previous and current snapshot. When input is
// disabled every query reports neutral regardless of raw state.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::bindings::Control;

//=== ControlSnapshot =====================================================

/// Raw values of every control for one frame, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlSnapshot([f32; Control::COUNT]);

impl ControlSnapshot {
    /// Returns the raw value of a control.
    #[inline]
    pub fn get(&self, control: Control) -> f32 {
        self.0[control.index()]
    }

    /// Sets the raw value of a control, clamped to `[0, 1]`.
    #[inline]
    pub fn set(&mut self, control: Control, value: f32) {
        self.0[control.index()] = value.clamp(0.0, 1.0);
    }

    /// Returns `true` if the control's raw value is above zero.
    #[inline]
    pub fn is_held(&self, control: Control) -> bool {
        self.get(control) > 0.0
    }
}

//=== ControlBuffer =======================================================

/// Double buffer of control snapshots (current and previous frame).
///
/// Owned by the authoritative game state and advanced once per tick by
/// the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct ControlBuffer {
    current: ControlSnapshot,
    previous: ControlSnapshot,
}

impl ControlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shifts current into previous and stores the new snapshot.
    pub fn advance(&mut self, next: ControlSnapshot) {
        self.previous = self.current;
        self.current = next;
    }

    /// Resets both snapshots to neutral.
    pub fn clear(&mut self) {
        self.current = ControlSnapshot::default();
        self.previous = ControlSnapshot::default();
    }

    pub fn current(&self) -> &ControlSnapshot {
        &self.current
    }

    pub fn previous(&self) -> &ControlSnapshot {
        &self.previous
    }

    /// Creates a gated read view over this buffer.
    pub fn sampler(&self, enabled: bool) -> ControlSampler<'_> {
        ControlSampler::new(self, enabled)
    }
}

//=== ControlSampler ======================================================

/// Read-only, gated view over a [`ControlBuffer`].
///
/// `enabled == false` is a hard override: every query returns neutral.
#[derive(Debug, Clone, Copy)]
pub struct ControlSampler<'a> {
    buffer: &'a ControlBuffer,
    enabled: bool,
}

impl<'a> ControlSampler<'a> {
    pub fn new(buffer: &'a ControlBuffer, enabled: bool) -> Self {
        Self { buffer, enabled }
    }

    /// Returns `true` if input is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the control's current value, or `0.0` when disabled.
    pub fn value(&self, control: Control) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        self.buffer.current.get(control)
    }

    /// Returns `true` only on the frame the control became held.
    pub fn pressed(&self, control: Control) -> bool {
        self.enabled
            && self.buffer.current.is_held(control)
            && !self.buffer.previous.is_held(control)
    }

    /// Returns `true` while the control is held.
    pub fn held(&self, control: Control) -> bool {
        self.enabled && self.buffer.current.is_held(control)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
