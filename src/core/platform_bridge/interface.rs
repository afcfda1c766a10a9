//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages crossing from the platform thread to the logic thread.
//
// Errors raised by the platform live in `crate::error`, since they also
// surface through `Engine::run`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core over the bounded channel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlatformEvent {
    /// One frame of input.
    ///
    /// `discrete` keeps key/button edges in arrival order; `continuous`
    /// holds at most one coalesced event per kind (motion, wheel, cursor,
    /// focus, resize).
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested.
    WindowClosed,
}
