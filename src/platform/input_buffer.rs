//=========================================================================
// Input Buffer
//=========================================================================
//
// Per-frame store between winit callbacks and the frame flush.
//
// Architecture:
//   discrete:   Vec<InputEvent>     key/button edges, arrival order,
//                                   consecutive duplicates dropped
//   continuous: ContinuousInput     one slot per kind, coalesced:
//                                     motion, wheel   → summed
//                                     cursor, resize, focus → last wins
//
// `drain()` hands both halves over and leaves the buffer empty with its
// capacity intact.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== ContinuousInput =====================================================

#[derive(Debug, Default)]
struct ContinuousInput {
    focus: Option<bool>,
    size: Option<(u32, u32)>,
    cursor: Option<(f32, f32)>,
    motion: Option<(f32, f32)>,
    wheel: Option<f32>,
}

impl ContinuousInput {
    fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::Focused(focused) => self.focus = Some(focused),
            InputEvent::Resized { width, height } => self.size = Some((width, height)),
            InputEvent::MouseMoved { x, y } => self.cursor = Some((x, y)),
            InputEvent::MouseMotion { dx, dy } => {
                let (sx, sy) = self.motion.unwrap_or((0.0, 0.0));
                self.motion = Some((sx + dx, sy + dy));
            }
            InputEvent::MouseWheel { delta } => {
                self.wheel = Some(self.wheel.unwrap_or(0.0) + delta);
            }
            _ => {}
        }
    }

    fn len(&self) -> usize {
        [
            self.focus.is_some(),
            self.size.is_some(),
            self.cursor.is_some(),
            self.motion.is_some(),
            self.wheel.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Window bookkeeping first so that motion is judged against the
    /// newest focus state.
    fn drain_into(&mut self, out: &mut Vec<InputEvent>) {
        let taken = std::mem::take(self);
        if let Some(focused) = taken.focus {
            out.push(InputEvent::Focused(focused));
        }
        if let Some((width, height)) = taken.size {
            out.push(InputEvent::Resized { width, height });
        }
        if let Some((x, y)) = taken.cursor {
            out.push(InputEvent::MouseMoved { x, y });
        }
        if let Some((dx, dy)) = taken.motion {
            out.push(InputEvent::MouseMotion { dx, dy });
        }
        if let Some(delta) = taken.wheel {
            out.push(InputEvent::MouseWheel { delta });
        }
    }
}

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: ContinuousInput,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 128;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: ContinuousInput::default(),
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Routes `event` to the discrete or continuous half.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_discrete() {
            self.push_discrete(event);
        } else {
            self.push_continuous(event);
        }
    }

    /// Coalesces a continuous event into its slot. Discrete events are
    /// ignored here.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.push(event);
    }

    /// Appends a key/button edge, dropping an exact repeat of the last one.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Takes this frame's events, or `None` when nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = self.discrete.drain(..).collect();
        let mut continuous = Vec::with_capacity(self.continuous.len());
        self.continuous.drain_into(&mut continuous);
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
