//=========================================================================
// Event Collector
//=========================================================================
//
// Logic-thread side of the platform channel.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → batches() → TickControl
//
// Each tick drains at most `MAX_MESSAGES_PER_TICK` messages so a flooded
// channel cannot stall the tick; the rest waits for the next one. The
// collector never blocks: pacing belongs to the orchestrator.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== Constants ===========================================================

const MAX_MESSAGES_PER_TICK: usize = 64;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            batches: Vec::with_capacity(8),
        }
    }

    /// Replaces the previous tick's batches with whatever the platform
    /// has sent since.
    ///
    /// Returns `Exit` when the window closed or the platform is gone.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.batches.clear();

        for _ in 0..MAX_MESSAGES_PER_TICK {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    self.push_batch(discrete);
                    self.push_batch(continuous);
                }
                Ok(PlatformEvent::WindowClosed) => {
                    info!("Window closed");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => return TickControl::Continue,
                Err(TryRecvError::Disconnected) => {
                    info!("Platform channel disconnected");
                    return TickControl::Exit;
                }
            }
        }

        if !self.receiver.is_empty() {
            warn!(
                "Platform backlog: {} messages deferred to next tick",
                self.receiver.len()
            );
        }
        TickControl::Continue
    }

    /// Input batches of the current tick, in arrival order.
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.batches
    }

    /// Number of events across all batches of the current tick.
    pub(crate) fn event_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    fn push_batch(&mut self, batch: Vec<InputEvent>) {
        if !batch.is_empty() {
            self.batches.push(batch);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
