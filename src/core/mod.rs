//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Coordinator for everything running on the logic (non-platform) thread.
//
// Architecture:
//   Receiver<PlatformEvent>
//     → EventCollector::collect_frame()   (bounded poll, shutdown detection)
//     → GameSystems::update()             (events, controls, scenes, world,
//                                          draw, transitions)
//     → sleep to the next tick            (fixed TPS)
//
// The orchestrator owns the systems and the context outright and moves
// both into the logic thread. The platform only talks to it through the
// channel.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera;
pub mod gameplay;
pub mod globals;
pub mod input;
pub(crate) mod platform_bridge;
pub mod render;
pub mod scene;
pub mod world;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use globals::{GameContext, GameSystems};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use scene::SceneKey;

//=== CoreSystemsOrchestrator =============================================

/// Owns the game systems and context until the logic thread takes them.
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey> {
    systems: GameSystems<S>,
    context: GameContext<S>,
}

impl<S: SceneKey> CoreSystemsOrchestrator<S> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(systems: GameSystems<S>, context: GameContext<S>) -> Self {
        Self { systems, context }
    }

    /// Runs user initialization (scene registration, bindings) before the
    /// logic thread starts.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GameSystems<S>, &mut GameContext<S>),
    {
        init_fn(&mut self.systems, &mut self.context);
    }

    //--- spawn_core_thread() ---------------------------------------------

    /// Spawns the logic thread ticking at `tps`.
    ///
    /// `core_alive` is held for the thread's lifetime so the platform can
    /// notice when it ends, however it ends.
    ///
    /// Each tick:
    ///  1. Collects platform events (exits on close or disconnect)
    ///  2. Updates the game systems with a fixed `dt`
    ///  3. Exits if a scene requested quit
    ///  4. Sleeps to maintain pacing
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        core_alive: Sender<()>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        let dt = frame_duration.as_secs_f32();

        thread::spawn(move || {
            let _core_alive = core_alive;
            let Self { mut systems, mut context } = self;
            let mut collector = EventCollector::new(receiver);

            systems.scene_manager.start(&mut context);
            info!("Core thread running at {} TPS", tps);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting");
                    break;
                }

                //--- Step 2: Update systems --------------------------------
                trace!("Tick with {} input events", collector.event_count());
                systems.update(&mut context, collector.batches(), dt);

                //--- Step 3: Honour quit requests ------------------------
                if context.quit_requested() {
                    info!("Quit requested, core thread exiting");
                    break;
                }

                //--- Step 4: Maintain deterministic pacing -----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                } else {
                    debug!("Tick overran by {:?}", elapsed - frame_duration);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
