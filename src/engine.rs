//=========================================================================
// Streetwise Engine
//=========================================================================
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(world)──>  Engine  ──run()──>  [Runtime]
//         │                               │
//         ├─ with_config()                ├─ init()  (scenes, bindings)
//         ├─ with_tps()                   └─ run()   spawns logic thread,
//         ├─ with_channel_capacity()                 runs platform,
//         └─ with_renderer()                         blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::globals::{GameContext, GameSystems};
use crate::core::platform_bridge::PlatformEvent;
use crate::core::render::Renderer;
use crate::core::scene::SceneKey;
use crate::core::world::GameWorld;
use crate::core::CoreSystemsOrchestrator;
use crate::error::EngineError;
use crate::platform::{Platform, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Renderer**: draws nothing
///
/// # Examples
///
/// Running the built-in scenes:
/// ```no_run
/// use streetwise_engine::prelude::*;
/// use streetwise_engine::core::world::{Collaborators, GameData};
/// use streetwise_engine::scenes::{register_scenes, GameScene};
///
/// let config = GameConfig::load("streetwise.json").unwrap_or_default();
/// let world = GameWorld::new(GameData::new("data"), Collaborators::null());
///
/// EngineBuilder::<GameScene>::new()
///     .with_config(config)
///     .build(world)
///     .init(|systems, _context| register_scenes(&mut systems.scene_manager))
///     .run()
///     .expect("engine failed");
/// ```
pub struct EngineBuilder<S: SceneKey> {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    renderer: Option<Box<dyn Renderer>>,
    _phantom: std::marker::PhantomData<S>,
}

impl<S: SceneKey> EngineBuilder<S> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        let config = GameConfig::default();
        Self {
            tps: config.ticks_per_second,
            channel_capacity: config.channel_capacity,
            config,
            renderer: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Uses `config` for look preferences, window settings, TPS and channel
    /// capacity. Later `with_tps` / `with_channel_capacity` calls override
    /// the latter two.
    ///
    /// # Panics
    ///
    /// Panics if the config's TPS or capacity is not positive.
    pub fn with_config(self, config: GameConfig) -> Self {
        let tps = config.ticks_per_second;
        let capacity = config.channel_capacity;
        Self { config, ..self }.with_tps(tps).with_channel_capacity(capacity)
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// The logic thread steps with a fixed `dt = 1 / tps`.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self.config.ticks_per_second = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// The platform blocks on a full channel, so a small capacity throttles
    /// input when the logic thread falls behind.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self.config.channel_capacity = capacity;
        self
    }

    /// Draws scenes through `renderer` instead of discarding them.
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Builds the engine around `world`.
    pub fn build(self, world: GameWorld) -> Engine<S> {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let systems = match self.renderer {
            Some(renderer) => GameSystems::with_renderer(renderer),
            None => GameSystems::new(),
        };
        let window = WindowSettings::from_config(&self.config);
        let context = GameContext::new(world, self.config);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(systems, context),
            window,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl<S: SceneKey> Default for EngineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Engine runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, SceneManager, GameWorld, Renderer
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: bounded crossbeam channel (PlatformEvent)
/// ```
pub struct Engine<S: SceneKey> {
    orchestrator: CoreSystemsOrchestrator<S>,
    window: WindowSettings,
    tps: f64,
    channel_capacity: usize,
}

impl<S: SceneKey> Engine<S> {
    //--- Initialization ---------------------------------------------------

    /// Configures systems and context before execution.
    ///
    /// Typically registers scenes and adjusts input bindings:
    ///
    /// ```no_run
    /// # use streetwise_engine::prelude::*;
    /// # use streetwise_engine::core::world::{Collaborators, GameData};
    /// # use streetwise_engine::scenes::{register_scenes, GameScene};
    /// # let world = GameWorld::new(GameData::default(), Collaborators::null());
    /// EngineBuilder::<GameScene>::new()
    ///     .build(world)
    ///     .init(|systems, context| {
    ///         register_scenes(&mut systems.scene_manager);
    ///         context.input.bindings_mut().bind_key(KeyCode::KeyG, Control::Jump);
    ///     });
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GameSystems<S>, &mut GameContext<S>),
    {
        info!("Initializing engine systems");

        self.orchestrator.init_systems(init_fn);

        info!("Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the engine runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel and the liveness channel
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Window close, quit request or a logic thread panic ends the loop;
    ///    the logic thread is then joined
    ///
    /// # Errors
    ///
    /// [`EngineError::Platform`] if the event loop fails,
    /// [`EngineError::CoreThreadPanicked`] if the logic thread panicked.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (alive_tx, alive_rx) = bounded::<()>(0);

        info!("Channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, alive_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, alive_rx, self.window);
        info!("Platform initialized, entering event loop");

        let platform_result = platform.run();
        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        let core_result = core_handle.join();
        match &core_result {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        platform_result?;
        core_result.map_err(|_| EngineError::CoreThreadPanicked)?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::{Collaborators, GameData};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    //--- Test Helpers -----------------------------------------------------

    fn world() -> GameWorld {
        GameWorld::new(GameData::default(), Collaborators::null())
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::<TestScene>::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert!(builder.renderer.is_none());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::<TestScene>::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
        assert_eq!(builder.config.ticks_per_second, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::<TestScene>::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::<TestScene>::new().with_tps(-60.0);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::<TestScene>::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::<TestScene>::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_with_config_takes_rates_and_window() {
        let config = GameConfig {
            ticks_per_second: 30.0,
            channel_capacity: 64,
            window_title: "Liberty".to_string(),
            window_size: [1024, 768],
            invert_y: true,
            ..GameConfig::default()
        };

        let engine = EngineBuilder::<TestScene>::new().with_config(config).build(world());

        assert_eq!(engine.tps, 30.0);
        assert_eq!(engine.channel_capacity, 64);
        assert_eq!(engine.window.title, "Liberty");
        assert_eq!(engine.window.size, [1024, 768]);
    }

    #[test]
    fn explicit_rates_override_config() {
        let engine = EngineBuilder::<TestScene>::new()
            .with_config(GameConfig::default())
            .with_tps(120.0)
            .with_channel_capacity(256)
            .build(world());

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
    }

    #[test]
    fn init_reaches_systems_and_context() {
        let mut started = true;
        let mut title = String::new();

        let _engine = EngineBuilder::<TestScene>::new()
            .build(world())
            .init(|systems, context| {
                started = systems.scene_manager.is_active(TestScene::Main);
                title = context.config.window_title.clone();
            });

        assert!(!started);
        assert_eq!(title, "Streetwise");
    }
}
