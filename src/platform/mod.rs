//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Bridges winit (OS-level events) with the logic thread over a bounded
// crossbeam channel.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  EventCollector  │
//  │   ↓                      │    │  ↓               │
//  │  InputProcessor          │    │  GameSystems     │
//  │   ├─ Converts winit      │    │   ├─ InputSystem │
//  │   └─ Tracks modifiers    │    │   └─ Scenes      │
//  │   ↓                      │    │                  │
//  │  InputBuffer             │    └──────────────────┘
//  │   ├─ discrete (ordered)  │             ↑
//  │   └─ continuous (merged) │             │
//  │   ↓                      │             │
//  │  RedrawRequested (flush) │             │
//  │   ↓                      │             │
//  │  Channel ────────────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// Frame boundary is `RedrawRequested`: everything buffered since the last
// one is sent as a single message; empty frames are not sent.
//
// The logic thread holds the sending half of a liveness channel. Once it
// disconnects (quit, shutdown or panic) the event loop exits on the next
// frame boundary.
//
// Winit mandates the main thread on macOS/iOS, so this runs on the thread
// that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::config::GameConfig;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::PlatformEvent;
use crate::error::PlatformError;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowSettings ======================================================

/// Window attributes taken from the game config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowSettings {
    pub(crate) title: String,
    pub(crate) size: [u32; 2],
}

impl WindowSettings {
    pub(crate) fn from_config(config: &GameConfig) -> Self {
        Self {
            title: config.window_title.clone(),
            size: config.window_size,
        }
    }
}

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Not Send/Sync in practice: it owns the window and must stay on the main
/// thread. Everything reaching the logic thread goes through
/// `event_sender`.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    settings: WindowSettings,

    /// Buffers discrete/continuous input until frame boundary.
    buffer: InputBuffer,

    /// Channel to send events to core thread.
    event_sender: Sender<PlatformEvent>,

    /// Disconnects when the logic thread ends.
    core_alive: Receiver<()>,

    /// Converts winit events to engine InputEvents.
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance. The window is created lazily in
    /// `resumed()`.
    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        core_alive: Receiver<()>,
        settings: WindowSettings,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            settings,
            buffer: InputBuffer::new(),
            event_sender,
            core_alive,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes or the logic
    /// thread goes away.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// terminates abnormally.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    fn core_is_alive(&self) -> bool {
        !matches!(self.core_alive.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Sends buffered input to the logic thread.
    ///
    /// Returns `false` if the channel is disconnected; the frame's events
    /// are dropped in that case.
    fn flush_input_buffer(&mut self) -> bool {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return true;
        };

        let discrete_count = discrete.len();
        let continuous_count = continuous.len();

        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events ({} discrete, {} continuous)",
                discrete_count + continuous_count,
                discrete_count,
                continuous_count
            );
            return false;
        }
        true
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let [width, height] = self.settings.size;
        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(width, height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                // Logical and physical size differ on HiDPI screens
                self.buffer.push_continuous(InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::Focused(focused) => {
                debug!(target: "platform", "Window focus: {}", focused);
                self.buffer.push(InputEvent::Focused(*focused));
            }

            WindowEvent::Resized(size) => {
                self.buffer.push(InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(position.x, position.y);
                self.buffer.push(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let event = self.input_processor.process_mouse_wheel(*delta);
                self.buffer.push(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped or repeated key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push(event);
            }

            WindowEvent::RedrawRequested => {
                if !self.core_is_alive() || !self.flush_input_buffer() {
                    info!(target: "platform", "Core thread gone, closing event loop");
                    event_loop.exit();
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    /// Raw mouse motion drives mouse look; it keeps arriving when the
    /// cursor hits the screen edge.
    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            let event = self.input_processor.process_mouse_motion(dx, dy);
            self.buffer.push(event);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
