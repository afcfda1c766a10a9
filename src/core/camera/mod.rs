//=========================================================================
// Camera Controller
//=========================================================================
//
// Third-person / vehicle / top-down camera for the in-game scene.
//
// Architecture:
//   CameraRig (owned by the in-game scene)
//     ├─ mode: CameraMode            (cycled by command)
//     ├─ angles: CameraAngles        (mouse look + auto-look)
//     ├─ autolook_timer              (suppresses auto-look after manual look)
//     └─ pose: CameraPose            (last computed output)
//
// Per frame:
//   resolve_target() → ideal position for the mode → look_rotation()
//     → occlude() → CameraPose
//
// Angles are radians. Pitch is measured from the vertical axis, so π/2
// is level with the horizon.
//
//=========================================================================

//=== Module Declarations =================================================

mod rig;
mod target;

//=== Public API ==========================================================

pub use rig::CameraRig;
pub use target::{look_rotation, occlude, orbit_offset, resolve_target};

//=== External Dependencies ===============================================

use std::f32::consts::{FRAC_PI_2, FRAC_PI_8, PI};

use glam::{Quat, Vec3};

//=== Constants ===========================================================

/// Seconds of auto-look suppression after manual mouse look.
pub const AUTO_LOOK_TIME: f32 = 2.0;

/// Vehicle speed below which auto-look stays idle.
pub const AUTO_LOOK_MIN_VELOCITY: f32 = 0.2;

/// Auto-look turn rate in radians per second.
pub const MAX_ROTATION_RATE: f32 = FRAC_PI_2;

/// Pitch stays within `[PITCH_LIMIT, π - PITCH_LIMIT]`.
pub const PITCH_LIMIT: f32 = FRAC_PI_8;

/// Pitch auto-look settles on behind a vehicle (slightly above level).
pub const VEHICLE_PITCH: f32 = FRAC_PI_2 - PI / 16.0;

/// Field of view of the in-game camera.
pub const INGAME_FOV: f32 = FRAC_PI_2;

/// Distance the camera is pushed off an occluding surface.
pub const OCCLUSION_OFFSET: f32 = 0.1;

//=== CameraMode ==========================================================

/// Camera distance preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    Close,
    #[default]
    Normal,
    Far,
    TopDown,
}

impl CameraMode {
    /// Number of modes in the cycle.
    pub const COUNT: usize = 4;

    const ORDER: [CameraMode; CameraMode::COUNT] = [
        CameraMode::Close,
        CameraMode::Normal,
        CameraMode::Far,
        CameraMode::TopDown,
    ];

    /// Next mode in the cycle, wrapping after `TopDown`.
    pub fn next(self) -> Self {
        Self::ORDER[(self as usize + 1) % Self::COUNT]
    }

    /// Distance from the eye point before vehicle adjustment.
    pub fn view_distance(self) -> f32 {
        match self {
            Self::Close => 2.0,
            Self::Normal => 4.0,
            Self::Far => 6.0,
            Self::TopDown => 15.0,
        }
    }
}

//=== CameraAngles ========================================================

/// Orbit angles around the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAngles {
    pub yaw: f32,
    /// Measured from the vertical axis; π/2 is level.
    pub pitch: f32,
}

impl CameraAngles {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Clamps pitch into the allowed range.
    pub fn clamp_pitch(&mut self) {
        self.pitch = self.pitch.clamp(PITCH_LIMIT, PI - PITCH_LIMIT);
    }
}

impl Default for CameraAngles {
    fn default() -> Self {
        Self::new(0.0, FRAC_PI_2)
    }
}

//=== CameraPose ==========================================================

/// Immutable output of the camera for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
    pub fov: f32,
}

impl CameraPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            fov: INGAME_FOV,
        }
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::X
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
