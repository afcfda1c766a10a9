//=========================================================================
// Camera Rig
//=========================================================================
//
// Owned camera state for one gameplay session.
//
// Tick (fixed rate):
//   tick_timer(dt) → auto_look(world, dt)
//
// Events:
//   apply_mouse_look(dx, dy)   (deltas already divided by window size)
//
// Draw (per frame, with interpolation factor α):
//   compute_pose(world, α, look_left, look_right) → CameraPose
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{EulerRot, Quat, Vec3};
use log::debug;

//=== Internal Dependencies ===============================================

use super::target::{look_rotation, occlude, orbit_offset, resolve_target};
use super::{
    CameraAngles, CameraMode, CameraPose, AUTO_LOOK_MIN_VELOCITY, AUTO_LOOK_TIME,
    MAX_ROTATION_RATE, VEHICLE_PITCH,
};
use crate::config::GameConfig;
use crate::core::world::GameWorld;

//=== CameraRig ===========================================================

#[derive(Debug, Clone)]
pub struct CameraRig {
    mode: CameraMode,
    angles: CameraAngles,
    autolook_timer: f32,
    invert_y: bool,
    vehicle_free_look: bool,
    pose: CameraPose,
}

impl CameraRig {
    //--- Construction -----------------------------------------------------

    pub fn new(invert_y: bool, vehicle_free_look: bool) -> Self {
        Self {
            mode: CameraMode::default(),
            angles: CameraAngles::default(),
            autolook_timer: 0.0,
            invert_y,
            vehicle_free_look,
            pose: CameraPose::default(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.invert_y, config.vehicle_free_look)
    }

    /// Back to the initial mode, angles and pose. Preferences are kept.
    pub fn reset(&mut self) {
        self.mode = CameraMode::default();
        self.angles = CameraAngles::default();
        self.autolook_timer = 0.0;
        self.pose = CameraPose::default();
    }

    /// Re-reads look preferences from the config.
    pub fn apply_config(&mut self, config: &GameConfig) {
        self.invert_y = config.invert_y;
        self.vehicle_free_look = config.vehicle_free_look;
    }

    //--- Accessors --------------------------------------------------------

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn angles(&self) -> CameraAngles {
        self.angles
    }

    pub fn set_angles(&mut self, angles: CameraAngles) {
        self.angles = angles;
    }

    pub fn autolook_timer(&self) -> f32 {
        self.autolook_timer
    }

    /// Last computed pose.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Advances to the next camera mode (wraps).
    pub fn cycle_mode(&mut self) -> CameraMode {
        self.mode = self.mode.next();
        debug!("Camera mode: {:?}", self.mode);
        self.mode
    }

    //--- Tick -------------------------------------------------------------

    /// Counts the auto-look suppression timer down, floored at zero.
    pub fn tick_timer(&mut self, dt: f32) {
        self.autolook_timer = (self.autolook_timer - dt).max(0.0);
    }

    /// Manual look from normalized mouse deltas (fraction of window size).
    pub fn apply_mouse_look(&mut self, dx: f32, dy: f32) {
        self.autolook_timer = AUTO_LOOK_TIME;
        let dy = if self.invert_y { dy } else { -dy };
        self.angles.yaw -= dx;
        self.angles.pitch += dy;
        self.angles.clamp_pitch();
    }

    /// Swings the camera behind a moving vehicle target.
    ///
    /// Idle while the timer runs, without a player, when the target is on
    /// foot, or when the vehicle is slower than `AUTO_LOOK_MIN_VELOCITY`.
    pub fn auto_look(&mut self, world: &GameWorld, dt: f32) {
        if self.autolook_timer > 0.0 || world.player().is_none() {
            return;
        }
        let Some(target) = resolve_target(world).and_then(|id| world.objects.get(id)) else {
            return;
        };
        let Some(vehicle) = target.as_vehicle() else {
            return;
        };
        if vehicle.velocity.abs() <= AUTO_LOOK_MIN_VELOCITY {
            return;
        }

        let mut ideal_yaw = heading(target.rotation());
        if vehicle.velocity < 0.0 {
            ideal_yaw -= PI;
        }
        let ideal_yaw = ideal_yaw.rem_euclid(TAU);

        let mut delta_yaw = ideal_yaw - self.angles.yaw.rem_euclid(TAU);
        if delta_yaw.abs() > PI {
            delta_yaw -= delta_yaw.signum() * TAU;
        }
        let delta_pitch = VEHICLE_PITCH - self.angles.pitch;

        let max_step = MAX_ROTATION_RATE * dt;
        self.angles.yaw += step_towards(delta_yaw, max_step);
        self.angles.pitch += step_towards(delta_pitch, max_step);
    }

    //--- Draw -------------------------------------------------------------

    /// Computes this frame's pose and stores it as the last pose.
    ///
    /// Without a player (or a resolvable target) the last pose is returned
    /// unchanged.
    pub fn compute_pose(
        &mut self,
        world: &GameWorld,
        alpha: f32,
        look_left: bool,
        look_right: bool,
    ) -> CameraPose {
        if world.player().is_none() {
            return self.pose;
        }
        let Some(target_id) = resolve_target(world) else {
            return self.pose;
        };
        let Some(target) = world.objects.get(target_id) else {
            return self.pose;
        };

        let mut distance = self.mode.view_distance();
        let transform = target.time_adjusted_transform(alpha);
        let mut eye = transform.position + Vec3::Z;
        let mut look_at = transform.position + Vec3::Z * 0.5;

        let vehicle = target.as_vehicle();
        if let Some(vehicle) = vehicle {
            distance += vehicle.bounding_radius * 2.0;
            let half_height = vehicle.dimensions.z * 0.5;
            eye.z += half_height;
            look_at.z += half_height;

            if !self.vehicle_free_look {
                self.angles.pitch = VEHICLE_PITCH;
            }
        }

        let candidate = if self.mode == CameraMode::TopDown {
            eye + Vec3::Z * distance
        } else if (look_left || look_right) && vehicle.is_some() {
            let mut rotation = target.rotation();
            if !look_right {
                rotation *= Quat::from_axis_angle(Vec3::NEG_Z, FRAC_PI_2);
            } else if !look_left {
                rotation *= Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
            }
            eye + rotation * Vec3::new(0.0, distance, 0.0)
        } else {
            eye + orbit_offset(self.angles, distance)
        };

        // Aim from the unoccluded position so pulling in does not tilt the view
        let rotation = look_rotation(look_at - candidate);
        let position = occlude(world.collision(), eye, candidate, Some(target_id));

        self.pose = CameraPose::new(position, rotation);
        self.pose
    }
}

//=== Helpers =============================================================

/// Rotation about the vertical axis.
fn heading(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::ZYX).0
}

/// `sign(delta) · min(max_step, |delta|)`.
fn step_towards(delta: f32, max_step: f32) -> f32 {
    if delta == 0.0 {
        return 0.0;
    }
    delta.signum() * max_step.min(delta.abs())
}

//=========================================================================
// Unit Tests
//=========================================================================
