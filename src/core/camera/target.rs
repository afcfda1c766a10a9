//=========================================================================
// Camera Targeting
//=========================================================================
//
// Stateless helpers: target resolution, orbit placement, look rotation
// and occlusion correction.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};

//=== Internal Dependencies ===============================================

use super::{CameraAngles, OCCLUSION_OFFSET};
use crate::core::world::{CollisionWorld, EntityId, GameWorld};

//=== Target Resolution ===================================================

/// Object the camera follows this frame.
///
/// The explicit camera target wins when it still exists; otherwise the
/// player's character. A character sitting in a vehicle is replaced by
/// the vehicle.
pub fn resolve_target(world: &GameWorld) -> Option<EntityId> {
    let target = world
        .state
        .camera_target
        .filter(|id| world.objects.contains(*id))
        .or_else(|| world.player().map(|player| player.character()))?;

    Some(world.objects.vehicle_of(target).unwrap_or(target))
}

//=== Placement ===========================================================

/// Orbit offset for the given angles: `R_z(yaw − π/2) · R_y(pitch) · (0, 0, distance)`.
pub fn orbit_offset(angles: CameraAngles, distance: f32) -> Vec3 {
    let yaw = Quat::from_rotation_z(angles.yaw - FRAC_PI_2);
    let pitch = Quat::from_rotation_y(angles.pitch);
    yaw * pitch * Vec3::new(0.0, 0.0, distance)
}

/// Rotation that aims the camera's +X axis along `direction`.
pub fn look_rotation(direction: Vec3) -> Quat {
    let dir = direction.normalize_or_zero();
    let pitch = dir.z.atan2(dir.truncate().length());
    let yaw = dir.y.atan2(dir.x);
    Quat::from_euler(EulerRot::ZYX, yaw, -pitch, 0.0)
}

//=== Occlusion ===========================================================

/// Pulls `candidate` in front of whatever blocks the line from `eye`.
///
/// On a hit short of the candidate the camera sits on the hit point,
/// nudged along the surface normal.
pub fn occlude(
    collision: &dyn CollisionWorld,
    eye: Vec3,
    candidate: Vec3,
    exclude: Option<EntityId>,
) -> Vec3 {
    match collision.ray_test(eye, candidate, exclude) {
        Some(hit) if hit.fraction < 1.0 => hit.point + hit.normal * OCCLUSION_OFFSET,
        _ => candidate,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
