//=========================================================================
// World Collaborators
//=========================================================================
//
// Seams to the systems this crate drives but does not implement: asset
// loading, collision queries and the session host (script VM, saves,
// audio).
//
// Components:
// - `ZoneLoader`: item definitions, zones, placements (runs on the
//   work queue, hence `Send + Sync`)
// - `CollisionWorld`: closest-hit ray query used by camera occlusion
// - `SessionHost`: campaign script, script threads, saves, background audio
// - `NullBackend`: does nothing, hits nothing
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use glam::Vec3;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::object::EntityId;

//=== LoadError ===========================================================

/// Failure reported by a [`ZoneLoader`]. Logged, never retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("descriptor not found: {0}")]
    NotFound(String),

    #[error("failed to parse {descriptor}: {reason}")]
    Malformed { descriptor: String, reason: String },
}

//=== RayHit ==============================================================

/// Closest hit of a ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub normal: Vec3,
    /// Position of the hit along the ray in `[0, 1]`.
    pub fraction: f32,
}

//=== Collaborator Traits =================================================

/// Populates the world from descriptors. Called from the work queue.
pub trait ZoneLoader: Send + Sync {
    fn define_items(&self, descriptor: &str) -> Result<(), LoadError>;
    fn load_zone(&self, descriptor: &str) -> Result<(), LoadError>;
    fn place_items(&self, descriptor: &str) -> Result<(), LoadError>;
}

/// Collision queries against static and dynamic geometry.
pub trait CollisionWorld: Send {
    /// Closest hit between `from` and `to`, ignoring `exclude`'s own body.
    fn ray_test(&self, from: Vec3, to: Vec3, exclude: Option<EntityId>) -> Option<RayHit>;
}

/// Script VM, save loading and audio playback.
pub trait SessionHost: Send {
    fn start_script(&mut self, path: &str);
    fn start_thread(&mut self, offset: u32);
    fn load_game(&mut self, save: &str);
    fn play_background(&mut self, path: &str);
}

//=== Collaborators =======================================================

/// Bundle of collaborator implementations handed to the world.
pub struct Collaborators {
    pub loader: Arc<dyn ZoneLoader>,
    pub collision: Box<dyn CollisionWorld>,
    pub session: Box<dyn SessionHost>,
}

impl Collaborators {
    /// Collaborators that do nothing.
    pub fn null() -> Self {
        Self {
            loader: Arc::new(NullBackend),
            collision: Box::new(NullBackend),
            session: Box::new(NullBackend),
        }
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::null()
    }
}

//=== NullBackend =========================================================

/// Loads nothing, hits nothing, plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl ZoneLoader for NullBackend {
    fn define_items(&self, _descriptor: &str) -> Result<(), LoadError> {
        Ok(())
    }

    fn load_zone(&self, _descriptor: &str) -> Result<(), LoadError> {
        Ok(())
    }

    fn place_items(&self, _descriptor: &str) -> Result<(), LoadError> {
        Ok(())
    }
}

impl CollisionWorld for NullBackend {
    fn ray_test(&self, _from: Vec3, _to: Vec3, _exclude: Option<EntityId>) -> Option<RayHit> {
        None
    }
}

impl SessionHost for NullBackend {
    fn start_script(&mut self, _path: &str) {}
    fn start_thread(&mut self, _offset: u32) {}
    fn load_game(&mut self, _save: &str) {}
    fn play_background(&mut self, _path: &str) {}
}

//=========================================================================
// Test Double
//=========================================================================
