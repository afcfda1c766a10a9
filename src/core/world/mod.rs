//=========================================================================
// Game World
//=========================================================================
//
// Owns everything the in-game layer reads and mutates each tick.
//
// Architecture:
//   GameWorld
//     ├─ objects: ObjectPool          (entity registry, id lookups)
//     ├─ state: GameState             (money, controls, camera target, cutscene)
//     ├─ data: GameData               (descriptors and catalogues)
//     ├─ player: Option<PlayerController>
//     ├─ work: WorkQueue              (background loading jobs)
//     └─ collaborators                (loader, collision, session host)
//
// The world lives on the logic thread and is mutated without locks. Only
// loader jobs cross to the work queue's worker.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod backend;
pub mod data;
pub mod object;
pub mod player;
pub mod state;
pub mod work_queue;

//=== Public API ==========================================================

pub use backend::{
    Collaborators, CollisionWorld, LoadError, NullBackend, RayHit, SessionHost, ZoneLoader,
};
pub use data::{GameData, VehicleInfo, WeaponInfo};
pub use object::{
    CharacterData, EntityId, GameObject, ObjectKind, ObjectPool, PickupData, PickupKind,
    Transform, VehicleData,
};
pub use player::{Activity, ActivityKind, PlayerController};
pub use state::{Cutscene, GameState, PlayerInfo};
pub use work_queue::WorkQueue;

//=== External Dependencies ===============================================

use std::sync::Arc;

use glam::{Quat, Vec3};
use log::{debug, info, warn};

//=== GameWorld ===========================================================

pub struct GameWorld {
    pub objects: ObjectPool,
    pub state: GameState,
    pub data: GameData,
    pub player: Option<PlayerController>,
    work: WorkQueue,
    loader: Arc<dyn ZoneLoader>,
    collision: Box<dyn CollisionWorld>,
    session: Box<dyn SessionHost>,
}

impl GameWorld {
    //--- Construction -----------------------------------------------------

    pub fn new(data: GameData, collaborators: Collaborators) -> Self {
        Self {
            objects: ObjectPool::new(),
            state: GameState::new(),
            data,
            player: None,
            work: WorkQueue::new(),
            loader: collaborators.loader,
            collision: collaborators.collision,
            session: collaborators.session,
        }
    }

    //--- Loading ----------------------------------------------------------

    /// Queues loading of an item-definition descriptor.
    pub fn define_items(&self, descriptor: &str) {
        self.submit_load("define_items", descriptor, |loader, d| loader.define_items(d));
    }

    /// Queues loading of a zone descriptor.
    pub fn load_zone(&self, descriptor: &str) {
        self.submit_load("load_zone", descriptor, |loader, d| loader.load_zone(d));
    }

    /// Queues placement of a zone's item instances.
    pub fn place_items(&self, descriptor: &str) {
        self.submit_load("place_items", descriptor, |loader, d| loader.place_items(d));
    }

    /// True once every queued loading job has finished.
    pub fn is_work_empty(&self) -> bool {
        self.work.is_empty()
    }

    fn submit_load<F>(&self, stage: &'static str, descriptor: &str, load: F)
    where
        F: FnOnce(&dyn ZoneLoader, &str) -> Result<(), LoadError> + Send + 'static,
    {
        let loader = Arc::clone(&self.loader);
        let descriptor = descriptor.to_string();
        debug!("Queued {} {}", stage, descriptor);

        self.work.submit(move || {
            if let Err(e) = load(loader.as_ref(), &descriptor) {
                warn!("{} failed: {}", stage, e);
            }
        });
    }

    //--- Collaborators ----------------------------------------------------

    pub fn collision(&self) -> &dyn CollisionWorld {
        self.collision.as_ref()
    }

    pub fn session(&mut self) -> &mut dyn SessionHost {
        self.session.as_mut()
    }

    //--- Spawning ---------------------------------------------------------

    /// Creates the player character and takes control of it.
    pub fn create_player(&mut self, position: Vec3) -> EntityId {
        let id = self.objects.insert(
            Transform::new(position, Quat::IDENTITY),
            ObjectKind::Character(CharacterData::default()),
        );
        self.player = Some(PlayerController::new(id));
        self.state.player_object = Some(id);
        info!("Player created at {:?}", position);
        id
    }

    pub fn create_pickup(&mut self, position: Vec3, model_id: u16, kind: PickupKind) -> EntityId {
        self.objects.insert(
            Transform::new(position, Quat::IDENTITY),
            ObjectKind::Pickup(PickupData { model_id, kind }),
        )
    }

    /// Spawns a vehicle, falling back to generic handling for uncatalogued
    /// models.
    pub fn create_vehicle(&mut self, model_id: u16, position: Vec3, rotation: Quat) -> EntityId {
        let info = match self.data.vehicle_info(model_id) {
            Some(info) => info.clone(),
            None => {
                debug!("Vehicle model {} not catalogued, using generic handling", model_id);
                VehicleInfo::default()
            }
        };

        self.objects.insert(
            Transform::new(position, rotation),
            ObjectKind::Vehicle(VehicleData {
                model_id,
                bounding_radius: info.bounding_radius,
                dimensions: info.dimensions(),
                velocity: 0.0,
                handbrake: false,
                driver: None,
            }),
        )
    }

    /// Drops every object and all per-session state. Data catalogues,
    /// collaborators and queued loading work are kept.
    pub fn reset_session(&mut self) {
        debug!("Resetting session ({} objects dropped)", self.objects.len());
        self.objects = ObjectPool::new();
        self.state = GameState::new();
        self.player = None;
    }

    //--- Queries ----------------------------------------------------------

    /// The player controller, if its character still exists.
    pub fn player(&self) -> Option<&PlayerController> {
        self.player
            .as_ref()
            .filter(|player| self.objects.contains(player.character()))
    }

    pub fn player_mut(&mut self) -> Option<&mut PlayerController> {
        let objects = &self.objects;
        self.player
            .as_mut()
            .filter(|player| objects.contains(player.character()))
    }

    //--- Simulation -------------------------------------------------------

    /// Advances the world by one step.
    ///
    /// Records interpolation origins, advances game time, consumes
    /// pending cutscene skips and jumps and progresses the player's
    /// activity.
    pub fn step(&mut self, dt: f32) {
        for object in self.objects.iter_mut() {
            object.snapshot();
        }

        self.state.game_time += dt;

        if self.state.skip_cutscene {
            self.state.skip_cutscene = false;
            if let Some(cutscene) = self.state.current_cutscene.take() {
                info!("Cutscene {} skipped", cutscene.name);
            }
        }

        if let Some(player) = self.player.as_mut() {
            if player.take_jump() {
                let time = self.state.game_time;
                if let Some(data) = self
                    .objects
                    .get_mut(player.character())
                    .and_then(GameObject::as_character_mut)
                {
                    debug!("Player jumped at {:.2}s", time);
                    data.last_jump = Some(time);
                }
            }
            player.update_activity(&mut self.objects, dt);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
