//=========================================================================
// Game Objects
//=========================================================================
//
// Entity registry for characters, vehicles and pickups.
//
// Architecture:
//   ObjectPool
//     └─ objects: HashMap<EntityId, GameObject>
//
// Objects are referenced by id everywhere. Consumers resolve ids through
// the pool each frame and treat a missing id as "gone".
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use glam::{Quat, Vec3};

//=== Constants ===========================================================

/// Number of inventory slots a character cycles through.
pub const INVENTORY_SLOTS: usize = 13;

//=== EntityId ============================================================

/// Opaque handle to an object in the [`ObjectPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

//=== Transform ===========================================================

/// Position and orientation of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Interpolates between `from` and `to` by `alpha` in `[0, 1]`.
    pub fn interpolate(from: &Transform, to: &Transform, alpha: f32) -> Transform {
        Transform {
            position: from.position.lerp(to.position, alpha),
            rotation: from.rotation.slerp(to.rotation, alpha),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

//=== Object Payloads =====================================================

/// Character-specific state.
#[derive(Debug, Clone, Default)]
pub struct CharacterData {
    /// Vehicle the character is sitting in.
    pub current_vehicle: Option<EntityId>,
    /// Active inventory slot in `[0, INVENTORY_SLOTS)`.
    pub active_slot: usize,
    /// Primary fire held.
    pub using_item: bool,
    /// Game time of the most recent jump.
    pub last_jump: Option<f32>,
}

impl CharacterData {
    /// Starts or stops using the active item.
    pub fn use_item(&mut self, active: bool, primary: bool) {
        if primary {
            self.using_item = active;
        }
    }

    /// Moves to the next (`forward`) or previous inventory slot, wrapping.
    pub fn cycle_inventory(&mut self, forward: bool) {
        self.active_slot = if forward {
            (self.active_slot + 1) % INVENTORY_SLOTS
        } else {
            (self.active_slot + INVENTORY_SLOTS - 1) % INVENTORY_SLOTS
        };
    }
}

/// Vehicle-specific state.
#[derive(Debug, Clone)]
pub struct VehicleData {
    pub model_id: u16,
    /// Bounding sphere radius of the model.
    pub bounding_radius: f32,
    /// Handling box dimensions (x = width, y = length, z = height).
    pub dimensions: Vec3,
    /// Signed forward speed; negative when reversing.
    pub velocity: f32,
    pub handbrake: bool,
    pub driver: Option<EntityId>,
}

/// Pickup-specific state.
#[derive(Debug, Clone)]
pub struct PickupData {
    pub model_id: u16,
    pub kind: PickupKind,
}

/// How a pickup behaves once collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// Lying on the street, respawns.
    OnStreet,
    /// Collected once.
    Once,
}

/// Per-type payload of a [`GameObject`].
#[derive(Debug, Clone)]
pub enum ObjectKind {
    Character(CharacterData),
    Vehicle(VehicleData),
    Pickup(PickupData),
}

//=== GameObject ==========================================================

/// An object living in the world.
///
/// Keeps the transform of the previous world step so that frames drawn
/// between steps can be interpolated.
#[derive(Debug, Clone)]
pub struct GameObject {
    id: EntityId,
    transform: Transform,
    previous: Transform,
    pub kind: ObjectKind,
}

impl GameObject {
    pub fn new(id: EntityId, transform: Transform, kind: ObjectKind) -> Self {
        Self {
            id,
            transform,
            previous: transform,
            kind,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    /// Transform blended between the previous and current world step.
    pub fn time_adjusted_transform(&self, alpha: f32) -> Transform {
        Transform::interpolate(&self.previous, &self.transform, alpha)
    }

    /// Records the current transform as the interpolation origin.
    pub(crate) fn snapshot(&mut self) {
        self.previous = self.transform;
    }

    //--- Typed Access -----------------------------------------------------

    pub fn as_character(&self) -> Option<&CharacterData> {
        match &self.kind {
            ObjectKind::Character(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_character_mut(&mut self) -> Option<&mut CharacterData> {
        match &mut self.kind {
            ObjectKind::Character(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_vehicle(&self) -> Option<&VehicleData> {
        match &self.kind {
            ObjectKind::Vehicle(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_vehicle_mut(&mut self) -> Option<&mut VehicleData> {
        match &mut self.kind {
            ObjectKind::Vehicle(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_vehicle(&self) -> bool {
        matches!(self.kind, ObjectKind::Vehicle(_))
    }
}

//=== ObjectPool ==========================================================

/// Id-keyed registry of every object in the world.
#[derive(Debug, Default)]
pub struct ObjectPool {
    objects: HashMap<EntityId, GameObject>,
    next_id: u32,
}

impl ObjectPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an id and inserts a new object.
    pub fn insert(&mut self, transform: Transform, kind: ObjectKind) -> EntityId {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.objects.insert(id, GameObject::new(id, transform, kind));
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<GameObject> {
        self.objects.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&GameObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut GameObject> {
        self.objects.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GameObject> {
        self.objects.values_mut()
    }

    /// Vehicle the given character currently sits in, if both exist.
    pub fn vehicle_of(&self, character: EntityId) -> Option<EntityId> {
        self.get(character)?
            .as_character()?
            .current_vehicle
            .filter(|vehicle| self.contains(*vehicle))
    }

    /// Closest unoccupied vehicle within `max_distance` of `position`.
    pub fn nearest_vehicle(&self, position: Vec3, max_distance: f32) -> Option<EntityId> {
        self.objects
            .values()
            .filter_map(|object| {
                let vehicle = object.as_vehicle()?;
                if vehicle.driver.is_some() {
                    return None;
                }
                let distance = object.position().distance(position);
                (distance <= max_distance).then_some((object.id(), distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn vehicle_at(pool: &mut ObjectPool, position: Vec3) -> EntityId {
        pool.insert(
            Transform::new(position, Quat::IDENTITY),
            ObjectKind::Vehicle(VehicleData {
                model_id: 90,
                bounding_radius: 2.0,
                dimensions: Vec3::new(2.0, 5.0, 1.5),
                velocity: 0.0,
                handbrake: false,
                driver: None,
            }),
        )
    }

    //=====================================================================
    // Pool Tests
    //=====================================================================

    #[test]
    fn ids_are_unique() {
        let mut pool = ObjectPool::new();
        let a = pool.insert(Transform::default(), ObjectKind::Character(CharacterData::default()));
        let b = pool.insert(Transform::default(), ObjectKind::Character(CharacterData::default()));
        assert_ne!(a, b);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn removed_ids_no_longer_resolve() {
        let mut pool = ObjectPool::new();
        let a = pool.insert(Transform::default(), ObjectKind::Character(CharacterData::default()));
        pool.remove(a);
        assert!(pool.get(a).is_none());
    }

    #[test]
    fn nearest_vehicle_picks_closest_free_one() {
        let mut pool = ObjectPool::new();
        let far = vehicle_at(&mut pool, Vec3::new(8.0, 0.0, 0.0));
        let near = vehicle_at(&mut pool, Vec3::new(3.0, 0.0, 0.0));
        let _out_of_range = vehicle_at(&mut pool, Vec3::new(50.0, 0.0, 0.0));

        assert_eq!(pool.nearest_vehicle(Vec3::ZERO, 10.0), Some(near));

        if let Some(data) = pool.get_mut(near).and_then(GameObject::as_vehicle_mut) {
            data.driver = Some(EntityId(999));
        }
        assert_eq!(pool.nearest_vehicle(Vec3::ZERO, 10.0), Some(far));
    }

    #[test]
    fn vehicle_of_ignores_stale_ids() {
        let mut pool = ObjectPool::new();
        let vehicle = vehicle_at(&mut pool, Vec3::ZERO);
        let character = pool.insert(
            Transform::default(),
            ObjectKind::Character(CharacterData {
                current_vehicle: Some(vehicle),
                ..Default::default()
            }),
        );

        assert_eq!(pool.vehicle_of(character), Some(vehicle));
        pool.remove(vehicle);
        assert_eq!(pool.vehicle_of(character), None);
    }

    //=====================================================================
    // Object Tests
    //=====================================================================

    #[test]
    fn time_adjusted_transform_blends_steps() {
        let mut pool = ObjectPool::new();
        let id = vehicle_at(&mut pool, Vec3::ZERO);
        let object = pool.get_mut(id).expect("vehicle exists");

        object.snapshot();
        object.set_position(Vec3::new(10.0, 0.0, 0.0));

        assert_eq!(object.time_adjusted_transform(0.0).position, Vec3::ZERO);
        assert_eq!(object.time_adjusted_transform(0.5).position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(object.time_adjusted_transform(1.0).position, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn inventory_cycles_both_ways() {
        let mut character = CharacterData::default();
        character.cycle_inventory(false);
        assert_eq!(character.active_slot, INVENTORY_SLOTS - 1);
        character.cycle_inventory(true);
        assert_eq!(character.active_slot, 0);
    }

    #[test]
    fn secondary_use_does_not_touch_primary() {
        let mut character = CharacterData::default();
        character.use_item(true, false);
        assert!(!character.using_item);
        character.use_item(true, true);
        assert!(character.using_item);
    }
}
