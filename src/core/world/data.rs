//=========================================================================
// Game Data
//=========================================================================
//
// Static catalogues the world is populated from: item-definition and
// zone/placement descriptors (name → path), weapon and vehicle tables.
//
// Descriptor maps are ordered (BTreeMap) so the loading passes visit
// them in a stable order.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{BTreeMap, HashMap};

use glam::Vec3;
use serde::{Deserialize, Serialize};

//=== Catalogue Entries ===================================================

/// A weapon entry; index 0 is conventionally "unarmed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponInfo {
    pub name: String,
    pub model_id: u16,
}

/// Handling information for a vehicle model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub name: String,
    pub bounding_radius: f32,
    /// x = width, y = length, z = height.
    pub dimensions: [f32; 3],
}

impl VehicleInfo {
    pub fn dimensions(&self) -> Vec3 {
        Vec3::from_array(self.dimensions)
    }
}

impl Default for VehicleInfo {
    fn default() -> Self {
        Self {
            name: "generic".to_string(),
            bounding_radius: 3.0,
            dimensions: [2.0, 5.0, 1.6],
        }
    }
}

//=== GameData ============================================================

/// Descriptor and catalogue tables consumed by loading and spawning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameData {
    /// Root of the game data directory (audio and script paths hang off it).
    pub data_path: String,
    /// Item-definition descriptors.
    pub item_definitions: BTreeMap<String, String>,
    /// Zone/placement descriptors.
    pub zones: BTreeMap<String, String>,
    pub weapons: Vec<WeaponInfo>,
    pub vehicles: HashMap<u16, VehicleInfo>,
}

impl GameData {
    pub fn new(data_path: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
            ..Default::default()
        }
    }

    /// Registers an item-definition descriptor.
    pub fn add_item_definition(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.item_definitions.insert(name.into(), path.into());
    }

    /// Registers a zone/placement descriptor.
    pub fn add_zone(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.zones.insert(name.into(), path.into());
    }

    /// Looks up a vehicle model, if catalogued.
    pub fn vehicle_info(&self, model_id: u16) -> Option<&VehicleInfo> {
        self.vehicles.get(&model_id)
    }

    /// Path under the data directory.
    pub fn data_file(&self, relative: &str) -> String {
        format!("{}{}", self.data_path, relative)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
