//=========================================================================
// Streetwise Engine — Library Root
//
// In-game layer of an open-world action game client: loading
// coordination, input sampling, player intent, the third-person camera
// and the scene lifecycle around them.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder` → `Engine`)
// - Expose the core systems and the built-in scenes for extension
// - Keep the winit platform layer private
//
// Typical usage:
// ```no_run
// use streetwise_engine::prelude::*;
// use streetwise_engine::core::world::{Collaborators, GameData};
// use streetwise_engine::scenes::{register_scenes, GameScene};
//
// fn main() -> Result<(), EngineError> {
//     let world = GameWorld::new(GameData::new("data"), Collaborators::null());
//     EngineBuilder::<GameScene>::new()
//         .build(world)
//         .init(|systems, _| register_scenes(&mut systems.scene_manager))
//         .run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the engine systems (input, camera, world, scenes). It is
// public for extension; applications mostly go through the prelude.
//
pub mod config;
pub mod core;
pub mod error;
pub mod prelude;
pub mod scenes;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and the winit event loop and is not part of
// the public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
