//! dungeon Tree Builder - Dungeon tree construction module
//!
//! This crate is responsible for building dungeon trees from generation
//! parameters (exit, hazard and hidden-hazard probabilities, depth cap) and
//! handing them to the engine.

pub mod config;
pub mod generator;
pub mod random;

pub use config::DungeonConfig;
pub use generator::{
    generate_dungeon, new_session, synthesize_warning, GeneratedDungeon, TreeGenerator,
};
pub use random::RandomSource;
