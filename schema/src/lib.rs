// Pocket Duel Schema - Shared type definitions
// This crate contains the static data shapes shared between the battle engine
// and anything that authors or loads roster data.

// Re-export the main types
pub use moves::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod moves;
pub mod pokemon_types;
pub mod species_data;
