//! Terrain sample input for grid assembly

/// Seeded random terrain source
pub mod random;
/// Terrain types, maps and the source trait
pub mod source;

pub use random::RandomTerrain;
pub use source::{StaticTerrain, TerrainMap, TerrainSource, TerrainType};
