//! Terrain resource materialization for assembled grids

/// Batched cell materialization stepped by the host
pub mod materializer;
/// Terrain resource handles and factories
pub mod resources;

pub use materializer::{BatchProgress, CellMaterializer, MaterializeObserver, MaterializeStep};
pub use resources::{ResourceRegistry, TerrainHandle, TerrainInstance, TerrainResources};
