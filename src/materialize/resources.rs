//! Terrain resource handles and the presentation-side factory contract

use glam::Vec3;
use std::collections::HashMap;
use tracing::warn;

use crate::geometry::OffsetCoordinates;
use crate::grid::cell::HexCell;
use crate::terrain::TerrainType;

/// Opaque handle to an instantiated terrain representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerrainHandle(u64);

impl TerrainHandle {
    /// Wrap a raw resource id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw resource id
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Factory that instantiates and destroys per-cell terrain representations
///
/// Implemented by the presentation layer (meshes, colliders, sprites...).
pub trait TerrainResources {
    /// Create the representation for `cell` and return its handle
    fn instantiate(&mut self, cell: &HexCell) -> TerrainHandle;

    /// Destroy a representation previously returned by [`Self::instantiate`]
    fn release(&mut self, handle: TerrainHandle);
}

/// Record of one live terrain instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainInstance {
    /// Cell the instance was created for
    pub offset: OffsetCoordinates,
    /// Terrain classification it represents
    pub terrain: TerrainType,
    /// World-space placement
    pub position: Vec3,
}

/// In-memory [`TerrainResources`] that tracks live instances
///
/// Useful for headless runs and for asserting that regeneration never leaks.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    instances: HashMap<TerrainHandle, TerrainInstance>,
    next_id: u64,
    created: usize,
    released: usize,
}

impl ResourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instances created and not yet released
    pub fn live_count(&self) -> usize {
        self.instances.len()
    }

    /// Total instances ever created
    pub const fn created_count(&self) -> usize {
        self.created
    }

    /// Total instances ever released
    pub const fn released_count(&self) -> usize {
        self.released
    }

    /// Look up a live instance
    pub fn get(&self, handle: TerrainHandle) -> Option<&TerrainInstance> {
        self.instances.get(&handle)
    }
}

impl TerrainResources for ResourceRegistry {
    fn instantiate(&mut self, cell: &HexCell) -> TerrainHandle {
        let handle = TerrainHandle::new(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.instances.insert(
            handle,
            TerrainInstance {
                offset: cell.offset(),
                terrain: cell.terrain(),
                position: cell.center(),
            },
        );
        handle
    }

    fn release(&mut self, handle: TerrainHandle) {
        if self.instances.remove(&handle).is_some() {
            self.released += 1;
        } else {
            warn!(handle = handle.id(), "release of unknown terrain handle");
        }
    }
}
