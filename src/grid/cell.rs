//! Per-tile hex cell entity

use glam::Vec3;

use crate::geometry::layout::center;
use crate::geometry::{AxialCoordinates, HexDirection, OffsetCoordinates};
use crate::grid::container::GridLayout;
use crate::materialize::resources::{TerrainHandle, TerrainResources};
use crate::terrain::TerrainType;

/// Link from a cell to an adjacent in-grid cell
///
/// Links are non-owning: the target is resolved through the grid that owns
/// both cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    /// Edge of the owning cell this neighbor sits across
    pub direction: HexDirection,
    /// Offset coordinates of the neighbor
    pub offset: OffsetCoordinates,
}

/// A single hex tile: position, terrain and adjacency
///
/// Coordinates, center and terrain are fixed at creation. Neighbors are
/// wired once by the assembler after every cell exists. The terrain resource
/// is attached by the materializer and detached when the grid is cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    offset: OffsetCoordinates,
    axial: AxialCoordinates,
    center: Vec3,
    terrain: TerrainType,
    neighbors: Vec<Neighbor>,
    terrain_resource: Option<TerrainHandle>,
}

impl HexCell {
    /// Create an unlinked cell at `offset` for the given layout
    pub fn new(layout: &GridLayout, offset: OffsetCoordinates, terrain: TerrainType) -> Self {
        Self {
            offset,
            axial: offset.to_axial(layout.orientation),
            center: center(layout.hex_size, offset.x, offset.y, layout.orientation),
            terrain,
            neighbors: Vec::new(),
            terrain_resource: None,
        }
    }

    /// Position in the offset grid
    pub const fn offset(&self) -> OffsetCoordinates {
        self.offset
    }

    /// Position in axial space
    pub const fn axial(&self) -> AxialCoordinates {
        self.axial
    }

    /// World-space center
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Terrain classification
    pub const fn terrain(&self) -> TerrainType {
        self.terrain
    }

    /// In-grid neighbors in direction order (0 to 6 entries)
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Neighbor across the edge facing `direction`, if it is on the grid
    pub fn neighbor(&self, direction: HexDirection) -> Option<OffsetCoordinates> {
        self.neighbors
            .iter()
            .find(|neighbor| neighbor.direction == direction)
            .map(|neighbor| neighbor.offset)
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<Neighbor>) {
        self.neighbors = neighbors;
    }

    /// Handle of the instantiated terrain, if materialized
    pub const fn terrain_resource(&self) -> Option<TerrainHandle> {
        self.terrain_resource
    }

    /// Whether the terrain representation has been instantiated
    pub const fn is_materialized(&self) -> bool {
        self.terrain_resource.is_some()
    }

    /// Instantiate this cell's terrain representation
    ///
    /// Calling this twice is a caller error and is not deduplicated: a fresh
    /// instance is created and the displaced handle is returned so the caller
    /// can release it.
    pub fn create_terrain<R>(&mut self, resources: &mut R) -> Option<TerrainHandle>
    where
        R: TerrainResources + ?Sized,
    {
        let handle = resources.instantiate(self);
        self.terrain_resource.replace(handle)
    }

    /// Release the terrain representation, returning whether one was held
    pub fn clear_terrain<R>(&mut self, resources: &mut R) -> bool
    where
        R: TerrainResources + ?Sized,
    {
        let Some(handle) = self.terrain_resource.take() else {
            return false;
        };
        resources.release(handle);
        true
    }
}
