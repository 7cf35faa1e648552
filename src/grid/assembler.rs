//! Grid assembly from terrain samples
//!
//! Assembly runs in three passes over a staging area that is only handed out
//! once complete:
//! 1. Create one cell per offset coordinate, row-major, sampling terrain at
//!    the reflected index `[height - 1 - y, width - 1 - x]`
//! 2. Move the cells into the dense offset-indexed array
//! 3. Resolve each cell's in-bounds neighbors through that array

use ndarray::Array2;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::geometry::HexDirection;
use crate::geometry::OffsetCoordinates;
use crate::geometry::layout::{is_out_of_bounds, neighbor_offset_coordinates};
use crate::grid::cell::{HexCell, Neighbor};
use crate::grid::container::{AssembledGrid, GridLayout};
use crate::io::error::{GridError, Result, computation_error};
use crate::terrain::{TerrainMap, TerrainType};

/// Builds fully linked [`AssembledGrid`]s for one layout
#[derive(Debug, Clone, Copy)]
pub struct GridAssembler {
    layout: GridLayout,
}

impl GridAssembler {
    /// Create an assembler for `layout`
    pub const fn new(layout: GridLayout) -> Self {
        Self { layout }
    }

    /// Layout the assembler builds
    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Assemble a complete grid from a terrain sample
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The layout fails validation
    /// - The terrain shape differs from `(height, width)`; no cell is created
    pub fn assemble(&self, terrain: &TerrainMap) -> Result<AssembledGrid> {
        self.check_terrain(terrain)?;
        debug!(
            width = self.layout.width,
            height = self.layout.height,
            orientation = %self.layout.orientation,
            "assembling hex grid"
        );

        let cells = self.generate_cells(terrain)?;
        let assembled = self.link_cells(cells)?;

        info!(cells = assembled.cell_count(), "hex grid assembled");
        Ok(assembled)
    }

    /// Validate the layout and the terrain sample shape
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TerrainDimensionMismatch`] when the sample shape is
    /// not `(height, width)`, or a parameter error for an invalid layout
    pub fn check_terrain(&self, terrain: &TerrainMap) -> Result<()> {
        self.layout.validate()?;
        if terrain.dim() != self.layout.shape() {
            return Err(GridError::TerrainDimensionMismatch {
                expected: self.layout.shape(),
                actual: terrain.dim(),
            });
        }
        Ok(())
    }

    /// Create every cell in assembly order with its terrain assigned
    ///
    /// # Errors
    ///
    /// Returns an error if a reflected sample index falls outside `terrain`
    pub fn generate_cells(&self, terrain: &TerrainMap) -> Result<Vec<HexCell>> {
        let (rows, cols) = self.layout.shape();
        let mut cells = Vec::with_capacity(self.layout.cell_count());
        for y in 0..rows {
            for x in 0..cols {
                let terrain_type = sample_reflected(terrain, x, y)?;
                let offset = OffsetCoordinates::new(x as i32, y as i32);
                cells.push(HexCell::new(&self.layout, offset, terrain_type));
            }
        }
        Ok(cells)
    }

    /// Arrange cells into the dense array and wire their neighbors
    ///
    /// # Errors
    ///
    /// Returns an error if the number of cells does not fill the layout
    pub fn link_cells(&self, cells: Vec<HexCell>) -> Result<AssembledGrid> {
        let mut array = Array2::from_shape_vec(self.layout.shape(), cells)?;

        let links: Vec<Vec<Neighbor>> = array
            .iter()
            .map(|cell| self.resolve_neighbors(&array, cell.offset()))
            .collect();
        for (cell, neighbors) in array.iter_mut().zip(links) {
            cell.set_neighbors(neighbors);
        }

        let axial_index: HashMap<_, _> = array
            .iter()
            .map(|cell| (cell.axial(), cell.offset()))
            .collect();

        Ok(AssembledGrid::new(self.layout, array, axial_index))
    }

    fn resolve_neighbors(&self, array: &Array2<HexCell>, offset: OffsetCoordinates) -> Vec<Neighbor> {
        let candidates = neighbor_offset_coordinates(offset.x, offset.y, self.layout.orientation);
        HexDirection::ALL
            .into_iter()
            .zip(candidates)
            .filter(|(_, candidate)| {
                !is_out_of_bounds(candidate.x, candidate.y, self.layout.width, self.layout.height)
            })
            .filter_map(|(direction, candidate)| {
                self.layout
                    .storage_index(candidate)
                    .and_then(|index| array.get(index))
                    .map(|neighbor| Neighbor {
                        direction,
                        offset: neighbor.offset(),
                    })
            })
            .collect()
    }
}

/// Terrain for offset `(x, y)`, read from the sample mirrored on both axes
///
/// # Errors
///
/// Returns an error if the reflected index is outside the sample
pub fn sample_reflected(terrain: &TerrainMap, x: usize, y: usize) -> Result<TerrainType> {
    let (rows, cols) = terrain.dim();
    let row = rows.checked_sub(y + 1);
    let col = cols.checked_sub(x + 1);
    row.zip(col)
        .and_then(|(row, col)| terrain.get([row, col]))
        .copied()
        .ok_or_else(|| {
            computation_error(
                "terrain sampling",
                &format!("offset ({x}, {y}) has no reflected sample in a {rows}x{cols} map"),
            )
        })
}
