//! Grid configuration and the swap-only container for assembled cells
//!
//! The container never exposes a partially built grid: a fully assembled
//! [`AssembledGrid`] replaces the previous one in a single swap, and each
//! swap starts a new generation.

use glam::Vec3;
use ndarray::Array2;
use std::collections::{BTreeMap, HashMap};

use crate::geometry::layout::{corners, is_out_of_bounds};
use crate::geometry::{AxialCoordinates, HexOrientation, OffsetCoordinates};
use crate::grid::cell::HexCell;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_HEX_SIZE, DEFAULT_WIDTH, HEX_SIDES, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::materialize::resources::TerrainResources;
use crate::terrain::TerrainType;

/// Dimensions and geometry of a hex grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Number of columns (offset x range)
    pub width: usize,
    /// Number of rows (offset y range)
    pub height: usize,
    /// Distance from a hex center to each of its corners
    pub hex_size: f32,
    /// Flat-top or pointy-top layout
    pub orientation: HexOrientation,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            hex_size: DEFAULT_HEX_SIZE,
            orientation: HexOrientation::default(),
        }
    }
}

impl GridLayout {
    /// Create a layout
    pub const fn new(
        width: usize,
        height: usize,
        hex_size: f32,
        orientation: HexOrientation,
    ) -> Self {
        Self {
            width,
            height,
            hex_size,
            orientation,
        }
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Terrain sample shape this layout expects (rows, cols)
    pub const fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Whether `offset` lies on the grid
    pub const fn contains(&self, offset: OffsetCoordinates) -> bool {
        !is_out_of_bounds(offset.x, offset.y, self.width, self.height)
    }

    /// Storage index `[row, col]` of an on-grid offset
    pub const fn storage_index(&self, offset: OffsetCoordinates) -> Option<[usize; 2]> {
        if self.contains(offset) {
            Some([offset.y as usize, offset.x as usize])
        } else {
            None
        }
    }

    /// Check dimensions and hex size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`], or if the hex size is not a positive finite number
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if !self.hex_size.is_finite() || self.hex_size <= 0.0 {
            return Err(invalid_parameter(
                "hex_size",
                &self.hex_size,
                &"must be a positive finite number",
            ));
        }
        Ok(())
    }
}

/// Fully linked set of cells for one grid generation
///
/// Cells are stored with shape `(height, width)` so that memory order is the
/// assembly order (row-major, y then x). Use [`AssembledGrid::get`] to
/// address cells by offset `(x, y)`.
#[derive(Debug, Clone)]
pub struct AssembledGrid {
    layout: GridLayout,
    cells: Array2<HexCell>,
    axial_index: HashMap<AxialCoordinates, OffsetCoordinates>,
}

impl AssembledGrid {
    pub(crate) const fn new(
        layout: GridLayout,
        cells: Array2<HexCell>,
        axial_index: HashMap<AxialCoordinates, OffsetCoordinates>,
    ) -> Self {
        Self {
            layout,
            cells,
            axial_index,
        }
    }

    /// Layout this grid was assembled with
    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Dense cell storage, indexed `[y, x]`
    pub const fn cells(&self) -> &Array2<HexCell> {
        &self.cells
    }

    /// Cell at offset `(x, y)`
    pub fn get(&self, x: i32, y: i32) -> Option<&HexCell> {
        self.cell(OffsetCoordinates::new(x, y))
    }

    /// Cell at `offset`
    pub fn cell(&self, offset: OffsetCoordinates) -> Option<&HexCell> {
        self.layout
            .storage_index(offset)
            .and_then(|index| self.cells.get(index))
    }

    /// Mutable cell at `offset`
    pub fn cell_mut(&mut self, offset: OffsetCoordinates) -> Option<&mut HexCell> {
        self.layout
            .storage_index(offset)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Cell at axial coordinates
    pub fn cell_at_axial(&self, axial: AxialCoordinates) -> Option<&HexCell> {
        self.axial_index
            .get(&axial)
            .and_then(|&offset| self.cell(offset))
    }

    /// Mutable cell at position `index` of the assembly order
    pub(crate) fn cell_in_order_mut(&mut self, index: usize) -> Option<&mut HexCell> {
        let x = index.checked_rem(self.layout.width)?;
        let y = index.checked_div(self.layout.width)?;
        self.cells.get_mut([y, x])
    }

    /// All cells in assembly order (y ascending, then x ascending)
    pub fn assembly_order(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.iter()
    }

    /// Resolved neighbors of the cell at `offset`, in direction order
    pub fn neighbors_of(&self, offset: OffsetCoordinates) -> impl Iterator<Item = &HexCell> {
        self.cell(offset)
            .into_iter()
            .flat_map(|cell| cell.neighbors().iter())
            .filter_map(|neighbor| self.cell(neighbor.offset))
    }

    /// World-space corner points of the cell at `offset`, in corner order
    pub fn outline(&self, offset: OffsetCoordinates) -> Option<[Vec3; HEX_SIDES]> {
        let cell = self.cell(offset)?;
        let center = cell.center();
        Some(corners(self.layout.hex_size, self.layout.orientation).map(|corner| center + corner))
    }

    /// Number of cells per terrain type
    pub fn terrain_counts(&self) -> BTreeMap<TerrainType, usize> {
        let mut counts = BTreeMap::new();
        for cell in &self.cells {
            *counts.entry(cell.terrain()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of cells with an instantiated terrain representation
    pub fn materialized_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_materialized()).count()
    }

    /// Release every held terrain resource, returning how many were released
    pub fn clear_terrain<R>(&mut self, resources: &mut R) -> usize
    where
        R: TerrainResources + ?Sized,
    {
        let mut released = 0;
        for cell in &mut self.cells {
            if cell.clear_terrain(resources) {
                released += 1;
            }
        }
        released
    }
}

/// Owner of the grid configuration and the current assembled cells
#[derive(Debug, Clone, Default)]
pub struct HexGrid {
    layout: GridLayout,
    current: Option<AssembledGrid>,
    generation: u64,
}

impl HexGrid {
    /// Create an empty grid with the given configuration
    pub const fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            current: None,
            generation: 0,
        }
    }

    /// Configuration used for the next assembly
    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Change the configuration; takes effect at the next assembly
    pub const fn set_layout(&mut self, layout: GridLayout) {
        self.layout = layout;
    }

    /// Currently held cells, if any generation has been swapped in
    pub const fn current(&self) -> Option<&AssembledGrid> {
        self.current.as_ref()
    }

    /// Mutable access to the currently held cells
    pub const fn current_mut(&mut self) -> Option<&mut AssembledGrid> {
        self.current.as_mut()
    }

    /// Generation of the currently held cells
    pub const fn generation(&self) -> Option<u64> {
        if self.current.is_some() {
            Some(self.generation)
        } else {
            None
        }
    }

    /// Replace the held cells wholesale, returning the previous set
    ///
    /// Starts a new generation. The previous cells are handed back untouched;
    /// release their resources with [`HexGrid::clear_cells`] before swapping.
    pub fn swap(&mut self, assembled: AssembledGrid) -> Option<AssembledGrid> {
        self.generation += 1;
        self.current.replace(assembled)
    }

    /// Release every terrain resource held by the current cells
    pub fn clear_cells<R>(&mut self, resources: &mut R) -> usize
    where
        R: TerrainResources + ?Sized,
    {
        self.current
            .as_mut()
            .map_or(0, |assembled| assembled.clear_terrain(resources))
    }

    /// Cell at `offset` in the current generation
    pub fn cell(&self, offset: OffsetCoordinates) -> Option<&HexCell> {
        self.current.as_ref().and_then(|assembled| assembled.cell(offset))
    }

    /// Cell at axial coordinates in the current generation
    pub fn cell_at_axial(&self, axial: AxialCoordinates) -> Option<&HexCell> {
        self.current
            .as_ref()
            .and_then(|assembled| assembled.cell_at_axial(axial))
    }
}
