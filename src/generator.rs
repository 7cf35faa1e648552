//! Generation orchestration: terrain source to assembled grid to materialized cells
//!
//! A generate call validates the terrain sample before touching anything,
//! then cancels any in-flight materialization, releases every resource held
//! by the current cells, assembles the new grid in a staging area and swaps
//! it in whole. Materialization then advances one batch per host tick.

use tracing::{info, warn};

use crate::grid::assembler::GridAssembler;
use crate::grid::container::{GridLayout, HexGrid};
use crate::io::configuration::DEFAULT_BATCH_SIZE;
use crate::io::error::{GridError, Result};
use crate::materialize::materializer::{
    BatchProgress, CellMaterializer, MaterializeObserver, MaterializeStep,
};
use crate::materialize::resources::TerrainResources;
use crate::terrain::TerrainSource;

/// Owns a grid together with its terrain source and resource factory
pub struct HexCellGenerator<S, R> {
    grid: HexGrid,
    source: S,
    resources: R,
    batch_size: usize,
    materializer: Option<CellMaterializer>,
    observer: Option<Box<dyn MaterializeObserver>>,
}

impl<S, R> HexCellGenerator<S, R>
where
    S: TerrainSource,
    R: TerrainResources,
{
    /// Create a generator with an empty grid
    pub fn new(layout: GridLayout, source: S, resources: R) -> Self {
        Self {
            grid: HexGrid::new(layout),
            source,
            resources,
            batch_size: DEFAULT_BATCH_SIZE,
            materializer: None,
            observer: None,
        }
    }

    /// Set the batch size used by subsequent generations (0 = unbounded)
    #[must_use]
    pub const fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the batch size used by subsequent generations (0 = unbounded)
    pub const fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size;
    }

    /// Batch size used by subsequent generations
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Change the grid layout used by subsequent generations
    pub const fn set_layout(&mut self, layout: GridLayout) {
        self.grid.set_layout(layout);
    }

    /// Register the receiver of batch progress notifications
    pub fn set_observer(&mut self, observer: Box<dyn MaterializeObserver>) {
        self.observer = Some(observer);
    }

    /// The managed grid
    pub const fn grid(&self) -> &HexGrid {
        &self.grid
    }

    /// The terrain source
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Mutable terrain source, e.g. to reseed before regenerating
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The resource factory
    pub const fn resources(&self) -> &R {
        &self.resources
    }

    /// Whether a materialization is in flight
    pub const fn is_materializing(&self) -> bool {
        self.materializer.is_some()
    }

    /// Progress of the in-flight materialization
    pub fn progress(&self) -> Option<BatchProgress> {
        self.materializer.as_ref().map(CellMaterializer::progress)
    }

    /// Build a new grid from the terrain source and start materializing it
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terrain source fails or yields no map
    /// - The layout is invalid or the terrain shape does not match it; the
    ///   current grid and its resources are left untouched
    pub fn generate(&mut self) -> Result<()> {
        if self.source.terrain_map().is_none() {
            self.source.generate()?;
        }
        let terrain = self
            .source
            .terrain_map()
            .ok_or(GridError::TerrainUnavailable {
                source_name: self.source.name(),
            })?;

        let assembler = GridAssembler::new(*self.grid.layout());
        assembler.check_terrain(terrain)?;

        if let Some(materializer) = self.materializer.take() {
            let progress = materializer.progress();
            warn!(
                generation = materializer.generation(),
                processed = progress.cells_processed,
                cells = progress.cell_count,
                "cancelling in-flight materialization"
            );
        }
        let released = self.grid.clear_cells(&mut self.resources);

        let assembled = assembler.assemble(terrain)?;
        self.grid.swap(assembled);
        let materializer = CellMaterializer::new(&self.grid, self.batch_size)?;
        info!(
            generation = materializer.generation(),
            released,
            source = self.source.name(),
            "generated hex grid"
        );
        self.materializer = Some(materializer);
        Ok(())
    }

    /// Advance the in-flight materialization by one batch
    ///
    /// Returns `None` when nothing is being materialized.
    ///
    /// # Errors
    ///
    /// Propagates materialization errors
    pub fn tick(&mut self) -> Result<Option<MaterializeStep>> {
        let Some(materializer) = self.materializer.as_mut() else {
            return Ok(None);
        };
        let step = materializer.step(&mut self.grid, &mut self.resources)?;

        if let Some(observer) = self.observer.as_mut() {
            match step {
                MaterializeStep::Batch(progress) => observer.on_batch(progress),
                MaterializeStep::Complete(progress) => observer.on_complete(progress),
            }
        }
        if step.is_complete() {
            self.materializer = None;
        }
        Ok(Some(step))
    }

    /// Tick until the in-flight materialization finishes
    ///
    /// # Errors
    ///
    /// Propagates materialization errors
    pub fn run_to_completion(&mut self) -> Result<Option<BatchProgress>> {
        let mut last = None;
        while let Some(step) = self.tick()? {
            last = Some(step.progress());
        }
        Ok(last)
    }

    /// Cancel materialization and release every terrain resource
    ///
    /// The cells stay in place so the topology remains readable.
    pub fn clear(&mut self) -> usize {
        self.materializer = None;
        self.grid.clear_cells(&mut self.resources)
    }
}
