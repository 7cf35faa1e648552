//! Batched, host-driven cell materialization
//!
//! The materializer is an explicit step function: each call to
//! [`CellMaterializer::step`] instantiates at most one batch of cells in
//! assembly order and then returns control to the host, which resumes it on
//! a later tick. Dropping the materializer cancels the remaining work; the
//! resources already created stay on their cells until the grid is cleared.

use std::num::NonZeroUsize;
use tracing::{debug, info, warn};

use crate::grid::container::HexGrid;
use crate::io::error::{GridError, Result, computation_error};
use crate::materialize::resources::TerrainResources;

/// Snapshot of materialization progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// Batches finished so far
    pub completed_batches: usize,
    /// Batches needed for the whole grid, `ceil(cell_count / batch_size)`
    pub total_batches: usize,
    /// Cells materialized so far
    pub cells_processed: usize,
    /// Cells in the grid generation being materialized
    pub cell_count: usize,
}

impl BatchProgress {
    /// Completed batches as a fraction of all batches, in `[0, 1]`
    pub fn fraction(&self) -> f32 {
        if self.total_batches == 0 {
            1.0
        } else {
            self.completed_batches as f32 / self.total_batches as f32
        }
    }

    /// Whether every cell has been materialized
    pub const fn is_complete(&self) -> bool {
        self.cells_processed >= self.cell_count
    }
}

/// Outcome of a single materialization step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializeStep {
    /// A batch finished and more cells remain
    Batch(BatchProgress),
    /// Every cell has been materialized
    Complete(BatchProgress),
}

impl MaterializeStep {
    /// Progress after this step
    pub const fn progress(&self) -> BatchProgress {
        match self {
            Self::Batch(progress) | Self::Complete(progress) => *progress,
        }
    }

    /// Whether materialization has finished
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Receiver of fire-and-forget progress notifications
pub trait MaterializeObserver {
    /// Called after each batch that leaves work remaining
    fn on_batch(&mut self, _progress: BatchProgress) {}

    /// Called once when the last cell has been materialized
    fn on_complete(&mut self, _progress: BatchProgress) {}
}

/// Cursor over one grid generation's cells, advanced one batch per step
#[derive(Debug, Clone)]
pub struct CellMaterializer {
    generation: u64,
    batch_size: Option<NonZeroUsize>,
    cursor: usize,
    cell_count: usize,
    completed_batches: usize,
}

impl CellMaterializer {
    /// Create a materializer for the grid's current generation
    ///
    /// A `batch_size` of zero means unbounded: the whole grid is processed in
    /// a single step.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::StaleMaterialization`] if the grid holds no cells
    pub fn new(grid: &HexGrid, batch_size: usize) -> Result<Self> {
        let (Some(generation), Some(assembled)) = (grid.generation(), grid.current()) else {
            return Err(GridError::StaleMaterialization {
                expected: 0,
                found: None,
            });
        };
        Ok(Self::for_generation(
            generation,
            assembled.cell_count(),
            batch_size,
        ))
    }

    /// Create a materializer for an explicit generation and cell count
    pub const fn for_generation(generation: u64, cell_count: usize, batch_size: usize) -> Self {
        Self {
            generation,
            batch_size: NonZeroUsize::new(batch_size),
            cursor: 0,
            cell_count,
            completed_batches: 0,
        }
    }

    /// Grid generation this materializer works on
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Cells per batch, `None` when unbounded
    pub const fn batch_size(&self) -> Option<NonZeroUsize> {
        self.batch_size
    }

    /// Batches needed for the whole generation
    pub const fn total_batches(&self) -> usize {
        match self.batch_size {
            Some(batch_size) => self.cell_count.div_ceil(batch_size.get()),
            None => {
                if self.cell_count > 0 {
                    1
                } else {
                    0
                }
            }
        }
    }

    /// Current progress
    pub const fn progress(&self) -> BatchProgress {
        BatchProgress {
            completed_batches: self.completed_batches,
            total_batches: self.total_batches(),
            cells_processed: self.cursor,
            cell_count: self.cell_count,
        }
    }

    /// Whether every cell has been processed
    pub const fn is_complete(&self) -> bool {
        self.cursor >= self.cell_count
    }

    /// Materialize the next batch of cells in assembly order
    ///
    /// Once complete, further calls do no work and keep returning
    /// [`MaterializeStep::Complete`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::StaleMaterialization`] if the grid has been
    /// regenerated since this materializer was created
    pub fn step<R>(&mut self, grid: &mut HexGrid, resources: &mut R) -> Result<MaterializeStep>
    where
        R: TerrainResources + ?Sized,
    {
        let found = grid.generation();
        if found != Some(self.generation) {
            return Err(GridError::StaleMaterialization {
                expected: self.generation,
                found,
            });
        }
        if self.is_complete() {
            return Ok(MaterializeStep::Complete(self.progress()));
        }
        let Some(assembled) = grid.current_mut() else {
            return Err(GridError::StaleMaterialization {
                expected: self.generation,
                found: None,
            });
        };

        if self.cursor == 0 {
            info!(
                cells = self.cell_count,
                batches = self.total_batches(),
                "materializing hex cells"
            );
        }

        let end = self.batch_size.map_or(self.cell_count, |batch_size| {
            (self.cursor + batch_size.get()).min(self.cell_count)
        });
        for index in self.cursor..end {
            let cell = assembled.cell_in_order_mut(index).ok_or_else(|| {
                computation_error(
                    "cell materialization",
                    &format!("no cell at assembly index {index}"),
                )
            })?;
            if let Some(displaced) = cell.create_terrain(resources) {
                warn!(offset = %cell.offset(), "cell was already materialized");
                resources.release(displaced);
            }
        }
        self.cursor = end;
        self.completed_batches += 1;

        let progress = self.progress();
        debug!(
            batch = progress.completed_batches,
            total = progress.total_batches,
            "materialized batch"
        );
        if self.is_complete() {
            info!(cells = self.cell_count, "hex cells materialized");
            Ok(MaterializeStep::Complete(progress))
        } else {
            Ok(MaterializeStep::Batch(progress))
        }
    }

    /// Step until every cell has been materialized
    ///
    /// # Errors
    ///
    /// Propagates any error from [`CellMaterializer::step`]
    pub fn run_to_completion<R>(
        &mut self,
        grid: &mut HexGrid,
        resources: &mut R,
    ) -> Result<BatchProgress>
    where
        R: TerrainResources + ?Sized,
    {
        loop {
            if let MaterializeStep::Complete(progress) = self.step(grid, resources)? {
                return Ok(progress);
            }
        }
    }
}
