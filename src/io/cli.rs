//! Command-line interface for headless grid generation runs

use crate::generator::HexCellGenerator;
use crate::geometry::HexOrientation;
use crate::grid::container::GridLayout;
use crate::io::configuration::{
    DEFAULT_BATCH_SIZE, DEFAULT_HEIGHT, DEFAULT_HEX_SIZE, DEFAULT_SEED, DEFAULT_WIDTH,
};
use crate::io::error::{Result, computation_error};
use crate::io::progress::BatchProgressBar;
use crate::materialize::resources::ResourceRegistry;
use crate::terrain::{RandomTerrain, TerrainType};
use clap::{ArgAction, Parser};
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hexcells")]
#[command(
    author,
    version,
    about = "Assemble and materialize a hex-cell grid from random terrain"
)]
/// Command-line arguments for a generation run
pub struct Cli {
    /// Number of grid columns
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of grid rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Distance from a hex center to its corners
    #[arg(long, default_value_t = DEFAULT_HEX_SIZE)]
    pub hex_size: f32,

    /// Hex orientation
    #[arg(short, long, value_enum, default_value_t = HexOrientation::FlatTop)]
    pub orientation: HexOrientation,

    /// Cells materialized per tick (0 materializes everything in one tick)
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Random seed for reproducible terrain
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Supersede a half-finished materialization this many times
    #[arg(short, long, default_value_t = 0)]
    pub regenerate: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Grid layout described by the arguments
    pub const fn layout(&self) -> GridLayout {
        GridLayout::new(self.width, self.height, self.hex_size, self.orientation)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Outcome of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations assembled, including superseded ones
    pub generations: usize,
    /// Cells in the final grid
    pub cells: usize,
    /// Batches used to materialize the final grid
    pub batches: usize,
    /// Terrain instances still alive at the end
    pub live_resources: usize,
    /// Terrain instances created over the whole run
    pub created_resources: usize,
    /// Terrain instances released over the whole run
    pub released_resources: usize,
    /// Cells per terrain type in the final grid
    pub terrain_counts: BTreeMap<TerrainType, usize>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} cells in {} batches ({} generations)",
            self.cells, self.batches, self.generations
        )?;
        writeln!(
            f,
            "terrain resources: {} live, {} created, {} released",
            self.live_resources, self.created_resources, self.released_resources
        )?;
        for (terrain, count) in &self.terrain_counts {
            writeln!(f, "  {terrain:<8} {count}")?;
        }
        Ok(())
    }
}

/// Drives a generator through the tick loop described by the CLI arguments
pub struct GridRunner {
    cli: Cli,
}

impl GridRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate, optionally supersede, and fully materialize a grid
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or generation fails
    pub fn run(&self) -> Result<RunSummary> {
        let layout = self.cli.layout();
        layout.validate()?;

        let source = RandomTerrain::new(self.cli.seed, layout.width, layout.height);
        let mut generator = HexCellGenerator::new(layout, source, ResourceRegistry::new())
            .with_batch_size(self.cli.batch_size);
        if self.cli.should_show_progress() {
            generator.set_observer(Box::new(BatchProgressBar::new()));
        }

        generator.generate()?;
        for round in 1..=self.cli.regenerate {
            let halfway = generator.progress().map_or(0, |p| p.total_batches / 2);
            for _ in 0..halfway {
                generator.tick()?;
            }
            let seed = self.cli.seed.wrapping_add(round as u64);
            generator
                .source_mut()
                .reseed(seed, layout.width, layout.height);
            generator.generate()?;
        }

        let progress = generator.run_to_completion()?;
        let assembled = generator
            .grid()
            .current()
            .ok_or_else(|| computation_error("grid run", &"no grid after generation"))?;

        let summary = RunSummary {
            generations: self.cli.regenerate + 1,
            cells: assembled.cell_count(),
            batches: progress.map_or(0, |p| p.completed_batches),
            live_resources: generator.resources().live_count(),
            created_resources: generator.resources().created_count(),
            released_resources: generator.resources().released_count(),
            terrain_counts: assembled.terrain_counts(),
        };
        info!(
            cells = summary.cells,
            batches = summary.batches,
            live = summary.live_resources,
            "run complete"
        );
        Ok(summary)
    }
}
