//! Seeded random terrain source

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::Result;
use crate::terrain::source::{TerrainMap, TerrainSource, TerrainType};

/// Uniformly random terrain, reproducible from its seed
///
/// Stands in for a real height sampler when driving the grid from the CLI
/// or benchmarks.
#[derive(Debug, Clone)]
pub struct RandomTerrain {
    seed: u64,
    width: usize,
    height: usize,
    map: Option<TerrainMap>,
}

impl RandomTerrain {
    /// Create a source that will sample a `height` by `width` map on demand
    pub const fn new(seed: u64, width: usize, height: usize) -> Self {
        Self {
            seed,
            width,
            height,
            map: None,
        }
    }

    /// Seed used for the next generation
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Change seed and dimensions, dropping any previously generated map
    pub fn reseed(&mut self, seed: u64, width: usize, height: usize) {
        self.seed = seed;
        self.width = width;
        self.height = height;
        self.map = None;
    }
}

impl TerrainSource for RandomTerrain {
    fn name(&self) -> &'static str {
        "random"
    }

    fn generate(&mut self) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let map = Array2::from_shape_simple_fn((self.height, self.width), || {
            let index = rng.random_range(0..TerrainType::ALL.len());
            TerrainType::ALL
                .get(index)
                .copied()
                .unwrap_or(TerrainType::Water)
        });
        self.map = Some(map);
        Ok(())
    }

    fn terrain_map(&self) -> Option<&TerrainMap> {
        self.map.as_ref()
    }
}
