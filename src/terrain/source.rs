//! Terrain classifications and the terrain source contract

use ndarray::Array2;
use std::fmt;

use crate::io::error::{Result, invalid_parameter};

/// Terrain classification assigned to a hex cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TerrainType {
    /// Open water
    Water,
    /// Beaches and dunes
    Sand,
    /// Grassland
    Grass,
    /// Woodland
    Forest,
    /// Rocky highland
    Mountain,
    /// Snow-capped peaks
    Snow,
}

impl TerrainType {
    /// Every classification, lowest elevation first
    pub const ALL: [Self; 6] = [
        Self::Water,
        Self::Sand,
        Self::Grass,
        Self::Forest,
        Self::Mountain,
        Self::Snow,
    ];
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Water => "water",
            Self::Sand => "sand",
            Self::Grass => "grass",
            Self::Forest => "forest",
            Self::Mountain => "mountain",
            Self::Snow => "snow",
        };
        f.write_str(name)
    }
}

/// Terrain sample indexed `[row, col]`, shape `(height, width)`
pub type TerrainMap = Array2<TerrainType>;

/// Provider of terrain samples for grid assembly
///
/// Callers use generate-if-absent: [`TerrainSource::generate`] is only invoked
/// when [`TerrainSource::terrain_map`] returns `None`.
pub trait TerrainSource {
    /// Short name used in logs and errors
    fn name(&self) -> &'static str;

    /// Produce (or reproduce) the terrain map
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a map
    fn generate(&mut self) -> Result<()>;

    /// Current terrain map, if one has been generated
    fn terrain_map(&self) -> Option<&TerrainMap>;
}

/// Terrain source backed by a fixed, caller-supplied map
#[derive(Debug, Clone)]
pub struct StaticTerrain {
    map: TerrainMap,
}

impl StaticTerrain {
    /// Wrap an existing terrain map
    pub const fn new(map: TerrainMap) -> Self {
        Self { map }
    }

    /// Build a map from nested rows, row 0 first
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged
    pub fn from_rows(rows: &[Vec<TerrainType>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(invalid_parameter(
                "rows",
                &row.len(),
                &format!("every row must have {width} columns"),
            ));
        }
        let flat: Vec<TerrainType> = rows.iter().flatten().copied().collect();
        let map = Array2::from_shape_vec((height, width), flat)?;
        Ok(Self { map })
    }
}

impl TerrainSource for StaticTerrain {
    fn name(&self) -> &'static str {
        "static"
    }

    fn generate(&mut self) -> Result<()> {
        Ok(())
    }

    fn terrain_map(&self) -> Option<&TerrainMap> {
        Some(&self.map)
    }
}
