//! Hex-cell grid construction from rectangular terrain samples
//!
//! Terrain samples are turned into a fully linked graph of hex cells with
//! offset, axial and world-space coordinates. Cells are then materialized
//! in small batches driven by the host's own tick loop.

#![forbid(unsafe_code)]

/// Generation orchestration with regeneration and cancellation
pub mod generator;
/// Hex coordinate systems and layout math
pub mod geometry;
/// Cell entity, grid assembly and the grid container
pub mod grid;
/// Input/output, configuration and error handling
pub mod io;
/// Batched terrain resource materialization
pub mod materialize;
/// Terrain types and sources
pub mod terrain;

pub use generator::HexCellGenerator;
pub use io::error::{GridError, Result};
