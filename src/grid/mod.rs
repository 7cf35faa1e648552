//! Hex cell grid construction and storage
//!
//! This module contains the grid topology:
//! - The per-tile cell entity and its neighbor links
//! - Assembly of linked cells from a terrain sample
//! - The configuration-owning container with whole-grid swaps

/// Terrain sample to linked cell assembly
pub mod assembler;
/// Per-tile cell entity
pub mod cell;
/// Grid layout and swap-only cell container
pub mod container;

pub use assembler::GridAssembler;
pub use cell::{HexCell, Neighbor};
pub use container::{AssembledGrid, GridLayout, HexGrid};
