//! Hex coordinate systems and layout math
//!
//! This module contains the geometry used by grid assembly:
//! - Offset, axial and cube coordinates with conversions
//! - Orientation-dependent world centers and corners
//! - Neighbor direction order and offset lookups

/// Coordinate types, orientations and directions
pub mod coordinates;
/// World-space centers, corners and neighbor offsets
pub mod layout;

pub use coordinates::{AxialCoordinates, HexDirection, HexOrientation, OffsetCoordinates};
