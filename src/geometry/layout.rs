//! Pure hex layout math: world centers, corners and neighbor offsets
//!
//! World space is the XZ plane with Y up. All functions are stateless and
//! parameterized by [`HexOrientation`].

use glam::Vec3;

use crate::geometry::coordinates::{HexDirection, HexOrientation, OffsetCoordinates};
use crate::io::configuration::HEX_SIDES;

/// Square root of three, the center-to-center pitch of unit hexes
pub const SQRT_3: f32 = 1.732_050_8;

/// World-space center of the hex at offset `(x, y)`
///
/// Flat-top grids step 1.5 sizes per column and shift odd columns half a
/// pitch towards -Z. Pointy-top grids step 1.5 sizes per row and shift odd
/// rows half a pitch towards -X. Adjacent cells are always `SQRT_3 * hex_size`
/// apart.
pub fn center(hex_size: f32, x: i32, y: i32, orientation: HexOrientation) -> Vec3 {
    match orientation {
        HexOrientation::FlatTop => {
            let shift = (x & 1) as f32 * 0.5;
            Vec3::new(
                hex_size * 1.5 * x as f32,
                0.0,
                hex_size * SQRT_3 * (y as f32 - shift),
            )
        }
        HexOrientation::PointyTop => {
            let shift = (y & 1) as f32 * 0.5;
            Vec3::new(
                hex_size * SQRT_3 * (x as f32 - shift),
                0.0,
                hex_size * 1.5 * y as f32,
            )
        }
    }
}

/// Offsets of the six corners from a hex center, in corner order
///
/// Corner `i` sits at `60° * i` for flat-top and `60° * i - 30°` for
/// pointy-top, measured from +X towards +Z.
pub fn corners(hex_size: f32, orientation: HexOrientation) -> [Vec3; HEX_SIDES] {
    let first = orientation.first_corner_degrees();
    std::array::from_fn(|i| {
        let angle = (first + 60.0 * i as f32).to_radians();
        Vec3::new(hex_size * angle.cos(), 0.0, hex_size * angle.sin())
    })
}

/// Offset coordinates of the six neighbors of `(x, y)`, in direction order
///
/// Parity of the column (flat-top) or row (pointy-top) is handled by routing
/// each step through axial space. Entries may lie outside the grid; callers
/// filter with [`is_out_of_bounds`].
pub fn neighbor_offset_coordinates(
    x: i32,
    y: i32,
    orientation: HexOrientation,
) -> [OffsetCoordinates; HEX_SIDES] {
    let axial = OffsetCoordinates::new(x, y).to_axial(orientation);
    HexDirection::ALL.map(|direction| axial.neighbor(direction).to_offset(orientation))
}

/// True iff `(x, y)` lies outside a `width` by `height` grid
pub const fn is_out_of_bounds(x: i32, y: i32, width: usize, height: usize) -> bool {
    x < 0 || y < 0 || x as usize >= width || y as usize >= height
}
