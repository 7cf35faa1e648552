//! Offset and axial hex coordinates, orientations and neighbor directions
//!
//! Offset coordinates index the rectangular grid array. Axial coordinates
//! (with the derived cube component `s`) carry the geometry: every neighbor
//! step is the same axial vector regardless of row or column parity.
//!
//! The offset schemes are "even-q" for flat-top grids (odd columns sit half
//! a hex towards -Z) and "even-r" for pointy-top grids (odd rows sit half a
//! hex towards -X).

use crate::io::configuration::HEX_SIDES;
use std::fmt;

/// Hex layout orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum HexOrientation {
    /// Flat edge on top, corners pointing along the X axis
    #[default]
    FlatTop,
    /// Corner on top, flat edges facing along the X axis
    PointyTop,
}

impl HexOrientation {
    /// Angle of corner 0 in degrees, measured from +X towards +Z
    pub const fn first_corner_degrees(self) -> f32 {
        match self {
            Self::FlatTop => 0.0,
            Self::PointyTop => -30.0,
        }
    }
}

impl fmt::Display for HexOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlatTop => write!(f, "flat-top"),
            Self::PointyTop => write!(f, "pointy-top"),
        }
    }
}

/// Position in the rectangular offset grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct OffsetCoordinates {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl OffsetCoordinates {
    /// Create offset coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to axial coordinates under the given orientation's offset scheme
    pub const fn to_axial(self, orientation: HexOrientation) -> AxialCoordinates {
        match orientation {
            HexOrientation::FlatTop => AxialCoordinates {
                q: self.x,
                r: self.y - (self.x + (self.x & 1)) / 2,
            },
            HexOrientation::PointyTop => AxialCoordinates {
                q: self.x - (self.y + (self.y & 1)) / 2,
                r: self.y,
            },
        }
    }
}

impl fmt::Display for OffsetCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axial hex coordinates; the cube coordinate `s` is implied as `-q - r`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AxialCoordinates {
    /// Column axis
    pub q: i32,
    /// Row axis
    pub r: i32,
}

impl AxialCoordinates {
    /// Create axial coordinates
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Third cube coordinate
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Cube coordinates `[q, r, s]`
    pub const fn cube(self) -> [i32; 3] {
        [self.q, self.r, self.s()]
    }

    /// Convert back to offset coordinates under the given orientation's offset scheme
    pub const fn to_offset(self, orientation: HexOrientation) -> OffsetCoordinates {
        match orientation {
            HexOrientation::FlatTop => OffsetCoordinates {
                x: self.q,
                y: self.r + (self.q + (self.q & 1)) / 2,
            },
            HexOrientation::PointyTop => OffsetCoordinates {
                x: self.q + (self.r + (self.r & 1)) / 2,
                y: self.r,
            },
        }
    }

    /// Neighbor one step away in `direction`
    pub const fn neighbor(self, direction: HexDirection) -> Self {
        let [dq, dr] = direction.axial_offset();
        Self {
            q: self.q + dq,
            r: self.r + dr,
        }
    }

    /// Number of steps between two hexes
    pub const fn distance(self, other: Self) -> u32 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = (self.s() - other.s()).unsigned_abs();
        (dq + dr + ds) / 2
    }
}

/// One of the six edge directions of a hex
///
/// Direction `i` faces the edge between corner `i` and corner `i + 1`, so the
/// order is clockwise when viewed from +Y with +X right and +Z down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HexDirection {
    /// Axial `(+1, 0)`
    D0,
    /// Axial `(0, +1)`
    D1,
    /// Axial `(-1, +1)`
    D2,
    /// Axial `(-1, 0)`
    D3,
    /// Axial `(0, -1)`
    D4,
    /// Axial `(+1, -1)`
    D5,
}

impl HexDirection {
    /// All directions in neighbor order
    pub const ALL: [Self; HEX_SIDES] = [Self::D0, Self::D1, Self::D2, Self::D3, Self::D4, Self::D5];

    /// Position of this direction in [`Self::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index` modulo six
    pub const fn from_index(index: usize) -> Self {
        match index % HEX_SIDES {
            0 => Self::D0,
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            _ => Self::D5,
        }
    }

    /// Direction pointing the other way
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Axial step `[dq, dr]` for this direction
    pub const fn axial_offset(self) -> [i32; 2] {
        match self {
            Self::D0 => [1, 0],
            Self::D1 => [0, 1],
            Self::D2 => [-1, 1],
            Self::D3 => [-1, 0],
            Self::D4 => [0, -1],
            Self::D5 => [1, -1],
        }
    }

    /// Angle of the edge normal in degrees, measured from +X towards +Z
    pub fn degrees(self, orientation: HexOrientation) -> f32 {
        orientation.first_corner_degrees() + 30.0 + 60.0 * self.index() as f32
    }
}
