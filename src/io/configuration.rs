//! Grid constants and runtime configuration defaults

// Default values for configurable parameters
/// Default number of columns in the offset grid
pub const DEFAULT_WIDTH: usize = 32;
/// Default number of rows in the offset grid
pub const DEFAULT_HEIGHT: usize = 32;
/// Default distance from a hex center to any of its corners
pub const DEFAULT_HEX_SIZE: f32 = 1.0;

/// Cells materialized per host tick before yielding
pub const DEFAULT_BATCH_SIZE: usize = 2;

/// Fixed seed for reproducible terrain
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Number of sides (and corners, and neighbors) of a hex
pub const HEX_SIDES: usize = 6;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
