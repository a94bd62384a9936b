use core::time::Duration;

use crate::*;

/// Farm grid dimensions `(rows, cols)`.
pub const GRID_SIZE: Coord2 = (5, 5);

pub const TILE_COUNT: usize = mult(GRID_SIZE.0, GRID_SIZE.1) as usize;

pub const MATURE_STAGE: Stage = 4;

/// Dryness at which a planted tile withers back to empty.
pub const WITHER_DRYNESS: u8 = 3;

/// Tiles only grow while their dryness stays below this.
pub const GROWTH_DRYNESS_LIMIT: u8 = 2;

/// Chance per tick that a dry, pest-free tile gets infested.
pub const PEST_CHANCE: f64 = 0.2;

pub const HARVEST_COINS: u32 = 5;

pub const SEED_PRICE: u32 = 1;

/// Experience needed per level, the threshold for level `n` is `n * EXPERIENCE_PER_LEVEL`.
pub const EXPERIENCE_PER_LEVEL: u32 = 20;

pub const TICK_INTERVAL: Duration = Duration::from_secs(20);

pub const DEFAULT_COINS: u32 = 10;
pub const DEFAULT_SEEDS: u32 = 3;
