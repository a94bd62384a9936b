use rand::Rng;
use serde::Serialize;

use crate::*;

/// Contents of a single farm plot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub stage: Stage,
    /// Ticks since the tile was last watered.
    pub dryness: u8,
    pub pest: bool,
}

/// What a single tick did to one tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TileTick {
    Idle,
    Withered,
    Dried { grew: bool, infested: bool },
}

impl Tile {
    pub const EMPTY: Self = Self {
        stage: 0,
        dryness: 0,
        pest: false,
    };

    pub const fn is_empty(self) -> bool {
        self.stage == 0
    }

    pub const fn is_planted(self) -> bool {
        !self.is_empty()
    }

    pub const fn is_mature(self) -> bool {
        self.stage >= MATURE_STAGE
    }

    pub const fn is_dry(self) -> bool {
        self.dryness > 0
    }

    pub(crate) fn plant(&mut self) {
        *self = Self {
            stage: 1,
            ..Self::EMPTY
        };
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Dries the tile by one step, then withers, grows and rolls for pests in that order.
    ///
    /// Only a tile that survives the drying can grow or get infested, and the pest roll draws from `rng` exactly
    /// once per planted, pest-free tile.
    pub(crate) fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TileTick {
        if self.is_empty() {
            return TileTick::Idle;
        }

        self.dryness = self.dryness.saturating_add(1);
        if self.dryness >= WITHER_DRYNESS {
            self.clear();
            return TileTick::Withered;
        }

        let grew = self.dryness < GROWTH_DRYNESS_LIMIT && !self.is_mature();
        if grew {
            self.stage += 1;
        }

        let infested = !self.pest && self.is_dry() && rng.random_bool(PEST_CHANCE);
        if infested {
            self.pest = true;
        }

        TileTick::Dried { grew, infested }
    }
}
