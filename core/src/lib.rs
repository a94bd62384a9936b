#![no_std]

extern crate alloc;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use farm::*;
pub use player::*;
pub use rules::*;
pub use schedule::*;
pub use tile::*;
pub use types::*;

pub mod shop;

mod engine;
mod error;
mod farm;
mod player;
mod rules;
mod schedule;
mod snapshot;
#[cfg(test)]
mod testing;
mod tile;
mod types;

bitflags! {
    /// Which persisted parts of the game an operation touched.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Changes: u8 {
        const PLAYER = 1;
        const FARM   = 1 << 1;
    }
}

/// Outcome of applying an [`Action`] to a tile
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    NoChange,
    Planted,
    Watered,
    PestRemoved,
    Harvested,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Experience the action is worth.
    pub const fn experience(self) -> u32 {
        use ActionOutcome::*;
        match self {
            NoChange => 0,
            Planted => 1,
            Watered => 1,
            PestRemoved => 1,
            Harvested => 3,
        }
    }

    pub const fn changes(self) -> Changes {
        if self.has_update() {
            Changes::PLAYER.union(Changes::FARM)
        } else {
            Changes::empty()
        }
    }
}

/// Per-tick tallies, each tile counts towards at most one of `dried` and `withered`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub dried: u8,
    pub grown: u8,
    pub infested: u8,
    pub withered: u8,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        self.dried > 0 || self.withered > 0
    }

    pub const fn changes(self) -> Changes {
        if self.has_update() {
            Changes::FARM
        } else {
            Changes::empty()
        }
    }

    pub(crate) fn record(&mut self, tile_tick: TileTick) {
        match tile_tick {
            TileTick::Idle => {}
            TileTick::Withered => self.withered += 1,
            TileTick::Dried { grew, infested } => {
                self.dried += 1;
                self.grown += u8::from(grew);
                self.infested += u8::from(infested);
            }
        }
    }
}
