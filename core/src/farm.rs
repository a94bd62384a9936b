use core::ops::Index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player intent applied to a single tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[default]
    Plant,
    Water,
    RemovePest,
    Harvest,
}

impl Action {
    pub const ALL: [Action; 4] = [Self::Plant, Self::Water, Self::RemovePest, Self::Harvest];
}

/// The fixed grid of plots, in row-major order.
///
/// Saved farms are loaded through [`Farm::from_snapshot`] only, which repairs damaged records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Farm {
    tiles: [Tile; TILE_COUNT],
}

impl Farm {
    pub const fn from_tiles(tiles: [Tile; TILE_COUNT]) -> Self {
        Self { tiles }
    }

    pub fn validate_index(&self, index: TileIndex) -> Result<TileIndex> {
        if usize::from(index) < self.tiles.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidTile)
        }
    }

    pub fn tile_at(&self, index: TileIndex) -> Tile {
        self[index]
    }

    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    #[cfg(test)]
    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile; TILE_COUNT] {
        &mut self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileIndex, Tile)> + '_ {
        (0..).zip(self.tiles.iter().copied())
    }

    pub fn planted_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_planted()).count()
    }

    /// Applies `action` to the tile at `index`, paying for or rewarding it through `player`.
    ///
    /// An action whose precondition does not hold is not an error, it just reports [`ActionOutcome::NoChange`].
    /// Experience is not awarded here, see [`ActionOutcome::experience`].
    pub fn apply(
        &mut self,
        action: Action,
        index: TileIndex,
        player: &mut PlayerState,
    ) -> Result<ActionOutcome> {
        use ActionOutcome::*;

        let index = self.validate_index(index)?;
        let tile = &mut self.tiles[usize::from(index)];

        Ok(match action {
            Action::Plant => {
                if tile.is_empty() && player.spend(Resources::seeds(1)).is_ok() {
                    tile.plant();
                    Planted
                } else {
                    NoChange
                }
            }
            Action::Water => {
                if tile.is_planted() && tile.is_dry() {
                    tile.dryness = 0;
                    Watered
                } else {
                    NoChange
                }
            }
            Action::RemovePest => {
                if tile.pest {
                    tile.pest = false;
                    PestRemoved
                } else {
                    NoChange
                }
            }
            Action::Harvest => {
                if tile.is_mature() {
                    tile.clear();
                    player.earn(Resources::coins(HARVEST_COINS));
                    Harvested
                } else {
                    NoChange
                }
            }
        })
    }

    /// Runs one periodic update over every tile, drawing pest rolls from `rng`.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        for (index, tile) in self.tiles.iter_mut().enumerate() {
            let tile_tick = tile.tick(rng);
            if tile_tick != TileTick::Idle {
                log::trace!("tile {}: {:?} -> {:?}", index, tile_tick, tile);
            }
            outcome.record(tile_tick);
        }
        log::debug!("farm tick: {:?}", outcome);
        outcome
    }
}

impl Index<TileIndex> for Farm {
    type Output = Tile;

    fn index(&self, index: TileIndex) -> &Self::Output {
        &self.tiles[usize::from(index)]
    }
}
