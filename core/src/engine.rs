use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// Owns the whole simulated state: the player, the farm and the random source for pest rolls.
///
/// Every mutation returns an outcome carrying a [`Changes`] set, the caller decides how to persist and render it.
#[derive(Clone, Debug)]
pub struct FarmEngine {
    player: PlayerState,
    farm: Farm,
    rng: SmallRng,
}

impl FarmEngine {
    pub fn new(player: PlayerState, farm: Farm, seed: u64) -> Self {
        Self {
            player,
            farm,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn farm(&self) -> &Farm {
        &self.farm
    }

    pub fn tile_at(&self, index: TileIndex) -> Tile {
        self.farm.tile_at(index)
    }

    pub fn apply(&mut self, action: Action, index: TileIndex) -> Result<ActionOutcome> {
        let outcome = self.farm.apply(action, index, &mut self.player)?;
        if outcome.has_update() {
            log::debug!("{:?} on tile {}: {:?}", action, index, outcome);
            self.award(outcome.experience());
        } else {
            log::trace!("{:?} on tile {} had no effect", action, index);
        }
        Ok(outcome)
    }

    pub fn tick(&mut self) -> TickOutcome {
        let Self { farm, rng, .. } = self;
        farm.tick(rng)
    }

    /// Like [`FarmEngine::tick`] but rolls pests from `rng` instead of the engine's own source.
    pub fn tick_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        self.farm.tick(rng)
    }

    pub fn buy_seed(&mut self) -> Result<Changes> {
        shop::buy_seed(&mut self.player)?;
        Ok(Changes::PLAYER)
    }

    fn award(&mut self, experience: u32) {
        let levels = self.player.gain_experience(experience);
        if levels > 0 {
            log::info!("reached level {}", self.player.level);
        }
    }
}

impl Default for FarmEngine {
    fn default() -> Self {
        Self::new(Default::default(), Default::default(), 0)
    }
}
