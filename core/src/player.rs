use serde::{Deserialize, Serialize};

use crate::*;

/// Balances moved by a single spend or earn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Resources {
    pub coins: u32,
    pub seeds: u32,
}

impl Resources {
    pub const fn coins(coins: u32) -> Self {
        Self { coins, seeds: 0 }
    }

    pub const fn seeds(seeds: u32) -> Self {
        Self { coins: 0, seeds }
    }
}

/// Balances and level progress of the local player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub coins: u32,
    pub seeds: u32,
    /// Premium balance, shown but never changed by any rule.
    pub usd: u32,
    #[serde(rename = "exp")]
    pub experience: u32,
    pub level: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            coins: DEFAULT_COINS,
            seeds: DEFAULT_SEEDS,
            usd: 0,
            experience: 0,
            level: 1,
        }
    }
}

impl PlayerState {
    /// Experience needed to leave the current level.
    pub const fn experience_to_next_level(&self) -> u32 {
        self.level.saturating_mul(EXPERIENCE_PER_LEVEL)
    }

    /// Adds experience and levels up as many times as it covers, returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut levels = 0;
        while self.experience >= self.experience_to_next_level() {
            self.experience -= self.experience_to_next_level();
            self.level = self.level.saturating_add(1);
            levels += 1;
        }
        levels
    }

    pub fn can_afford(&self, cost: Resources) -> bool {
        self.check_afford(cost).is_ok()
    }

    /// Takes `cost` out of the balances, or changes nothing if either balance would go negative.
    pub fn spend(&mut self, cost: Resources) -> Result<()> {
        self.check_afford(cost)?;
        self.coins -= cost.coins;
        self.seeds -= cost.seeds;
        Ok(())
    }

    pub fn earn(&mut self, income: Resources) {
        self.coins = self.coins.saturating_add(income.coins);
        self.seeds = self.seeds.saturating_add(income.seeds);
    }

    fn check_afford(&self, cost: Resources) -> Result<()> {
        if self.coins < cost.coins {
            Err(GameError::InsufficientCoins)
        } else if self.seeds < cost.seeds {
            Err(GameError::InsufficientSeeds)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(level: u32, experience: u32) -> PlayerState {
        PlayerState {
            level,
            experience,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_match_new_game_balances() {
        let player = PlayerState::default();

        assert_eq!(player.coins, 10);
        assert_eq!(player.seeds, 3);
        assert_eq!(player.usd, 0);
        assert_eq!(player.experience, 0);
        assert_eq!(player.level, 1);
        assert_eq!(player.experience_to_next_level(), 20);
    }

    #[test]
    fn gaining_below_threshold_keeps_level() {
        let mut player = PlayerState::default();

        assert_eq!(player.gain_experience(19), 0);
        assert_eq!((player.level, player.experience), (1, 19));
    }

    #[test]
    fn exact_threshold_levels_up_with_zero_remainder() {
        let mut player = PlayerState::default();

        assert_eq!(player.gain_experience(20), 1);
        assert_eq!((player.level, player.experience), (2, 0));
    }

    #[test]
    fn large_gain_jumps_several_levels_at_once() {
        let mut player = PlayerState::default();

        // 20 + 40 + 60 to reach level 4, 5 left over
        assert_eq!(player.gain_experience(125), 3);
        assert_eq!((player.level, player.experience), (4, 5));
    }

    #[test]
    fn experience_always_ends_below_the_threshold() {
        for start_level in 1..6 {
            for amount in 0..400 {
                let mut player = player_at(start_level, 0);
                player.gain_experience(amount);
                assert!(player.experience < player.experience_to_next_level());
                assert!(player.level >= start_level);
            }
        }
    }

    #[test]
    fn progression_depends_only_on_total_experience() {
        let gains = [1, 3, 1, 17, 40, 3, 0, 22, 1];

        let mut stepwise = PlayerState::default();
        for amount in gains {
            stepwise.gain_experience(amount);
        }

        let mut reversed = PlayerState::default();
        for amount in gains.iter().rev() {
            reversed.gain_experience(*amount);
        }

        let mut lump = PlayerState::default();
        lump.gain_experience(gains.iter().sum());

        assert_eq!(stepwise, lump);
        assert_eq!(reversed, lump);
    }

    #[test]
    fn spend_rejects_without_touching_balances() {
        let mut player = PlayerState {
            coins: 0,
            seeds: 1,
            ..Default::default()
        };
        let before = player.clone();

        assert_eq!(
            player.spend(Resources { coins: 1, seeds: 1 }),
            Err(GameError::InsufficientCoins)
        );
        assert_eq!(
            player.spend(Resources::seeds(2)),
            Err(GameError::InsufficientSeeds)
        );
        assert_eq!(player, before);
    }

    #[test]
    fn spend_and_earn_adjust_balances() {
        let mut player = PlayerState::default();

        player.spend(Resources { coins: 4, seeds: 3 }).unwrap();
        assert_eq!((player.coins, player.seeds), (6, 0));
        assert!(!player.can_afford(Resources::seeds(1)));

        player.earn(Resources { coins: 5, seeds: 2 });
        assert_eq!((player.coins, player.seeds), (11, 2));
    }
}
