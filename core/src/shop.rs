use crate::*;

/// Trades [`SEED_PRICE`] coins for a single seed.
pub fn buy_seed(player: &mut PlayerState) -> Result<()> {
    player.spend(Resources::coins(SEED_PRICE))?;
    player.earn(Resources::seeds(1));
    log::debug!("bought a seed, {} coins left", player.coins);
    Ok(())
}
