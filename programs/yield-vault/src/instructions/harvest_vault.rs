use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Compound accrued strategy yield into a vault
///
/// Permissionless: anyone may pay to crank a harvest. Returns whether
/// any yield was compounded; `false` is a valid outcome that still
/// advances the harvest clock.
#[derive(Accounts)]
#[instruction(vault_id: u64)]
pub struct HarvestVault<'info> {
    /// Harvest crank caller
    pub caller: Signer<'info>,

    /// Platform state PDA, pause gate and TVL counter
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    /// Strategy registry PDA; source of the vault's APY
    #[account(
        seeds = [STRATEGY_REGISTRY_SEED],
        bump = strategy_registry.bump,
    )]
    pub strategy_registry: Account<'info, StrategyRegistry>,

    /// Vault being harvested
    #[account(
        mut,
        seeds = [VAULT_SEED, &vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
}

pub fn handler(ctx: Context<HarvestVault>, vault_id: u64) -> Result<bool> {
    let clock = Clock::get()?;
    let platform = &mut ctx.accounts.platform;
    let vault = &mut ctx.accounts.vault;

    let strategy = ctx
        .accounts
        .strategy_registry
        .get(vault.strategy_id)
        .ok_or(VaultError::StrategyNotFound)?;

    let accrued = vault.apply_harvest(platform, strategy, clock.slot)?;

    emit!(VaultHarvested {
        vault_id,
        strategy_id: vault.strategy_id,
        accrued,
        total_assets: vault.total_assets,
        compounded: accrued > 0,
        timestamp: clock.unix_timestamp,
    });

    Ok(accrued > 0)
}
