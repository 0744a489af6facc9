use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Initialize the platform and seed the genesis strategies
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Platform deployer; becomes the owner and first admin
    /// Security: Must be signer, stored in state
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Platform state PDA
    /// Security: init makes this single-shot; re-running fails
    #[account(
        init,
        payer = owner,
        space = Platform::SPACE,
        seeds = [PLATFORM_SEED],
        bump
    )]
    pub platform: Account<'info, Platform>,

    /// Strategy registry PDA, seeded with the genesis strategy table
    #[account(
        init,
        payer = owner,
        space = StrategyRegistry::SPACE,
        seeds = [STRATEGY_REGISTRY_SEED],
        bump
    )]
    pub strategy_registry: Account<'info, StrategyRegistry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let clock = Clock::get()?;

    // EFFECTS: Initialize platform state
    let platform = &mut ctx.accounts.platform;
    platform.owner = ctx.accounts.owner.key();
    platform.admins = Vec::new();
    platform.total_value_locked = 0;
    platform.total_vaults = 0;
    platform.total_strategies = GENESIS_STRATEGIES.len() as u64;
    platform.platform_fee_bps = DEFAULT_PLATFORM_FEE_BPS;
    platform.emergency_pause = false;
    platform.bump = ctx.bumps.platform;

    // Seed the three genesis strategies
    let registry = &mut ctx.accounts.strategy_registry;
    registry.strategies = StrategyRegistry::genesis(platform.owner, clock.slot);
    registry.bump = ctx.bumps.strategy_registry;

    emit!(PlatformInitialized {
        owner: platform.owner,
        total_strategies: platform.total_strategies,
        platform_fee_bps: platform.platform_fee_bps,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
