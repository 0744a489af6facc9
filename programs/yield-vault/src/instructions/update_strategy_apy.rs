use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Update a registered strategy's advertised APY
#[derive(Accounts)]
pub struct UpdateStrategyApy<'info> {
    /// Any platform admin
    pub admin: Signer<'info>,

    /// Platform state PDA, read for the admin gate
    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    /// Strategy registry PDA
    #[account(
        mut,
        seeds = [STRATEGY_REGISTRY_SEED],
        bump = strategy_registry.bump,
    )]
    pub strategy_registry: Account<'info, StrategyRegistry>,
}

pub fn handler(ctx: Context<UpdateStrategyApy>, strategy_id: u64, new_apy_bps: u16) -> Result<u16> {
    let registry = &mut ctx.accounts.strategy_registry;

    // CHECKS: authorization first, existence second
    require!(
        ctx.accounts
            .platform
            .is_user_admin(&ctx.accounts.admin.key()),
        VaultError::NotAuthorized
    );

    let clock = Clock::get()?;
    let old_apy_bps = registry
        .get(strategy_id)
        .ok_or(VaultError::StrategyNotFound)?
        .apy_bps;

    // EFFECTS
    let new_apy = registry.update_apy(strategy_id, new_apy_bps, clock.slot)?;

    emit!(StrategyApyUpdated {
        strategy_id,
        old_apy_bps,
        new_apy_bps: new_apy,
        timestamp: clock.unix_timestamp,
    });

    Ok(new_apy)
}
