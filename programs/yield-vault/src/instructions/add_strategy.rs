use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Register a new yield strategy
#[derive(Accounts)]
pub struct AddStrategy<'info> {
    /// Any platform admin
    pub admin: Signer<'info>,

    /// Platform state PDA; owns the strategy id counter
    #[account(
        mut,
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

pub fn handler(
    ctx: Context<AddStrategy>,
    name: String,
    protocol: String,
    apy_bps: u16,
    tvl_capacity: u64,
    risk_score: u8,
    manager: Pubkey,
) -> Result<u64> {
    let platform = &mut ctx.accounts.platform;
    let registry = &mut ctx.accounts.strategy_registry;

    // CHECKS: admin gate before anything else
    require!(
        platform.is_user_admin(&ctx.accounts.admin.key()),
        VaultError::NotAuthorized
    );

    let clock = Clock::get()?;
    let strategy_id = platform
        .total_strategies
        .checked_add(1)
        .ok_or(error!(VaultError::MathOverflow))?;

    // EFFECTS: append the entry, then bump the counter
    registry.add(Strategy {
        id: strategy_id,
        name: name.clone(),
        protocol: protocol.clone(),
        apy_bps,
        tvl_capacity,
        current_tvl: 0,
        risk_score,
        is_active: true,
        manager,
        last_updated: clock.slot,
    })?;
    platform.total_strategies = strategy_id;

    emit!(StrategyAdded {
        strategy_id,
        name,
        protocol,
        apy_bps,
        manager,
        timestamp: clock.unix_timestamp,
    });

    Ok(strategy_id)
}
