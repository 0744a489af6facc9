use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Point a vault at a different registered strategy
#[derive(Accounts)]
#[instruction(vault_id: u64)]
pub struct RebalanceVault<'info> {
    /// Any platform admin
    pub admin: Signer<'info>,

    /// Platform state PDA, read for the admin gate
    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    /// Strategy registry PDA; the target strategy must exist
    #[account(
        seeds = [STRATEGY_REGISTRY_SEED],
        bump = strategy_registry.bump,
    )]
    pub strategy_registry: Account<'info, StrategyRegistry>,

    /// Vault being rebalanced; an unknown id cannot resolve this PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, &vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
}

pub fn handler(ctx: Context<RebalanceVault>, vault_id: u64, new_strategy_id: u64) -> Result<bool> {
    let vault = &mut ctx.accounts.vault;

    // CHECKS: authorization, then target strategy existence
    require!(
        ctx.accounts
            .platform
            .is_user_admin(&ctx.accounts.admin.key()),
        VaultError::NotAuthorized
    );
    require!(
        ctx.accounts.strategy_registry.get(new_strategy_id).is_some(),
        VaultError::StrategyNotFound
    );

    // EFFECTS: atomic strategy relink
    let old_strategy_id = vault.strategy_id;
    vault.strategy_id = new_strategy_id;

    emit!(VaultRebalanced {
        vault_id,
        old_strategy_id,
        new_strategy_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(true)
}
