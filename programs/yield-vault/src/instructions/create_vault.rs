use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, events::*, state::*};

/// Create a new vault for a given backing asset
///
/// Security checklist:
/// - SIGNER VALIDATION: admin must be signer and pass the admin gate
/// - PDA VALIDATION: vault address is derived from the next dense id
/// - BUSINESS LOGIC: risk level maps to its paired default strategy
#[derive(Accounts)]
pub struct CreateVault<'info> {
    /// Any platform admin; pays for the vault account
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Platform state PDA; owns the vault id counter
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    /// Vault PDA at the next sequential id
    #[account(
        init,
        payer = admin,
        space = Vault::SPACE,
        seeds = [VAULT_SEED, &(platform.total_vaults + 1).to_le_bytes()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    /// Mint of the underlying asset the vault accounts for
    /// Security: any valid mint can back a vault
    pub asset_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateVault>,
    name: String,
    risk_level: u8,
    min_deposit: u64,
) -> Result<u64> {
    let platform = &mut ctx.accounts.platform;
    let vault = &mut ctx.accounts.vault;

    // CHECKS: authorization, then input validation
    require!(
        platform.is_user_admin(&ctx.accounts.admin.key()),
        VaultError::NotAuthorized
    );
    require!(name.len() <= MAX_NAME_LEN, VaultError::NameTooLong);

    // Rejects risk levels outside {1, 2, 3} with InvalidAmount
    let strategy_id = StrategyRegistry::default_strategy_for_risk(risk_level)?;

    let clock = Clock::get()?;
    let vault_id = platform
        .total_vaults
        .checked_add(1)
        .ok_or(error!(VaultError::MathOverflow))?;

    // EFFECTS: Initialize vault state
    vault.id = vault_id;
    vault.name = name.clone();
    vault.asset_mint = ctx.accounts.asset_mint.key();
    vault.total_shares = 0;
    vault.total_assets = 0;
    vault.strategy_id = strategy_id;
    vault.risk_level = risk_level;
    vault.min_deposit = min_deposit;
    vault.is_active = true;
    vault.created_at = clock.slot;
    vault.last_harvest = clock.slot;
    vault.bump = ctx.bumps.vault;

    platform.total_vaults = vault_id;

    emit!(VaultCreated {
        vault_id,
        name,
        risk_level,
        strategy_id,
        min_deposit,
        timestamp: clock.unix_timestamp,
    });

    Ok(vault_id)
}
