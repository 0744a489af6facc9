use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;

use crate::{constants::*, errors::*, events::*, state::*};

/// Redeem shares for the underlying assets, net of the platform fee
///
/// Security checklist:
/// - SIGNER VALIDATION: user must sign and own the position
/// - PDA VALIDATION: platform, vault and position PDAs by seeds
/// - MATH SAFETY: checked settlement math over u128 intermediates
/// - BUSINESS LOGIC: fixed validation order, position closed at zero
#[derive(Accounts)]
#[instruction(vault_id: u64)]
pub struct Withdraw<'info> {
    /// User redeeming shares; receives the position rent on close
    #[account(mut)]
    pub user: Signer<'info>,

    /// Platform state PDA, pause gate and TVL counter
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    /// Vault being withdrawn from
    #[account(
        mut,
        seeds = [VAULT_SEED, &vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// The user's position; optional so a caller with no position gets
    /// the ledger's InsufficientBalance answer instead of a resolution
    /// failure
    #[account(
        mut,
        seeds = [POSITION_SEED, &vault_id.to_le_bytes(), user.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == user.key() @ VaultError::NotAuthorized,
    )]
    pub position: Option<Account<'info, Position>>,
}

pub fn handler(ctx: Context<Withdraw>, vault_id: u64, shares: u64) -> Result<u64> {
    let clock = Clock::get()?;
    let user_key = ctx.accounts.user.key();
    let platform = &mut ctx.accounts.platform;
    let vault = &mut ctx.accounts.vault;

    // CHECKS: pause and amount come before the position lookup so the
    // reported error matches the ledger's fixed validation order
    platform.assert_not_paused()?;
    require!(shares > 0, VaultError::InvalidAmount);

    let position = ctx
        .accounts
        .position
        .as_mut()
        .ok_or(error!(VaultError::InsufficientBalance))?;

    // EFFECTS: settle against vault, position and platform ledgers
    let settlement = vault.apply_withdraw(platform, position, shares, clock.slot)?;
    let remaining_shares = position.shares;

    emit!(Withdrawn {
        vault_id,
        user: user_key,
        shares_burned: shares,
        gross_amount: settlement.gross,
        fee_amount: settlement.fee,
        net_amount: settlement.net,
        total_assets: vault.total_assets,
        total_shares: vault.total_shares,
        timestamp: clock.unix_timestamp,
    });

    // Full exits close the position record; the membership index is
    // retained as history
    if remaining_shares == 0 {
        if let Some(position_account) = ctx.accounts.position.as_ref() {
            position_account.close(ctx.accounts.user.to_account_info())?;
        }
    }

    Ok(settlement.net)
}
