use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Deposit assets into a vault and receive shares
///
/// Security checklist:
/// - SIGNER VALIDATION: user must sign
/// - PDA VALIDATION: platform, vault, position and index PDAs by seeds
/// - MATH SAFETY: checked share math over u128 intermediates
/// - BUSINESS LOGIC: all validation happens before any ledger write
#[derive(Accounts)]
#[instruction(vault_id: u64)]
pub struct Deposit<'info> {
    /// User depositing assets; pays for position/index creation
    #[account(mut)]
    pub user: Signer<'info>,

    /// Platform state PDA, pause gate and TVL counter
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    /// Vault being deposited into
    #[account(
        mut,
        seeds = [VAULT_SEED, &vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// The user's share position in this vault
    /// Security: created on first deposit, owner recorded in state
    #[account(
        init_if_needed,
        payer = user,
        space = Position::SPACE,
        seeds = [POSITION_SEED, &vault_id.to_le_bytes(), user.key().as_ref()],
        bump
    )]
    pub position: Account<'info, Position>,

    /// The user's vault membership index
    /// Security: created on the user's first deposit anywhere
    #[account(
        init_if_needed,
        payer = user,
        space = UserVaults::SPACE,
        seeds = [USER_VAULTS_SEED, user.key().as_ref()],
        bump
    )]
    pub user_vaults: Account<'info, UserVaults>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, vault_id: u64, amount: u64) -> Result<u64> {
    let clock = Clock::get()?;
    let user_key = ctx.accounts.user.key();
    let platform = &mut ctx.accounts.platform;
    let vault = &mut ctx.accounts.vault;
    let position = &mut ctx.accounts.position;
    let user_vaults = &mut ctx.accounts.user_vaults;

    // CHECKS + EFFECTS: pause, active flag and minimum are validated
    // before the vault/position/platform ledgers are touched
    let shares_minted = vault.apply_deposit(platform, position, amount, clock.slot)?;

    // Stamp ownership on a freshly created position
    if position.owner == Pubkey::default() {
        position.vault_id = vault_id;
        position.owner = user_key;
        position.bump = ctx.bumps.position;
    }
    if user_vaults.owner == Pubkey::default() {
        user_vaults.owner = user_key;
        user_vaults.bump = ctx.bumps.user_vaults;
    }

    // Membership history; idempotent for repeat deposits
    user_vaults.record(vault_id)?;

    emit!(Deposited {
        vault_id,
        user: user_key,
        amount,
        shares_minted,
        total_assets: vault.total_assets,
        total_shares: vault.total_shares,
        timestamp: clock.unix_timestamp,
    });

    Ok(shares_minted)
}
