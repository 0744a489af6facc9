use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Grant admin rights to a principal
///
/// Owner-only: admins cannot mint further admins, and the owner can never
/// be removed through the public interface.
#[derive(Accounts)]
pub struct AddAdmin<'info> {
    /// Platform owner
    /// Security: has_one constraint validates against stored owner
    pub owner: Signer<'info>,

    /// Platform state PDA
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        has_one = owner @ VaultError::NotAuthorized,
    )]
    pub platform: Account<'info, Platform>,
}

pub fn handler(ctx: Context<AddAdmin>, new_admin: Pubkey) -> Result<bool> {
    let platform = &mut ctx.accounts.platform;

    // EFFECTS: idempotent add to the admin set
    platform.add_admin(new_admin)?;

    emit!(AdminAdded {
        owner: platform.owner,
        new_admin,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(true)
}
