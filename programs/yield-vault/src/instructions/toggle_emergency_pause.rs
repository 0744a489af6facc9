use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Toggle the global emergency pause
///
/// While paused, deposit, withdraw and harvest fail on every vault
/// regardless of per-vault active flags. Read paths stay available.
#[derive(Accounts)]
pub struct ToggleEmergencyPause<'info> {
    /// Any platform admin
    pub admin: Signer<'info>,

    /// Platform state PDA
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,
}

pub fn handler(ctx: Context<ToggleEmergencyPause>) -> Result<bool> {
    let platform = &mut ctx.accounts.platform;

    require!(
        platform.is_user_admin(&ctx.accounts.admin.key()),
        VaultError::NotAuthorized
    );

    let paused = platform.toggle_pause();

    msg!(
        "Platform {} by {}",
        if paused { "PAUSED" } else { "UNPAUSED" },
        ctx.accounts.admin.key()
    );

    emit!(EmergencyPauseToggled {
        paused,
        admin: ctx.accounts.admin.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(paused)
}
