use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Set the platform withdrawal fee rate
#[derive(Accounts)]
pub struct SetPlatformFee<'info> {
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

pub fn handler(ctx: Context<SetPlatformFee>, rate_bps: u16) -> Result<u16> {
    let platform = &mut ctx.accounts.platform;

    // CHECKS: admin gate, then the 10% cap inside set_fee
    require!(
        platform.is_user_admin(&ctx.accounts.admin.key()),
        VaultError::NotAuthorized
    );

    let old_fee_bps = platform.platform_fee_bps;
    let new_fee_bps = platform.set_fee(rate_bps)?;

    emit!(PlatformFeeUpdated {
        old_fee_bps,
        new_fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(new_fee_bps)
}
