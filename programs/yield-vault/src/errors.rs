use anchor_lang::prelude::*;

/// Custom error codes for the Yield Vault program
///
/// The offset pins the first eight variants to the 200-series codes the
/// platform has always reported to clients; 208 and up are internal safety
/// checks that no documented flow can reach.
#[error_code(offset = 200)]
pub enum VaultError {
    #[msg("Caller is not authorized to perform this action")]
    NotAuthorized, // 200

    #[msg("Caller has no position in this vault")]
    InsufficientBalance, // 201

    #[msg("Amount or parameter is out of range")]
    InvalidAmount, // 202

    #[msg("Vault does not exist or is inactive")]
    VaultNotFound, // 203

    #[msg("Strategy does not exist")]
    StrategyNotFound, // 204

    #[msg("Platform is paused for emergency")]
    VaultPaused, // 205

    #[msg("Deposit is below the vault minimum")]
    MinimumDepositNotMet, // 206

    #[msg("Withdrawal exceeds the caller's share balance")]
    WithdrawalTooLarge, // 207

    #[msg("Math overflow occurred during calculation")]
    MathOverflow, // 208

    #[msg("Name or label too long")]
    NameTooLong, // 209

    #[msg("Registry is full - maximum entries reached")]
    RegistryFull, // 210
}
