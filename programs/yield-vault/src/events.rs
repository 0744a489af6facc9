use anchor_lang::prelude::*;

/// Event emitted when the platform is initialized
#[event]
pub struct PlatformInitialized {
    pub owner: Pubkey,
    pub total_strategies: u64,
    pub platform_fee_bps: u16,
    pub timestamp: i64,
}

/// Event emitted when the owner grants admin rights
#[event]
pub struct AdminAdded {
    pub owner: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a strategy is registered
#[event]
pub struct StrategyAdded {
    pub strategy_id: u64,
    pub name: String,
    pub protocol: String,
    pub apy_bps: u16,
    pub manager: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a strategy's APY is updated
#[event]
pub struct StrategyApyUpdated {
    pub strategy_id: u64,
    pub old_apy_bps: u16,
    pub new_apy_bps: u16,
    pub timestamp: i64,
}

/// Event emitted when the platform fee rate changes
#[event]
pub struct PlatformFeeUpdated {
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
    pub timestamp: i64,
}

/// Event emitted when the emergency pause is toggled
#[event]
pub struct EmergencyPauseToggled {
    pub paused: bool,
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a vault is created
#[event]
pub struct VaultCreated {
    pub vault_id: u64,
    pub name: String,
    pub risk_level: u8,
    pub strategy_id: u64,
    pub min_deposit: u64,
    pub timestamp: i64,
}

/// Event emitted when a vault is moved to a different strategy
#[event]
pub struct VaultRebalanced {
    pub vault_id: u64,
    pub old_strategy_id: u64,
    pub new_strategy_id: u64,
    pub timestamp: i64,
}

/// Event emitted when assets are deposited into a vault
#[event]
pub struct Deposited {
    pub vault_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub shares_minted: u64,
    pub total_assets: u64,
    pub total_shares: u64,
    pub timestamp: i64,
}

/// Event emitted when shares are redeemed for assets
#[event]
pub struct Withdrawn {
    pub vault_id: u64,
    pub user: Pubkey,
    pub shares_burned: u64,
    pub gross_amount: u64,
    pub fee_amount: u64,
    pub net_amount: u64,
    pub total_assets: u64,
    pub total_shares: u64,
    pub timestamp: i64,
}

/// Event emitted when strategy yield is compounded into a vault
#[event]
pub struct VaultHarvested {
    pub vault_id: u64,
    pub strategy_id: u64,
    pub accrued: u64,
    pub total_assets: u64,
    pub compounded: bool,
    pub timestamp: i64,
}
