// Yield Vault - multi-strategy yield aggregation vault platform on Solana
// Security: Follows Solana security best practices with comprehensive validation
// Architecture: Platform singleton + strategy registry + id-addressed vaults

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("A2qivszhM1KsZwVQFQM13yC8YXZy1SoPGe2YMAXE2pub");

#[program]
pub mod yield_vault {
    use super::*;

    /// Initialize the platform and seed the three genesis strategies
    ///
    /// Security considerations:
    /// - Deployer is recorded as owner and is always an admin
    /// - Single-shot: the platform PDA can only be initialized once
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Grant admin rights to a principal
    ///
    /// Security considerations:
    /// - Owner-only; admins cannot grant admin rights
    /// - Idempotent; the owner can never be added or removed
    pub fn add_admin(ctx: Context<AddAdmin>, new_admin: Pubkey) -> Result<bool> {
        instructions::add_admin::handler(ctx, new_admin)
    }

    /// Register a new yield strategy and return its id
    ///
    /// Security considerations:
    /// - Admin-only
    /// - Ids are dense, 1-based and never reused
    /// - Registry capacity is enforced
    pub fn add_strategy(
        ctx: Context<AddStrategy>,
        name: String,
        protocol: String,
        apy_bps: u16,
        tvl_capacity: u64,
        risk_score: u8,
        manager: Pubkey,
    ) -> Result<u64> {
        instructions::add_strategy::handler(
            ctx,
            name,
            protocol,
            apy_bps,
            tvl_capacity,
            risk_score,
            manager,
        )
    }

    /// Update a strategy's advertised APY and return the new value
    ///
    /// Security considerations:
    /// - Admin-only; authorization is checked before existence
    pub fn update_strategy_apy(
        ctx: Context<UpdateStrategyApy>,
        strategy_id: u64,
        new_apy_bps: u16,
    ) -> Result<u16> {
        instructions::update_strategy_apy::handler(ctx, strategy_id, new_apy_bps)
    }

    /// Set the platform withdrawal fee rate (basis points, at most 10%)
    ///
    /// Security considerations:
    /// - Admin-only
    /// - Hard 1000 bps cap enforced in state
    pub fn set_platform_fee(ctx: Context<SetPlatformFee>, rate_bps: u16) -> Result<u16> {
        instructions::set_platform_fee::handler(ctx, rate_bps)
    }

    /// Toggle the global emergency pause and return the new state
    ///
    /// Security considerations:
    /// - Admin-only
    /// - Blocks deposit/withdraw/harvest on every vault while set
    pub fn toggle_emergency_pause(ctx: Context<ToggleEmergencyPause>) -> Result<bool> {
        instructions::toggle_emergency_pause::handler(ctx)
    }

    /// Create a vault and link it to its risk level's default strategy
    ///
    /// Security considerations:
    /// - Admin-only
    /// - Risk level outside {1,2,3} is rejected before any write
    /// - The risk/strategy pairing table is fixed platform behavior
    pub fn create_vault(
        ctx: Context<CreateVault>,
        name: String,
        risk_level: u8,
        min_deposit: u64,
    ) -> Result<u64> {
        instructions::create_vault::handler(ctx, name, risk_level, min_deposit)
    }

    /// Point a vault at a different registered strategy
    ///
    /// Security considerations:
    /// - Admin-only
    /// - Target strategy must exist in the registry
    pub fn rebalance_vault(
        ctx: Context<RebalanceVault>,
        vault_id: u64,
        new_strategy_id: u64,
    ) -> Result<bool> {
        instructions::rebalance_vault::handler(ctx, vault_id, new_strategy_id)
    }

    /// Deposit assets into a vault and return the shares minted
    ///
    /// Security considerations:
    /// - Pause, active flag and minimum checked before any ledger write
    /// - Share math uses checked u128 intermediates
    /// - First deposit creates the position and the membership index entry
    pub fn deposit(ctx: Context<Deposit>, vault_id: u64, amount: u64) -> Result<u64> {
        instructions::deposit::handler(ctx, vault_id, amount)
    }

    /// Redeem shares and return the net amount owed after the platform fee
    ///
    /// Security considerations:
    /// - Fixed validation order: pause, amount, position, share balance
    /// - Position account is closed once its share balance reaches zero
    pub fn withdraw(ctx: Context<Withdraw>, vault_id: u64, shares: u64) -> Result<u64> {
        instructions::withdraw::handler(ctx, vault_id, shares)
    }

    /// Compound accrued strategy yield into a vault
    ///
    /// Security considerations:
    /// - Permissionless crank; pause and active flag still gate it
    /// - Returns false (not an error) when nothing accrued; the harvest
    ///   clock advances either way
    pub fn harvest_vault(ctx: Context<HarvestVault>, vault_id: u64) -> Result<bool> {
        instructions::harvest_vault::handler(ctx, vault_id)
    }
}
