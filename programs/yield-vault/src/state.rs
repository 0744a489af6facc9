use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VaultError;

/// Global platform state: ownership, admin set and aggregate statistics
///
/// Security considerations:
/// - Owner stored in state (not instruction args)
/// - Admin set is capped and the owner can never be removed from it
/// - Aggregate TVL is kept consistent with the sum of vault total assets
#[account]
pub struct Platform {
    /// Deployer of the platform; always an admin, can grant admin rights
    pub owner: Pubkey,

    /// Additional principals with admin rights
    pub admins: Vec<Pubkey>,

    /// Sum of total_assets across all vaults
    pub total_value_locked: u64,

    /// Number of vaults ever created; next vault id is this + 1
    pub total_vaults: u64,

    /// Number of strategies ever registered; next strategy id is this + 1
    pub total_strategies: u64,

    /// Withdrawal fee in basis points, capped at MAX_PLATFORM_FEE_BPS
    pub platform_fee_bps: u16,

    /// When true, deposit/withdraw/harvest are blocked on every vault
    pub emergency_pause: bool,

    /// Bump seed for the platform PDA
    pub bump: u8,
}

/// Settlement breakdown for a withdrawal
///
/// gross leaves the vault ledger; the user is owed net = gross - fee.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WithdrawalSettlement {
    pub gross: u64,
    pub fee: u64,
    pub net: u64,
}

/// Read-only aggregate snapshot of the platform ledgers
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct PlatformStats {
    pub total_value_locked: u64,
    pub total_vaults: u64,
    pub total_strategies: u64,
    pub platform_fee_bps: u16,
    pub emergency_pause: bool,
}

impl Platform {
    /// Space: 8 (discriminator) + 32 (owner) + 4 + MAX_ADMINS * 32 (admins)
    /// + 8 (tvl) + 8 (vaults) + 8 (strategies) + 2 (fee) + 1 (pause)
    /// + 1 (bump) + 128 (padding)
    pub const SPACE: usize = 8 + 32 + 4 + (MAX_ADMINS * 32) + 8 + 8 + 8 + 2 + 1 + 1 + 128;

    /// True if the principal is the owner or a member of the admin set
    pub fn is_user_admin(&self, user: &Pubkey) -> bool {
        self.owner == *user || self.admins.contains(user)
    }

    /// Idempotent admin grant; the owner is implicitly an admin already
    pub fn add_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        if new_admin == self.owner || self.admins.contains(&new_admin) {
            return Ok(());
        }
        require!(self.admins.len() < MAX_ADMINS, VaultError::RegistryFull);
        self.admins.push(new_admin);
        Ok(())
    }

    pub fn assert_not_paused(&self) -> Result<()> {
        require!(!self.emergency_pause, VaultError::VaultPaused);
        Ok(())
    }

    /// Set the withdrawal fee rate; rejects anything above 10%
    pub fn set_fee(&mut self, rate_bps: u16) -> Result<u16> {
        require!(rate_bps <= MAX_PLATFORM_FEE_BPS, VaultError::InvalidAmount);
        self.platform_fee_bps = rate_bps;
        Ok(rate_bps)
    }

    /// Flip the emergency pause flag, returning the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.emergency_pause = !self.emergency_pause;
        self.emergency_pause
    }

    /// Fee taken from a gross withdrawal amount
    ///
    /// fee = gross * platform_fee_bps / 10000, floor division
    pub fn withdrawal_fee(&self, gross: u64) -> Result<u64> {
        let fee = (gross as u128)
            .checked_mul(self.platform_fee_bps as u128)
            .ok_or(error!(VaultError::MathOverflow))?
            / BPS_DENOMINATOR as u128;
        u64::try_from(fee).map_err(|_| error!(VaultError::MathOverflow))
    }

    pub fn stats(&self) -> PlatformStats {
        PlatformStats {
            total_value_locked: self.total_value_locked,
            total_vaults: self.total_vaults,
            total_strategies: self.total_strategies,
            platform_fee_bps: self.platform_fee_bps,
            emergency_pause: self.emergency_pause,
        }
    }
}

/// Registry of yield strategies vaults can be routed to
///
/// Strategies are metadata records: APY, capacity and risk for the
/// allocation logic, never executable adapters. Entries are append-only
/// with dense 1-based ids and are never deleted.
#[account]
pub struct StrategyRegistry {
    pub strategies: Vec<Strategy>,

    /// Bump seed for the registry PDA
    pub bump: u8,
}

/// Individual yield strategy entry
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct Strategy {
    /// Sequential 1-based id, never reused
    pub id: u64,

    /// Human-readable name (e.g. "SOL-Staking-Strategy")
    pub name: String,

    /// Protocol label (e.g. "marinade", "kamino")
    pub protocol: String,

    /// Advertised APY in basis points
    pub apy_bps: u16,

    /// Maximum TVL this strategy can absorb
    pub tvl_capacity: u64,

    /// TVL currently attributed to this strategy
    pub current_tvl: u64,

    /// Risk score, 1 (safest) to 10
    pub risk_score: u8,

    /// Inactive strategies are skipped by best-APY queries
    pub is_active: bool,

    /// Principal operating the strategy
    pub manager: Pubkey,

    /// Slot of the last registry update touching this entry
    pub last_updated: u64,
}

impl StrategyRegistry {
    /// Per-entry space: 8 (id) + 4 + MAX_NAME_LEN (name)
    /// + 4 + MAX_PROTOCOL_LEN (protocol) + 2 (apy) + 8 (capacity)
    /// + 8 (current tvl) + 1 (risk) + 1 (active) + 32 (manager)
    /// + 8 (last updated) = 172
    pub const ENTRY_SPACE: usize =
        8 + 4 + MAX_NAME_LEN + 4 + MAX_PROTOCOL_LEN + 2 + 8 + 8 + 1 + 1 + 32 + 8;

    /// Space: 8 (discriminator) + 4 + MAX_STRATEGIES entries + 1 (bump)
    /// + 128 (padding)
    pub const SPACE: usize = 8 + 4 + (MAX_STRATEGIES * Self::ENTRY_SPACE) + 1 + 128;

    pub fn get(&self, id: u64) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Strategy> {
        self.strategies.iter_mut().find(|s| s.id == id)
    }

    /// Maximum APY among active strategies, 0 when none are active
    ///
    /// The registry is small and capped, so a linear scan is fine.
    pub fn best_apy(&self) -> u16 {
        self.strategies
            .iter()
            .filter(|s| s.is_active)
            .map(|s| s.apy_bps)
            .max()
            .unwrap_or(0)
    }

    /// Append a new strategy; the caller allocates the id
    pub fn add(&mut self, strategy: Strategy) -> Result<()> {
        require!(strategy.name.len() <= MAX_NAME_LEN, VaultError::NameTooLong);
        require!(
            strategy.protocol.len() <= MAX_PROTOCOL_LEN,
            VaultError::NameTooLong
        );
        require!(
            self.strategies.len() < MAX_STRATEGIES,
            VaultError::RegistryFull
        );
        self.strategies.push(strategy);
        Ok(())
    }

    /// Update a strategy's APY, returning the new value
    pub fn update_apy(&mut self, id: u64, new_apy_bps: u16, current_slot: u64) -> Result<u16> {
        let strategy = self.get_mut(id).ok_or(VaultError::StrategyNotFound)?;
        strategy.apy_bps = new_apy_bps;
        strategy.last_updated = current_slot;
        Ok(new_apy_bps)
    }

    /// The three strategies seeded at genesis, managed by the deployer
    pub fn genesis(owner: Pubkey, current_slot: u64) -> Vec<Strategy> {
        GENESIS_STRATEGIES
            .iter()
            .enumerate()
            .map(|(i, (name, protocol, apy_bps, capacity, risk))| Strategy {
                id: i as u64 + 1,
                name: (*name).to_string(),
                protocol: (*protocol).to_string(),
                apy_bps: *apy_bps,
                tvl_capacity: *capacity,
                current_tvl: 0,
                risk_score: *risk,
                is_active: true,
                manager: owner,
                last_updated: current_slot,
            })
            .collect()
    }

    /// Default strategy for a vault risk level.
    ///
    /// The pairing table is part of the deployed behavior: conservative
    /// vaults route to lending, balanced to staking, aggressive to LP
    /// farming. Kept as a literal table, not a risk-score search.
    pub fn default_strategy_for_risk(risk_level: u8) -> Result<u64> {
        match risk_level {
            RISK_CONSERVATIVE => Ok(LENDING_STRATEGY_ID),
            RISK_BALANCED => Ok(STAKING_STRATEGY_ID),
            RISK_AGGRESSIVE => Ok(LP_FARMING_STRATEGY_ID),
            _ => Err(error!(VaultError::InvalidAmount)),
        }
    }
}

/// A pooled vault holding one asset and routing to one strategy
///
/// Security considerations:
/// - Total assets and shares tracked for proportional share math
/// - All mutating operations validate before writing (no partial updates)
#[account]
pub struct Vault {
    /// Sequential 1-based id, never reused
    pub id: u64,

    /// Human-readable name
    pub name: String,

    /// Mint of the underlying asset this vault accounts for
    pub asset_mint: Pubkey,

    /// Total shares issued to depositors
    pub total_shares: u64,

    /// Total underlying assets attributed to the vault
    pub total_assets: u64,

    /// Strategy this vault's capital is routed to
    pub strategy_id: u64,

    /// 1 = conservative, 2 = balanced, 3 = aggressive
    pub risk_level: u8,

    /// Smallest accepted deposit
    pub min_deposit: u64,

    /// Inactive vaults refuse deposits and harvests
    pub is_active: bool,

    /// Slot the vault was created at
    pub created_at: u64,

    /// Slot of the last harvest (successful or zero-accrual)
    pub last_harvest: u64,

    /// Bump seed for the vault PDA
    pub bump: u8,
}

impl Vault {
    /// Space: 8 (discriminator) + 8 (id) + 4 + MAX_NAME_LEN (name)
    /// + 32 (asset mint) + 8 (shares) + 8 (assets) + 8 (strategy)
    /// + 1 (risk) + 8 (min deposit) + 1 (active) + 8 (created)
    /// + 8 (last harvest) + 1 (bump) + 128 (padding)
    pub const SPACE: usize = 8 + 8 + 4 + MAX_NAME_LEN + 32 + 8 + 8 + 8 + 1 + 8 + 1 + 8 + 8 + 1 + 128;

    /// Calculate shares to mint for a given deposit amount
    ///
    /// First deposit bootstraps 1:1; afterwards
    /// shares = amount * total_shares / total_assets (floor), so later
    /// depositors at a higher asset/share ratio receive proportionally
    /// fewer shares and never dilute prior holders.
    pub fn shares_for_deposit(&self, amount: u64) -> Result<u64> {
        if self.total_shares == 0 || self.total_assets == 0 {
            return Ok(amount);
        }

        let shares = (amount as u128)
            .checked_mul(self.total_shares as u128)
            .ok_or(error!(VaultError::MathOverflow))?
            / self.total_assets as u128;

        u64::try_from(shares).map_err(|_| error!(VaultError::MathOverflow))
    }

    /// Current asset value of a share balance
    ///
    /// assets = shares * total_assets / total_shares (floor); the same
    /// valuation withdraw settles at.
    pub fn assets_for_shares(&self, shares: u64) -> Result<u64> {
        if self.total_shares == 0 {
            return Ok(0);
        }

        let assets = (shares as u128)
            .checked_mul(self.total_assets as u128)
            .ok_or(error!(VaultError::MathOverflow))?
            / self.total_shares as u128;

        u64::try_from(assets).map_err(|_| error!(VaultError::MathOverflow))
    }

    /// Valuation of a user's position at the current ratio; zero when the
    /// user holds no position
    pub fn user_value(&self, position: Option<&Position>) -> Result<u64> {
        match position {
            Some(position) => self.assets_for_shares(position.shares),
            None => Ok(0),
        }
    }

    /// Yield accrued since the last harvest under the linked strategy
    ///
    /// accrued = total_assets * apy * elapsed / (10000 * SLOTS_PER_YEAR),
    /// floor division over u128 intermediates.
    pub fn accrued_yield(&self, apy_bps: u16, current_slot: u64) -> Result<u64> {
        let elapsed = current_slot.saturating_sub(self.last_harvest);
        if elapsed == 0 || self.total_assets == 0 {
            return Ok(0);
        }

        let accrued = (self.total_assets as u128)
            .checked_mul(apy_bps as u128)
            .ok_or(error!(VaultError::MathOverflow))?
            .checked_mul(elapsed as u128)
            .ok_or(error!(VaultError::MathOverflow))?
            / (BPS_DENOMINATOR as u128 * SLOTS_PER_YEAR as u128);

        u64::try_from(accrued).map_err(|_| error!(VaultError::MathOverflow))
    }

    /// Deposit `amount` into the vault for `position`.
    ///
    /// Validation order: pause, vault active, minimum deposit. Only after
    /// every check passes are the vault, position and platform ledgers
    /// updated together. Returns the shares minted.
    pub fn apply_deposit(
        &mut self,
        platform: &mut Platform,
        position: &mut Position,
        amount: u64,
        current_slot: u64,
    ) -> Result<u64> {
        platform.assert_not_paused()?;
        require!(self.is_active, VaultError::VaultNotFound);
        require!(amount >= self.min_deposit, VaultError::MinimumDepositNotMet);

        let minted = self.shares_for_deposit(amount)?;

        self.total_shares = self
            .total_shares
            .checked_add(minted)
            .ok_or(error!(VaultError::MathOverflow))?;
        self.total_assets = self
            .total_assets
            .checked_add(amount)
            .ok_or(error!(VaultError::MathOverflow))?;

        position.shares = position
            .shares
            .checked_add(minted)
            .ok_or(error!(VaultError::MathOverflow))?;
        position.deposited_at = current_slot;
        position.last_claim = current_slot;

        platform.total_value_locked = platform
            .total_value_locked
            .checked_add(amount)
            .ok_or(error!(VaultError::MathOverflow))?;

        Ok(minted)
    }

    /// Redeem `shares` from `position`.
    ///
    /// Validation order: pause, non-zero amount, position existence, share
    /// balance. Settles at the current assets/shares ratio and takes the
    /// platform fee from the gross amount; the user is owed the net. The
    /// caller removes the position record when its share balance reaches
    /// zero.
    pub fn apply_withdraw(
        &mut self,
        platform: &mut Platform,
        position: &mut Position,
        shares: u64,
        current_slot: u64,
    ) -> Result<WithdrawalSettlement> {
        platform.assert_not_paused()?;
        require!(shares > 0, VaultError::InvalidAmount);
        require!(position.shares > 0, VaultError::InsufficientBalance);
        require!(shares <= position.shares, VaultError::WithdrawalTooLarge);

        let gross = self.assets_for_shares(shares)?;
        let fee = platform.withdrawal_fee(gross)?;
        let net = gross
            .checked_sub(fee)
            .ok_or(error!(VaultError::MathOverflow))?;

        self.total_shares = self
            .total_shares
            .checked_sub(shares)
            .ok_or(error!(VaultError::MathOverflow))?;
        self.total_assets = self
            .total_assets
            .checked_sub(gross)
            .ok_or(error!(VaultError::MathOverflow))?;

        position.shares = position
            .shares
            .checked_sub(shares)
            .ok_or(error!(VaultError::MathOverflow))?;
        position.last_claim = current_slot;

        platform.total_value_locked = platform
            .total_value_locked
            .checked_sub(gross)
            .ok_or(error!(VaultError::MathOverflow))?;

        Ok(WithdrawalSettlement { gross, fee, net })
    }

    /// Compound the yield accrued under `strategy` since the last harvest.
    ///
    /// Shares are left untouched so compounding raises the value per share
    /// for every holder. The harvest clock advances even when nothing
    /// accrued, so a later harvest cannot replay the same interval.
    /// Returns the amount compounded; zero is a valid, non-error outcome.
    pub fn apply_harvest(
        &mut self,
        platform: &mut Platform,
        strategy: &Strategy,
        current_slot: u64,
    ) -> Result<u64> {
        platform.assert_not_paused()?;
        require!(self.is_active, VaultError::VaultNotFound);

        let accrued = self.accrued_yield(strategy.apy_bps, current_slot)?;

        if accrued > 0 {
            self.total_assets = self
                .total_assets
                .checked_add(accrued)
                .ok_or(error!(VaultError::MathOverflow))?;
            platform.total_value_locked = platform
                .total_value_locked
                .checked_add(accrued)
                .ok_or(error!(VaultError::MathOverflow))?;
        }

        self.last_harvest = current_slot;

        Ok(accrued)
    }
}

/// A user's share balance in one vault
///
/// Created on first deposit and closed once the share balance returns to
/// zero; the user's vault index keeps the membership history.
#[account]
pub struct Position {
    /// Vault this position belongs to
    pub vault_id: u64,

    /// Wallet that owns the shares
    pub owner: Pubkey,

    /// Shares currently held
    pub shares: u64,

    /// Slot of the most recent deposit
    pub deposited_at: u64,

    /// Slot of the most recent deposit or withdrawal settlement
    pub last_claim: u64,

    /// Bump seed for the position PDA
    pub bump: u8,
}

impl Position {
    /// Space: 8 (discriminator) + 8 (vault id) + 32 (owner) + 8 (shares)
    /// + 8 (deposited at) + 8 (last claim) + 1 (bump) + 32 (padding)
    pub const SPACE: usize = 8 + 8 + 32 + 8 + 8 + 8 + 1 + 32;
}

/// Append-only index of every vault a user has ever held a position in
///
/// Entries survive full withdrawal; membership history is not pruned.
#[account]
pub struct UserVaults {
    pub owner: Pubkey,

    pub vault_ids: Vec<u64>,

    /// Bump seed for the index PDA
    pub bump: u8,
}

impl UserVaults {
    /// Space: 8 (discriminator) + 32 (owner) + 4 + MAX_USER_VAULTS * 8
    /// (vault ids) + 1 (bump) + 64 (padding)
    pub const SPACE: usize = 8 + 32 + 4 + (MAX_USER_VAULTS * 8) + 1 + 64;

    pub fn contains(&self, vault_id: u64) -> bool {
        self.vault_ids.contains(&vault_id)
    }

    /// Record membership in a vault; idempotent per vault id
    pub fn record(&mut self, vault_id: u64) -> Result<()> {
        if self.contains(vault_id) {
            return Ok(());
        }
        require!(
            self.vault_ids.len() < MAX_USER_VAULTS,
            VaultError::RegistryFull
        );
        self.vault_ids.push(vault_id);
        Ok(())
    }
}
