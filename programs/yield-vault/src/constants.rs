// Constants for the Yield Vault program

/// Seed for the platform state PDA
pub const PLATFORM_SEED: &[u8] = b"platform";

/// Seed for the strategy registry PDA
pub const STRATEGY_REGISTRY_SEED: &[u8] = b"strategies";

/// Seed for vault PDAs (suffixed with the vault id, little-endian)
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for position PDAs (suffixed with vault id and owner)
pub const POSITION_SEED: &[u8] = b"position";

/// Seed for the per-user vault index PDA (suffixed with the owner)
pub const USER_VAULTS_SEED: &[u8] = b"user_vaults";

/// Basis point denominator (10000 bps = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Hard cap on the platform withdrawal fee (10%)
pub const MAX_PLATFORM_FEE_BPS: u16 = 1_000;

/// Platform withdrawal fee at genesis (0.5%)
pub const DEFAULT_PLATFORM_FEE_BPS: u16 = 50;

/// Slots per year at the nominal 400ms slot time; denominator for
/// pro-rated APY accrual in harvest_vault
pub const SLOTS_PER_YEAR: u64 = 78_840_000;

/// Maximum number of admins besides the owner
pub const MAX_ADMINS: usize = 10;

/// Maximum number of registered strategies
pub const MAX_STRATEGIES: usize = 10;

/// Maximum number of vault ids tracked per user
pub const MAX_USER_VAULTS: usize = 20;

/// Maximum length of vault and strategy names
pub const MAX_NAME_LEN: usize = 64;

/// Maximum length of a strategy's protocol label
pub const MAX_PROTOCOL_LEN: usize = 32;

/// Vault risk levels
pub const RISK_CONSERVATIVE: u8 = 1;
pub const RISK_BALANCED: u8 = 2;
pub const RISK_AGGRESSIVE: u8 = 3;

/// Genesis strategy ids; allocation order is fixed at initialization
pub const STAKING_STRATEGY_ID: u64 = 1;
pub const LENDING_STRATEGY_ID: u64 = 2;
pub const LP_FARMING_STRATEGY_ID: u64 = 3;

/// Genesis strategy parameters: (name, protocol, apy bps, tvl capacity, risk score)
pub const GENESIS_STRATEGIES: [(&str, &str, u16, u64, u8); 3] = [
    ("SOL-Staking-Strategy", "marinade", 1_200, 100_000_000_000, 3),
    ("Lending-Protocol-Strategy", "kamino", 800, 50_000_000_000, 5),
    ("LP-Farming-Strategy", "orca", 1_500, 25_000_000_000, 7),
];
