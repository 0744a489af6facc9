pub mod add_admin;
pub mod add_strategy;
pub mod create_vault;
pub mod deposit;
pub mod harvest_vault;
pub mod initialize;
pub mod rebalance_vault;
pub mod set_platform_fee;
pub mod toggle_emergency_pause;
pub mod update_strategy_apy;
pub mod withdraw;

pub use add_admin::*;
pub use add_strategy::*;
pub use create_vault::*;
pub use deposit::*;
pub use harvest_vault::*;
pub use initialize::*;
pub use rebalance_vault::*;
pub use set_platform_fee::*;
pub use toggle_emergency_pause::*;
pub use update_strategy_apy::*;
pub use withdraw::*;
