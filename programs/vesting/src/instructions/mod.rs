pub mod initialize;
pub mod approve_recipient;
pub mod remove_recipient;
pub mod pause;
pub mod unpause;
pub mod create_schedule;
pub mod claim_vested;
pub mod revoke_vesting;
pub mod emit_vesting_quote;

pub use initialize::*;
pub use approve_recipient::*;
pub use remove_recipient::*;
pub use pause::*;
pub use unpause::*;
pub use create_schedule::*;
pub use claim_vested::*;
pub use revoke_vesting::*;
pub use emit_vesting_quote::*;
