//! Program-wide constants.

/// Seed for the singleton config PDA.
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix for the vault token account PDA.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix for per-recipient schedule PDAs.
pub const SCHEDULE_SEED: &[u8] = b"schedule";

/// Seed prefix for per-recipient allow-list PDAs.
pub const APPROVAL_SEED: &[u8] = b"approval";
