pub(crate) mod account;
mod pricing;
mod swap;

/// Addresses and magic numbers of the pump.fun program.
///
/// These belong to the deployed on-chain program; changing any of them breaks
/// wire compatibility.
pub mod constants {
    use solana_sdk::{pubkey, pubkey::Pubkey};

    /// The pump.fun bonding-curve program.
    pub const PUMP_FUN_ID: Pubkey = pubkey!("6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P");
    /// Global configuration account of the program.
    pub const GLOBAL: Pubkey = pubkey!("4wTV1YmiEkRvAtNtsSGPtUrqRYQMe5SKy2uB4Jjaxnjf");
    /// Account collecting the protocol fee on every swap.
    pub const FEE_RECIPIENT: Pubkey = pubkey!("CebN5WGQ4jvEPvsVU4EoHEpgzq1VV7AbicfhtW4xC9iM");
    /// Anchor event authority PDA used for self-CPI event logging.
    pub const EVENT_AUTHORITY: Pubkey = pubkey!("Ce6TQqeHC9p8KetsN6JsjHK7UTZk7nasjjnr7XxXp9F1");

    /// Anchor discriminator of the `BondingCurve` account.
    pub const BONDING_CURVE_DISCRIMINATOR: [u8; 8] = [23, 183, 248, 55, 96, 216, 172, 96];
    /// Instruction discriminator of `buy`, as a little-endian u64.
    pub const BUY_DISCRIMINATOR: u64 = 16_927_863_322_537_952_870;
    /// Instruction discriminator of `sell`, as a little-endian u64.
    pub const SELL_DISCRIMINATOR: u64 = 12_502_976_635_542_562_355;

    /// Decimals of every token minted by the program.
    pub const TOKEN_DECIMALS: u32 = 6;
    /// Decimals of SOL (lamports per SOL = 10^9).
    pub const SOL_DECIMALS: u32 = 9;
    pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    /// Priority fee attached to buys, in micro-lamports per compute unit.
    pub const DEFAULT_COMPUTE_UNIT_PRICE: u64 = 517_000;
    /// Compute unit ceiling requested for buys.
    pub const DEFAULT_COMPUTE_UNIT_LIMIT: u32 = 72_000;
}

pub use super::pump_fun::{
    account::BondingCurve,
    constants::*,
    pricing::{BuyQuote, SellQuote, to_base_units},
    swap::{
        ComputeBudget, SwapAccounts, SwapInstructionData, build_buy_instructions,
        build_sell_instructions,
    },
};
