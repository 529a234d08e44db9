use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::libs::solana_client::{
    dex::pump_fun::{
        constants::{
            BUY_DISCRIMINATOR, DEFAULT_COMPUTE_UNIT_LIMIT, DEFAULT_COMPUTE_UNIT_PRICE,
            EVENT_AUTHORITY, FEE_RECIPIENT, GLOBAL, PUMP_FUN_ID, SELL_DISCRIMINATOR,
        },
        pricing::{BuyQuote, SellQuote},
    },
    utils::{
        create_associated_token_account_idempotent,
        programs::{
            ASSOCIATED_TOKEN_PROGRAM_ID, RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
        },
    },
};

/// Payload of a `buy` or `sell` instruction.
///
/// Layout: discriminator, token amount, SOL bound; each a little-endian u64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapInstructionData {
    pub discriminator: u64,
    /// Token amount in base units.
    pub amount: u64,
    /// Max lamports in for a buy, min lamports out for a sell.
    pub sol_bound: u64,
}

impl SwapInstructionData {
    pub const LEN: usize = 24;

    #[must_use]
    pub fn buy(amount: u64, max_sol_cost: u64) -> Self {
        Self {
            discriminator: BUY_DISCRIMINATOR,
            amount,
            sol_bound: max_sol_cost,
        }
    }

    #[must_use]
    pub fn sell(amount: u64, min_sol_output: u64) -> Self {
        Self {
            discriminator: SELL_DISCRIMINATOR,
            amount,
            sol_bound: min_sol_output,
        }
    }

    #[must_use]
    pub fn encode(&self) -> [u8; Self::LEN] {
        let mut data = [0u8; Self::LEN];
        data[..8].copy_from_slice(&self.discriminator.to_le_bytes());
        data[8..16].copy_from_slice(&self.amount.to_le_bytes());
        data[16..].copy_from_slice(&self.sol_bound.to_le_bytes());
        data
    }
}

/// Accounts that identify the traded coin and the trader's token account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapAccounts {
    pub mint: Pubkey,
    pub bonding_curve: Pubkey,
    pub associated_bonding_curve: Pubkey,
    /// The owner's associated token account for `mint`.
    pub associated_user: Pubkey,
}

/// Priority fee and compute ceiling attached to a buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeBudget {
    pub unit_price: u64,
    pub unit_limit: u32,
}

impl Default for ComputeBudget {
    fn default() -> Self {
        Self {
            unit_price: DEFAULT_COMPUTE_UNIT_PRICE,
            unit_limit: DEFAULT_COMPUTE_UNIT_LIMIT,
        }
    }
}

/// Instructions for a buy, in execution order: compute unit price, compute unit
/// limit, create the owner's token account, swap.
#[must_use]
pub fn build_buy_instructions(
    owner: &Pubkey,
    accounts: &SwapAccounts,
    quote: &BuyQuote,
    budget: ComputeBudget,
) -> Vec<Instruction> {
    let data = SwapInstructionData::buy(quote.token_units, quote.max_sol_cost);

    // Account order is fixed by the program's `buy` handler.
    let metas = vec![
        AccountMeta::new_readonly(GLOBAL, false),
        AccountMeta::new(FEE_RECIPIENT, false),
        AccountMeta::new_readonly(accounts.mint, false),
        AccountMeta::new(accounts.bonding_curve, false),
        AccountMeta::new(accounts.associated_bonding_curve, false),
        AccountMeta::new(accounts.associated_user, false),
        AccountMeta::new(*owner, true),
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
        AccountMeta::new_readonly(EVENT_AUTHORITY, false),
        AccountMeta::new_readonly(PUMP_FUN_ID, false),
    ];

    vec![
        ComputeBudgetInstruction::set_compute_unit_price(budget.unit_price),
        ComputeBudgetInstruction::set_compute_unit_limit(budget.unit_limit),
        create_associated_token_account_idempotent(owner, owner, &accounts.mint),
        Instruction::new_with_bytes(PUMP_FUN_ID, &data.encode(), metas),
    ]
}

/// Instructions for a sell: the swap alone.
#[must_use]
pub fn build_sell_instructions(
    owner: &Pubkey,
    accounts: &SwapAccounts,
    quote: &SellQuote,
) -> Vec<Instruction> {
    let data = SwapInstructionData::sell(quote.token_units, quote.min_sol_output);

    // Account order is fixed by the program's `sell` handler.
    let metas = vec![
        AccountMeta::new_readonly(GLOBAL, false),
        AccountMeta::new(FEE_RECIPIENT, false),
        AccountMeta::new_readonly(accounts.mint, false),
        AccountMeta::new(accounts.bonding_curve, false),
        AccountMeta::new(accounts.associated_bonding_curve, false),
        AccountMeta::new(accounts.associated_user, false),
        AccountMeta::new(*owner, true),
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(EVENT_AUTHORITY, false),
        AccountMeta::new_readonly(PUMP_FUN_ID, false),
    ];

    vec![Instruction::new_with_bytes(PUMP_FUN_ID, &data.encode(), metas)]
}
