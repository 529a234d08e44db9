use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

pub use spl_associated_token_account_interface::address::get_associated_token_address;

/// Native and SPL programs every swap touches.
pub mod programs {
    pub use solana_compute_budget_interface::ID as COMPUTE_BUDGET_PROGRAM_ID;
    pub use solana_sdk_ids::{
        system_program::ID as SYSTEM_PROGRAM_ID, sysvar::rent::ID as RENT_SYSVAR_ID,
    };
    pub use spl_associated_token_account_interface::program::ID as ASSOCIATED_TOKEN_PROGRAM_ID;
    pub use spl_token_interface::ID as TOKEN_PROGRAM_ID;
}

/// Creates the owner's associated token account for a classic SPL mint unless
/// it already exists.
#[must_use]
pub fn create_associated_token_account_idempotent(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    spl_associated_token_account_interface::instruction::create_associated_token_account_idempotent(
        payer,
        owner,
        mint,
        &programs::TOKEN_PROGRAM_ID,
    )
}
