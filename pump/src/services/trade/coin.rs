use rust_decimal::Decimal;
use solana_sdk::{
    instruction::Instruction, pubkey::Pubkey, signature::Signature, transaction::Transaction,
};
use tracing::{debug, info, warn};

use crate::{
    config::TradeSettings,
    error::{AddressError, parse_pubkey},
    libs::solana_client::{
        ChainClient, KeyProvider,
        dex::pump_fun::{BondingCurve, SwapAccounts, build_buy_instructions, build_sell_instructions},
        registry::DexEntity,
        utils::get_associated_token_address,
    },
    services::trade::error::{StepContext, TradeError, TradeFailure, TradeStep},
};

/// What to trade and how much price movement to tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TradeRequest {
    /// SOL to spend on a buy.
    pub buy_amount: Decimal,
    /// Slippage tolerance as a fraction in `[0, 1)`.
    pub slippage: Decimal,
    pub mint: Pubkey,
    pub bonding_curve: Pubkey,
    /// The bonding curve's token account for `mint`.
    pub associated_bonding_curve: Pubkey,
}

impl TradeRequest {
    /// Builds a request from base58 addresses.
    pub fn from_addresses(
        buy_amount: Decimal,
        slippage: Decimal,
        mint: &str,
        bonding_curve: &str,
        associated_bonding_curve: &str,
    ) -> Result<Self, AddressError> {
        Ok(Self {
            buy_amount,
            slippage,
            mint: parse_pubkey(mint)?,
            bonding_curve: parse_pubkey(bonding_curve)?,
            associated_bonding_curve: parse_pubkey(associated_bonding_curve)?,
        })
    }
}

/// Outcome of a submitted trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeResult {
    /// Tokens bought or sold, in whole tokens.
    pub token_amount: Decimal,
    /// The owner's token account for the traded mint.
    pub associated_user: Pubkey,
    pub signature: Signature,
}

/// One coin traded on a pump.fun bonding curve.
///
/// Every trade resolves the owner's token account, fetches a fresh curve
/// snapshot, prices against it, builds the instructions and submits them.
/// The first failing step ends the trade.
#[derive(Debug, Clone, Default)]
pub struct Coin {
    request: TradeRequest,
    settings: TradeSettings,
    /// Tokens received by the last successful buy, or set explicitly.
    coin_bought: Option<Decimal>,
    token_account: Option<Pubkey>,
}

impl Coin {
    #[must_use]
    pub fn new(request: TradeRequest) -> Self {
        Self {
            request,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: TradeSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn mint(&self) -> Pubkey {
        self.request.mint
    }

    #[must_use]
    pub fn request(&self) -> &TradeRequest {
        &self.request
    }

    /// Tokens the next `sell` will sell.
    #[must_use]
    pub fn coin_bought(&self) -> Option<Decimal> {
        self.coin_bought
    }

    /// The owner's token account resolved by the last trade.
    #[must_use]
    pub fn token_account(&self) -> Option<Pubkey> {
        self.token_account
    }

    pub fn set_buy_amount(&mut self, amount: Decimal) {
        self.request.buy_amount = amount;
    }

    pub fn set_slippage(&mut self, slippage: Decimal) {
        self.request.slippage = slippage;
    }

    pub fn set_mint_address(&mut self, mint: Pubkey) {
        self.request.mint = mint;
    }

    pub fn set_curve_address(&mut self, bonding_curve: Pubkey) {
        self.request.bonding_curve = bonding_curve;
    }

    pub fn set_associated_curve_address(&mut self, associated_bonding_curve: Pubkey) {
        self.request.associated_bonding_curve = associated_bonding_curve;
    }

    /// Overrides the amount the next `sell` will sell, e.g. for tokens bought elsewhere.
    pub fn set_sell_amount(&mut self, amount: Decimal) {
        self.coin_bought = Some(amount);
    }

    /// Fetches and decodes the current bonding curve.
    ///
    /// Trades do not refuse a completed curve; callers that want to gate on
    /// [`BondingCurve::is_complete`] can check it here first.
    pub async fn curve_state(&self, client: &dyn ChainClient) -> Result<BondingCurve, TradeError> {
        self.fetch_curve(client).await.step(TradeStep::Fetch)
    }

    /// Buys tokens for `buy_amount` SOL.
    pub async fn buy(
        &mut self,
        client: &dyn ChainClient,
        keys: &dyn KeyProvider,
        owner: Pubkey,
    ) -> Result<TradeResult, TradeError> {
        let accounts = self.resolve(&owner);

        let curve = self.curve_state(client).await?;

        let quote = curve
            .quote_buy(self.request.buy_amount, self.request.slippage)
            .step(TradeStep::Price)?;
        debug!(
            mint = %self.request.mint,
            token_units = quote.token_units,
            max_sol_cost = quote.max_sol_cost,
            "Priced buy"
        );

        let instructions =
            build_buy_instructions(&owner, &accounts, &quote, self.settings.budget);

        let signature = self
            .submit(client, keys, owner, &instructions)
            .await
            .step(TradeStep::Submit)?;

        info!(mint = %self.request.mint, %signature, tokens = %quote.token_amount, "Buy submitted");
        self.coin_bought = Some(quote.token_amount);

        Ok(TradeResult {
            token_amount: quote.token_amount,
            associated_user: accounts.associated_user,
            signature,
        })
    }

    /// Sells the tokens recorded by the last buy (or [`Coin::set_sell_amount`]).
    pub async fn sell(
        &mut self,
        client: &dyn ChainClient,
        keys: &dyn KeyProvider,
        owner: Pubkey,
    ) -> Result<TradeResult, TradeError> {
        let accounts = self.resolve(&owner);

        let curve = self.curve_state(client).await?;

        let amount = self.coin_bought.unwrap_or_default();
        let quote = curve
            .quote_sell(amount, self.request.slippage)
            .step(TradeStep::Price)?;
        debug!(
            mint = %self.request.mint,
            token_units = quote.token_units,
            min_sol_output = quote.min_sol_output,
            "Priced sell"
        );

        let instructions = build_sell_instructions(&owner, &accounts, &quote);

        let signature = self
            .submit(client, keys, owner, &instructions)
            .await
            .step(TradeStep::Submit)?;

        info!(mint = %self.request.mint, %signature, tokens = %quote.token_amount, "Sell submitted");

        Ok(TradeResult {
            token_amount: quote.token_amount,
            associated_user: accounts.associated_user,
            signature,
        })
    }

    fn resolve(&mut self, owner: &Pubkey) -> SwapAccounts {
        let associated_user = get_associated_token_address(owner, &self.request.mint);
        debug!(step = %TradeStep::Resolve, %owner, %associated_user, "Resolved token account");
        self.token_account = Some(associated_user);

        SwapAccounts {
            mint: self.request.mint,
            bonding_curve: self.request.bonding_curve,
            associated_bonding_curve: self.request.associated_bonding_curve,
            associated_user,
        }
    }

    async fn fetch_curve(&self, client: &dyn ChainClient) -> Result<BondingCurve, TradeFailure> {
        let data = client
            .fetch_account(&self.request.bonding_curve, self.settings.fetch_commitment)
            .await?;
        if !BondingCurve::has_discriminator(&data) {
            warn!(bonding_curve = %self.request.bonding_curve, "Unexpected account discriminator");
        }
        let curve = BondingCurve::deserialize(&data)?;

        if curve.is_complete() {
            warn!(bonding_curve = %self.request.bonding_curve, "Bonding curve is complete");
        }
        Ok(curve)
    }

    async fn submit(
        &self,
        client: &dyn ChainClient,
        keys: &dyn KeyProvider,
        owner: Pubkey,
        instructions: &[Instruction],
    ) -> Result<Signature, TradeFailure> {
        let keypair = keys.keypair(&owner).ok_or(AddressError::MissingKey(owner))?;

        let blockhash = client
            .get_recent_blockhash(self.settings.blockhash_commitment)
            .await?;

        let mut tx = Transaction::new_with_payer(instructions, Some(&owner));
        tx.try_sign(&[keypair], blockhash)
            .map_err(|e| AddressError::Signing(e.to_string()))?;

        Ok(client.send_transaction(&tx, self.settings.send).await?)
    }
}
