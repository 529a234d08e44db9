use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::{
    error::PricingError,
    libs::solana_client::dex::pump_fun::{
        account::BondingCurve,
        constants::{LAMPORTS_PER_SOL, SOL_DECIMALS, TOKEN_DECIMALS},
    },
};

/// Decimal places kept in the implied unit price.
const PRICE_SCALE: u32 = 9;

/// Amounts for a buy priced against one curve snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyQuote {
    /// Tokens expected for the spend, in whole tokens.
    pub token_amount: Decimal,
    /// `token_amount` in base units, truncated.
    pub token_units: u64,
    /// Upper bound on lamports the program may take, slippage included.
    pub max_sol_cost: u64,
}

/// Amounts for a sell priced against one curve snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellQuote {
    /// Tokens being sold, in whole tokens.
    pub token_amount: Decimal,
    /// `token_amount` in base units, truncated.
    pub token_units: u64,
    /// Expected proceeds in SOL at the implied price.
    pub sol_output: Decimal,
    /// Lower bound on lamports the program must pay out, slippage included.
    pub min_sol_output: u64,
}

impl BondingCurve {
    /// Spot price of one whole token in SOL, rounded to 9 decimal places.
    ///
    /// This is the reserve ratio at the current point of the curve. The price
    /// impact of the trade itself is not taken into account; the slippage bound
    /// is what protects the trader from the difference. SOL reserves are divided
    /// exactly; they are not floored to whole SOL first.
    pub fn implied_unit_price(&self) -> Result<Decimal, PricingError> {
        if self.virtual_token_reserves == 0 {
            return Err(PricingError::ZeroReserves("virtual token"));
        }
        if self.virtual_sol_reserves == 0 {
            return Err(PricingError::ZeroReserves("virtual SOL"));
        }

        let sol_reserves =
            Decimal::from(self.virtual_sol_reserves) / Decimal::from(LAMPORTS_PER_SOL);

        let price = sol_reserves
            .checked_mul(pow10(TOKEN_DECIMALS))
            .and_then(|v| v.checked_div(Decimal::from(self.virtual_token_reserves)))
            .ok_or(PricingError::Overflow("unit price"))?;

        Ok(price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Prices a buy of `spend` SOL.
    pub fn quote_buy(&self, spend: Decimal, slippage: Decimal) -> Result<BuyQuote, PricingError> {
        check_amount(spend)?;
        check_slippage(slippage)?;
        let price = self.nonzero_price()?;

        let token_amount = spend
            .checked_div(price)
            .ok_or(PricingError::Overflow("token amount"))?;
        let max_sol = spend
            .checked_mul(Decimal::ONE + slippage)
            .ok_or(PricingError::Overflow("max SOL cost"))?;

        Ok(BuyQuote {
            token_amount,
            token_units: to_base_units(token_amount, TOKEN_DECIMALS)?,
            max_sol_cost: to_base_units(max_sol, SOL_DECIMALS)?,
        })
    }

    /// Prices a sell of `token_amount` whole tokens.
    ///
    /// Fractional tokens are sold too: the amount is truncated at the sixth
    /// decimal, not to a whole token, so a full sell after a buy leaves no dust.
    pub fn quote_sell(
        &self,
        token_amount: Decimal,
        slippage: Decimal,
    ) -> Result<SellQuote, PricingError> {
        check_amount(token_amount)?;
        check_slippage(slippage)?;
        let price = self.nonzero_price()?;

        let sol_output = token_amount
            .checked_mul(price)
            .ok_or(PricingError::Overflow("SOL output"))?;
        let min_sol = sol_output
            .checked_mul(Decimal::ONE - slippage)
            .ok_or(PricingError::Overflow("min SOL output"))?;

        Ok(SellQuote {
            token_amount,
            token_units: to_base_units(token_amount, TOKEN_DECIMALS)?,
            sol_output,
            min_sol_output: to_base_units(min_sol, SOL_DECIMALS)?,
        })
    }

    fn nonzero_price(&self) -> Result<Decimal, PricingError> {
        let price = self.implied_unit_price()?;
        if price.is_zero() {
            return Err(PricingError::ZeroPrice);
        }
        Ok(price)
    }
}

/// Converts a whole-unit amount into integer base units, truncating toward zero.
///
/// `1.9999999999` SOL is `1_999_999_999` lamports, never `2_000_000_000`.
pub fn to_base_units(amount: Decimal, decimals: u32) -> Result<u64, PricingError> {
    amount
        .checked_mul(pow10(decimals))
        .and_then(|v| v.trunc().to_u64())
        .ok_or(PricingError::Overflow("base units"))
}

fn pow10(exp: u32) -> Decimal {
    Decimal::from(10u64.pow(exp))
}

fn check_amount(amount: Decimal) -> Result<(), PricingError> {
    if amount <= Decimal::ZERO {
        return Err(PricingError::InvalidAmount(amount.to_string()));
    }
    Ok(())
}

fn check_slippage(slippage: Decimal) -> Result<(), PricingError> {
    if slippage < Decimal::ZERO || slippage >= Decimal::ONE {
        return Err(PricingError::InvalidSlippage(slippage.to_string()));
    }
    Ok(())
}
