use strum::Display;

use crate::error::{AddressError, DecodeError, PricingError, TransportError};

/// Stage of a trade, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TradeStep {
    /// Derive the owner's associated token account.
    Resolve,
    /// Read and decode the bonding curve.
    Fetch,
    /// Compute amounts and slippage bounds.
    Price,
    /// Assemble the instruction list.
    Build,
    /// Sign and broadcast the transaction.
    Submit,
}

/// Underlying cause of a failed trade.
#[derive(Debug, thiserror::Error)]
pub enum TradeFailure {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// A trade that stopped at `step`. Nothing was submitted unless `step` is
/// [`TradeStep::Submit`].
#[derive(Debug, thiserror::Error)]
#[error("Trade failed at {step} step: {source}")]
pub struct TradeError {
    pub step: TradeStep,
    #[source]
    pub source: TradeFailure,
}

/// Tags a step's error with the step it came from.
pub(crate) trait StepContext<T> {
    fn step(self, step: TradeStep) -> Result<T, TradeError>;
}

impl<T, E: Into<TradeFailure>> StepContext<T> for Result<T, E> {
    fn step(self, step: TradeStep) -> Result<T, TradeError> {
        self.map_err(|e| TradeError {
            step,
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_display() {
        assert_eq!(TradeStep::Resolve.to_string(), "resolve");
        assert_eq!(TradeStep::Submit.to_string(), "submit");
    }

    #[test]
    fn test_error_names_step() {
        let result: Result<(), PricingError> = Err(PricingError::ZeroPrice);
        let err = result.step(TradeStep::Price).unwrap_err();

        assert_eq!(err.step, TradeStep::Price);
        assert!(matches!(err.source, TradeFailure::Pricing(PricingError::ZeroPrice)));
        assert_eq!(
            err.to_string(),
            "Trade failed at price step: Implied unit price rounds to zero"
        );
    }
}
