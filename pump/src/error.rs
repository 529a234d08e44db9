use solana_sdk::pubkey::Pubkey;

/// Malformed or truncated account data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Not enough bytes to read {field}: need {needed} at offset {offset}, got {len}")]
    Truncated {
        field: &'static str,
        offset: usize,
        needed: usize,
        len: usize,
    },
}

/// Degenerate curve state or out-of-range trade parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Bonding curve has zero {0} reserves")]
    ZeroReserves(&'static str),
    #[error("Implied unit price rounds to zero")]
    ZeroPrice,
    #[error("Trade amount must be positive, got {0}")]
    InvalidAmount(String),
    #[error("Slippage must be in [0, 1), got {0}")]
    InvalidSlippage(String),
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

/// Malformed key material or a key the signer does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Invalid address {value:?}: {reason}")]
    Invalid { value: String, reason: String },
    #[error("No private key held for {0}")]
    MissingKey(Pubkey),
    #[error("Failed to sign transaction: {0}")]
    Signing(String),
}

/// Failure reported by the blockchain client.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),
    #[error("RPC request failed: {0}")]
    Rpc(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Parses a base58 address, keeping the offending input in the error.
pub fn parse_pubkey(value: &str) -> Result<Pubkey, AddressError> {
    value.parse::<Pubkey>().map_err(|e| AddressError::Invalid {
        value: value.to_owned(),
        reason: e.to_string(),
    })
}
