use std::path::Path;

use anyhow::bail;
use rust_decimal::Decimal;
use serde::Deserialize;
use solana_client::rpc_config::CommitmentConfig;

use crate::libs::solana_client::{
    RpcConfig, SendOptions,
    dex::pump_fun::{ComputeBudget, DEFAULT_COMPUTE_UNIT_LIMIT, DEFAULT_COMPUTE_UNIT_PRICE},
};

/// A trait for types that require internal consistency checks before use.
pub trait Validatable {
    /// Validates the internal state of the object.
    fn validate(&mut self) -> anyhow::Result<()>;
}

/// Trading settings loaded from `config.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub rpc_endpoint: String,
    /// Default slippage tolerance as a fraction, e.g. `0.05`.
    #[serde(with = "rust_decimal::serde::float")]
    pub slippage: Decimal,
    #[serde(default = "default_compute_unit_price")]
    pub compute_unit_price: u64,
    #[serde(default = "default_compute_unit_limit")]
    pub compute_unit_limit: u32,
    #[serde(default)]
    pub skip_preflight: bool,
}

fn default_compute_unit_price() -> u64 {
    DEFAULT_COMPUTE_UNIT_PRICE
}

fn default_compute_unit_limit() -> u32 {
    DEFAULT_COMPUTE_UNIT_LIMIT
}

impl Config {
    /// Reads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let mut config: Self = tools::toml::parse_file(path)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn rpc_config(&self) -> RpcConfig {
        RpcConfig {
            url: self.rpc_endpoint.clone(),
        }
    }

    #[must_use]
    pub fn trade_settings(&self) -> TradeSettings {
        TradeSettings {
            budget: ComputeBudget {
                unit_price: self.compute_unit_price,
                unit_limit: self.compute_unit_limit,
            },
            send: SendOptions {
                skip_preflight: self.skip_preflight,
                ..SendOptions::default()
            },
            ..TradeSettings::default()
        }
    }
}

impl Validatable for Config {
    fn validate(&mut self) -> anyhow::Result<()> {
        if self.rpc_endpoint.is_empty() {
            bail!("RPC endpoint cannot be empty");
        }
        if self.slippage < Decimal::ZERO || self.slippage >= Decimal::ONE {
            bail!("Slippage must be in [0, 1), got {}", self.slippage);
        }
        if self.compute_unit_limit == 0 {
            bail!("Compute unit limit must be positive");
        }
        Ok(())
    }
}

/// Per-trade knobs that are not part of the trade request itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeSettings {
    pub budget: ComputeBudget,
    /// Commitment for reading the bonding curve.
    pub fetch_commitment: CommitmentConfig,
    /// Commitment for the blockhash the transaction is signed with.
    pub blockhash_commitment: CommitmentConfig,
    pub send: SendOptions,
}

impl Default for TradeSettings {
    fn default() -> Self {
        Self {
            budget: ComputeBudget::default(),
            fetch_commitment: CommitmentConfig::confirmed(),
            blockhash_commitment: CommitmentConfig::finalized(),
            send: SendOptions::default(),
        }
    }
}
