pub mod config;
pub mod error;
pub mod libs;
pub mod services;

pub use config::{Config, TradeSettings, Validatable};
pub use error::{AddressError, DecodeError, PricingError, TransportError, parse_pubkey};
pub use libs::solana_client::{
    ChainClient, KeyProvider, RpcClient, RpcConfig, SendOptions,
    dex::pump_fun::{self, BondingCurve, BuyQuote, SellQuote, SwapAccounts},
};
pub use services::trade::{Coin, TradeError, TradeFailure, TradeRequest, TradeResult, TradeStep};
