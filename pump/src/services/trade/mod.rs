mod coin;
mod error;

pub use coin::{Coin, TradeRequest, TradeResult};
pub use error::{TradeError, TradeFailure, TradeStep};
