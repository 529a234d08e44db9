pub mod dex;
pub mod registry;
pub mod rpc;
pub mod utils;

pub use rpc::{ChainClient, KeyProvider, RpcClient, RpcConfig, SendOptions};
