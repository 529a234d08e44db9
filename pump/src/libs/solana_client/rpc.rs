use async_trait::async_trait;
use solana_client::{
    nonblocking::rpc_client::RpcClient as SolanaRpcClient,
    rpc_config::{CommitmentConfig, RpcSendTransactionConfig},
};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use tracing::debug;

use crate::error::TransportError;

/// Preflight settings used when broadcasting a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOptions {
    pub skip_preflight: bool,
    pub preflight_commitment: CommitmentConfig,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            skip_preflight: false,
            preflight_commitment: CommitmentConfig::finalized(),
        }
    }
}

/// Blockchain access needed by a trade.
///
/// Implementations own timeouts and any retry policy; callers treat every
/// error as fatal for the current trade.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Returns the raw data of an account.
    async fn fetch_account(
        &self,
        address: &Pubkey,
        commitment: CommitmentConfig,
    ) -> Result<Vec<u8>, TransportError>;

    /// Returns a blockhash recent enough to sign with.
    async fn get_recent_blockhash(&self, commitment: CommitmentConfig)
    -> Result<Hash, TransportError>;

    /// Broadcasts a signed transaction and returns its signature.
    async fn send_transaction(
        &self,
        tx: &Transaction,
        options: SendOptions,
    ) -> Result<Signature, TransportError>;
}

/// Source of private keys for signing.
pub trait KeyProvider: Send + Sync {
    /// Returns the keypair for `pubkey` if it is held.
    fn keypair(&self, pubkey: &Pubkey) -> Option<&Keypair>;
}

impl KeyProvider for Keypair {
    fn keypair(&self, pubkey: &Pubkey) -> Option<&Keypair> {
        (self.pubkey() == *pubkey).then_some(self)
    }
}

/// Configuration for the Solana RPC client.
#[derive(Default)]
pub struct RpcConfig {
    /// The Solana RPC endpoint URL.
    pub url: String,
}

/// Wrapper for Solana RPC client.
pub struct RpcClient {
    /// Internal RPC client instance.
    client: SolanaRpcClient,
}

impl RpcClient {
    /// Creates a new `RpcClient` from the provided configuration.
    #[must_use]
    pub fn from_config(config: RpcConfig) -> Self {
        let client = SolanaRpcClient::new(config.url);
        Self { client }
    }
}

#[async_trait]
impl ChainClient for RpcClient {
    async fn fetch_account(
        &self,
        address: &Pubkey,
        commitment: CommitmentConfig,
    ) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get_account_with_commitment(address, commitment)
            .await
            .map_err(|e| TransportError::Rpc(Box::new(e)))?;

        let account = response
            .value
            .ok_or(TransportError::AccountNotFound(*address))?;

        debug!(%address, slot = response.context.slot, len = account.data.len(), "Fetched account");
        Ok(account.data)
    }

    async fn get_recent_blockhash(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<Hash, TransportError> {
        let (blockhash, _last_valid_height) = self
            .client
            .get_latest_blockhash_with_commitment(commitment)
            .await
            .map_err(|e| TransportError::Rpc(Box::new(e)))?;
        Ok(blockhash)
    }

    async fn send_transaction(
        &self,
        tx: &Transaction,
        options: SendOptions,
    ) -> Result<Signature, TransportError> {
        let config = RpcSendTransactionConfig {
            skip_preflight: options.skip_preflight,
            preflight_commitment: Some(options.preflight_commitment.commitment),
            ..Default::default()
        };

        self.client
            .send_transaction_with_config(tx, config)
            .await
            .map_err(|e| TransportError::Rpc(Box::new(e)))
    }
}
