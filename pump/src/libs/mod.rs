pub mod solana_client;
