//! Chain access: provider construction, transaction confirmation and the
//! ERC-1967 proxy helpers. Contract bindings live in [`abi`].

pub mod abi;
pub mod artifact;
pub mod proxy;

use alloy::contract::{CallBuilder, CallDecoder};
use alloy::network::{Ethereum, EthereumWallet};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{
    DynProvider, PendingTransactionBuilder, PendingTransactionError, Provider, ProviderBuilder,
};
use alloy::rpc::types::TransactionReceipt;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::TransportError;
use thiserror::Error;
use tracing::info;

use crate::constants::{IMPLEMENTATION_STORAGE_SLOT, NUM_BYTES_ADDRESS, NUM_BYTES_STORAGE_SLOT};

#[derive(Debug, Error)]
pub enum ChainCallError {
    #[error("invalid RPC URL `{url}`: {reason}")]
    RpcUrl { url: String, reason: String },

    #[error("RPC request failed: {0}")]
    Provider(#[from] TransportError),

    #[error("contract call `{label}` failed: {source}")]
    Contract {
        label: String,
        #[source]
        source: alloy::contract::Error,
    },

    #[error("awaiting receipt for `{label}`: {source}")]
    Receipt {
        label: String,
        #[source]
        source: PendingTransactionError,
    },

    #[error("transaction `{label}` reverted (tx {tx})")]
    Reverted { label: String, tx: TxHash },

    #[error("deploying {contract} produced no contract address (tx {tx})")]
    Deploy { contract: String, tx: TxHash },
}

impl ChainCallError {
    /// Adapter for `map_err` on contract calls.
    pub fn contract(label: &str) -> impl FnOnce(alloy::contract::Error) -> Self + '_ {
        move |source| ChainCallError::Contract {
            label: label.to_string(),
            source,
        }
    }
}

// ── Provider factory ───────────────────────────────────────────────

/// Create an HTTP provider; with a signer it fills and signs transactions.
pub fn connect(
    rpc_url: &str,
    signer: Option<PrivateKeySigner>,
) -> Result<DynProvider, ChainCallError> {
    let url = rpc_url
        .parse::<reqwest::Url>()
        .map_err(|e| ChainCallError::RpcUrl {
            url: rpc_url.to_string(),
            reason: e.to_string(),
        })?;
    let provider = match signer {
        Some(signer) => ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased(),
        None => ProviderBuilder::new().connect_http(url).erased(),
    };
    Ok(provider)
}

// ── Transactions ───────────────────────────────────────────────────

/// Wait for a submitted transaction and fail if it reverted.
pub async fn confirm(
    pending: PendingTransactionBuilder<Ethereum>,
    label: &str,
) -> Result<TransactionReceipt, ChainCallError> {
    let tx = *pending.tx_hash();
    info!(%label, %tx, "transaction submitted");

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|source| ChainCallError::Receipt {
            label: label.to_string(),
            source,
        })?;
    if !receipt.status() {
        return Err(ChainCallError::Reverted {
            label: label.to_string(),
            tx,
        });
    }
    info!(%label, %tx, block = ?receipt.block_number, "transaction confirmed");
    Ok(receipt)
}

/// Send a contract call and wait for a successful receipt.
pub async fn submit<P, D>(
    call: CallBuilder<P, D>,
    label: &str,
) -> Result<TransactionReceipt, ChainCallError>
where
    P: Provider,
    D: CallDecoder,
{
    let pending = call.send().await.map_err(ChainCallError::contract(label))?;
    confirm(pending, label).await
}

// ── ERC-1967 ───────────────────────────────────────────────────────

/// Implementation address a proxy currently delegates to.
pub async fn implementation_address(
    provider: &DynProvider,
    proxy: Address,
) -> Result<Address, ChainCallError> {
    let slot = U256::from_be_bytes(IMPLEMENTATION_STORAGE_SLOT.0);
    let word = provider.get_storage_at(proxy, slot).await?;
    Ok(address_from_slot(word))
}

/// The address held in the low 20 bytes of a storage word.
pub fn address_from_slot(word: U256) -> Address {
    let bytes = word.to_be_bytes::<NUM_BYTES_STORAGE_SLOT>();
    Address::from_slice(&bytes[NUM_BYTES_STORAGE_SLOT - NUM_BYTES_ADDRESS..])
}

/// Format an address for display (shortened).
pub fn short_addr(addr: &Address) -> String {
    let s = format!("{addr}");
    if s.len() > 10 {
        format!("{}...{}", &s[..6], &s[s.len() - 4..])
    } else {
        s
    }
}
