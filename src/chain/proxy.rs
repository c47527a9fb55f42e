//! Deploying an implementation contract behind an `ERC1967Proxy`.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolValue;
use tracing::{info, warn};

use super::artifact::Artifact;
use super::{ChainCallError, confirm, implementation_address, short_addr};

/// Addresses produced by one proxy deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyDeployment {
    pub proxy: Address,
    pub implementation: Address,
}

/// Deploy `implementation`, then an `ERC1967Proxy` pointing at it whose
/// constructor runs `init_calldata` against the new implementation.
pub async fn deploy_proxy(
    provider: &DynProvider,
    implementation: &Artifact,
    proxy_artifact: &Artifact,
    init_calldata: Bytes,
) -> Result<ProxyDeployment, ChainCallError> {
    let implementation_addr = deploy_code(
        provider,
        &implementation.contract_name,
        implementation.bytecode.clone(),
    )
    .await?;

    let mut code = proxy_artifact.bytecode.to_vec();
    code.extend_from_slice(&(implementation_addr, init_calldata).abi_encode_params());
    let proxy_label = format!("{} proxy", implementation.contract_name);
    let proxy = deploy_code(provider, &proxy_label, code.into()).await?;

    let onchain = implementation_address(provider, proxy).await?;
    if onchain != implementation_addr {
        warn!(
            proxy = %proxy,
            expected = %implementation_addr,
            found = %onchain,
            "proxy implementation slot does not match deployed implementation"
        );
    }

    info!(
        contract = %implementation.contract_name,
        proxy = %short_addr(&proxy),
        implementation = %short_addr(&implementation_addr),
        "proxy deployed"
    );
    Ok(ProxyDeployment {
        proxy,
        implementation: implementation_addr,
    })
}

/// Send a contract-creation transaction and return the created address.
async fn deploy_code(
    provider: &DynProvider,
    label: &str,
    code: Bytes,
) -> Result<Address, ChainCallError> {
    let tx = TransactionRequest::default().with_deploy_code(code);
    let pending = provider.send_transaction(tx).await?;
    let receipt = confirm(pending, &format!("deploy {label}")).await?;
    receipt.contract_address.ok_or(ChainCallError::Deploy {
        contract: label.to_string(),
        tx: receipt.transaction_hash,
    })
}
