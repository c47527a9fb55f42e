//! Source verification of deployed implementations on a block explorer.
//!
//! Verification is best effort: deploy tasks never fail because the explorer
//! rejected or could not be reached. [`verify_proxy`] is the one entry point
//! tasks use; it logs every failure at `warn` and carries on.

mod etherscan;

use alloy::primitives::Address;
use alloy::providers::DynProvider;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::chain::artifact::{Artifact, ArtifactError, Artifacts};
use crate::chain::{ChainCallError, implementation_address};

pub use etherscan::EtherscanVerifier;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("explorer request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("explorer rejected verification: {0}")]
    Rejected(String),
}

/// Everything an explorer needs to verify one deployed contract.
#[derive(Debug, Clone)]
pub struct VerificationRequest {
    pub address: Address,
    /// `<sourceName>:<contractName>`.
    pub contract_name: String,
    /// Solc version prefixed with `v`, e.g. `v0.8.20+commit.a1b79de6`.
    pub compiler_version: String,
    pub standard_json_input: serde_json::Value,
}

impl VerificationRequest {
    /// Build a request from a compiled artifact and its build-info.
    pub fn from_artifact(
        artifacts: &Artifacts,
        artifact: &Artifact,
        address: Address,
    ) -> Result<Self, VerifyError> {
        let build_info = artifacts.build_info(artifact)?;
        Ok(Self {
            address,
            contract_name: artifact.qualified_name(),
            compiler_version: format!("v{}", build_info.solc_long_version),
            standard_json_input: build_info.input,
        })
    }
}

/// A service that accepts source-verification submissions.
#[async_trait]
pub trait ContractVerifier: Send + Sync {
    /// Submit a request; returns the explorer's tracking id.
    async fn verify(&self, request: &VerificationRequest) -> Result<String, VerifyError>;
}

/// Submit `request`, logging the outcome. Failures are swallowed.
pub async fn submit_logged(
    verifier: &dyn ContractVerifier,
    request: &VerificationRequest,
) -> Option<String> {
    match verifier.verify(request).await {
        Ok(guid) => {
            info!(
                contract = %request.contract_name,
                address = %request.address,
                %guid,
                "verification submitted"
            );
            Some(guid)
        }
        Err(e) => {
            warn!(
                contract = %request.contract_name,
                address = %request.address,
                "verification failed: {e}"
            );
            None
        }
    }
}

/// Verify the implementation behind `proxy`.
///
/// Reading the implementation slot is the only fatal step; artifact and
/// explorer failures are logged and swallowed.
pub async fn verify_proxy(
    provider: &DynProvider,
    verifier: &dyn ContractVerifier,
    artifacts: &Artifacts,
    contract: &str,
    proxy: Address,
) -> Result<Option<String>, ChainCallError> {
    let implementation = implementation_address(provider, proxy).await?;
    info!(%contract, %proxy, %implementation, "verifying implementation");

    let request = artifacts
        .contract(contract)
        .map_err(VerifyError::from)
        .and_then(|artifact| {
            VerificationRequest::from_artifact(artifacts, &artifact, implementation)
        });
    match request {
        Ok(request) => Ok(submit_logged(verifier, &request).await),
        Err(e) => {
            warn!(%contract, "verification skipped: {e}");
            Ok(None)
        }
    }
}
