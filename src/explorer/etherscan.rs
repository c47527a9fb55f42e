use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{ContractVerifier, VerificationRequest, VerifyError};

const CODE_FORMAT: &str = "solidity-standard-json-input";

/// Etherscan v2 multichain verification client.
#[derive(Debug, Clone)]
pub struct EtherscanVerifier {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    chain_id: u64,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    message: String,
    result: serde_json::Value,
}

impl EtherscanVerifier {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        chain_id: u64,
    ) -> Result<Self, VerifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("treasury-ops/0.1")
            .build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
            chain_id,
        })
    }
}

#[async_trait]
impl ContractVerifier for EtherscanVerifier {
    async fn verify(&self, request: &VerificationRequest) -> Result<String, VerifyError> {
        let source = request.standard_json_input.to_string();
        let address = request.address.to_string();
        let form = [
            ("apikey", self.api_key.as_str()),
            ("module", "contract"),
            ("action", "verifysourcecode"),
            ("contractaddress", address.as_str()),
            ("sourceCode", source.as_str()),
            ("codeformat", CODE_FORMAT),
            ("contractname", request.contract_name.as_str()),
            ("compilerversion", request.compiler_version.as_str()),
        ];

        debug!(chain_id = self.chain_id, contract = %request.contract_name, "posting verification");
        let response: ApiResponse = self
            .client
            .post(&self.api_url)
            .query(&[("chainid", self.chain_id)])
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let result = match response.result {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        if response.status == "1" {
            Ok(result)
        } else {
            Err(VerifyError::Rejected(format!("{} ({result})", response.message)))
        }
    }
}
