#![allow(dead_code)]

use std::path::PathBuf;

use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::primitives::{Address, B256, U256};
use alloy::providers::{Provider, ProviderBuilder};

use treasury_ops::cli::GlobalArgs;
use treasury_ops::constants::{
    DEFAULT_ETHERSCAN_API_URL, ERC1967_PROXY_ARTIFACT, IMPLEMENTATION_STORAGE_SLOT,
};
use treasury_ops::ledger::LedgerMode;
use treasury_ops::tasks::Config;

// ── Local node ──────────────────────────────────────────────────────

pub struct NodeContext {
    pub _anvil: AnvilInstance,
    pub rpc_url: String,
    pub wallet_address: Address,
    pub private_key: String,
}

/// Spawn a fresh Anvil node (`anvil` must be on PATH).
pub fn spawn_node() -> NodeContext {
    let anvil = Anvil::new().spawn();

    let rpc_url = anvil.endpoint();
    let wallet_address = anvil.addresses()[0];
    let private_key = hex::encode(anvil.keys()[0].to_bytes());

    NodeContext {
        _anvil: anvil,
        rpc_url,
        wallet_address,
        private_key,
    }
}

/// Point `proxy`'s EIP-1967 implementation slot at `implementation`.
pub async fn set_implementation_slot(rpc_url: &str, proxy: Address, implementation: Address) {
    let provider = ProviderBuilder::new().connect_http(rpc_url.parse().unwrap());
    let slot = U256::from_be_bytes(IMPLEMENTATION_STORAGE_SLOT.0);
    let value = B256::left_padding_from(implementation.as_slice());
    let _: bool = provider
        .raw_request("anvil_setStorageAt".into(), (proxy, slot, value))
        .await
        .expect("anvil_setStorageAt failed");
}

// ── Artifacts ───────────────────────────────────────────────────────

/// Creation code that deploys a one-byte (`STOP`) runtime.
const STUB_IMPLEMENTATION_CODE: &str = "0x6001600c60003960016000f300";

/// Creation code that copies its first constructor word (the implementation
/// address) into the EIP-1967 slot and deploys an empty runtime.
fn stub_proxy_code() -> String {
    format!(
        "0x6020602d6000396000517f{}5500",
        hex::encode(IMPLEMENTATION_STORAGE_SLOT)
    )
}

fn write_artifact(path: &std::path::Path, contract: &str, source: &str, bytecode: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let json = serde_json::json!({
        "contractName": contract,
        "sourceName": source,
        "abi": [],
        "bytecode": bytecode,
    });
    std::fs::write(path, json.to_string()).unwrap();
}

/// Hardhat layout with a stub `contract` and a stub `ERC1967Proxy`.
pub fn write_stub_artifacts(name: &str, contract: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!(
        "treasury-ops-anvil-artifacts-{}-{name}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&root);
    write_artifact(
        &root
            .join("contracts")
            .join(format!("{contract}.sol"))
            .join(format!("{contract}.json")),
        contract,
        &format!("contracts/{contract}.sol"),
        STUB_IMPLEMENTATION_CODE,
    );
    write_artifact(
        &root.join(ERC1967_PROXY_ARTIFACT),
        "ERC1967Proxy",
        "@openzeppelin/contracts/proxy/ERC1967/ERC1967Proxy.sol",
        &stub_proxy_code(),
    );
    root
}

// ── Config builders ─────────────────────────────────────────────────

pub fn temp_ledger(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "treasury-ops-anvil-{}-{name}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("deployments.json")
}

pub fn make_config(node: &NodeContext, ledger_path: PathBuf) -> Config {
    let args = GlobalArgs {
        environment: "test".to_string(),
        rpc_url: Some(node.rpc_url.clone()),
        private_key: Some(node.private_key.clone()),
        etherscan_api_url: DEFAULT_ETHERSCAN_API_URL.to_string(),
        ledger_path,
        ledger_mode: LedgerMode::List,
        ..Default::default()
    };
    Config::from_cli(&args).expect("valid config")
}
