//! Hardhat compilation artifacts: deploy bytecode plus the build-info needed
//! for explorer verification.

use std::path::{Path, PathBuf};

use alloy::primitives::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::constants::ERC1967_PROXY_ARTIFACT;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("reading artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing artifact {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {} has no deployable bytecode", path.display())]
    EmptyBytecode { path: PathBuf },
}

/// A compiled contract as written by `hardhat compile`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub source_name: String,
    pub bytecode: Bytes,
    #[serde(skip)]
    path: PathBuf,
}

impl Artifact {
    /// Fully qualified name, `<sourceName>:<contractName>`.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }
}

/// Compiler input and version recorded for one compilation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub solc_long_version: String,
    /// Standard-JSON compiler input.
    pub input: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DebugFile {
    build_info: String,
}

/// The hardhat artifacts directory.
#[derive(Debug, Clone)]
pub struct Artifacts {
    root: PathBuf,
}

impl Artifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Artifact of a project contract, `contracts/<name>.sol/<name>.json`.
    pub fn contract(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self
            .root
            .join("contracts")
            .join(format!("{name}.sol"))
            .join(format!("{name}.json"));
        load_artifact(path)
    }

    /// The OpenZeppelin `ERC1967Proxy` artifact.
    pub fn erc1967_proxy(&self) -> Result<Artifact, ArtifactError> {
        load_artifact(self.root.join(ERC1967_PROXY_ARTIFACT))
    }

    /// Build-info referenced by the artifact's `.dbg.json` sidecar.
    pub fn build_info(&self, artifact: &Artifact) -> Result<BuildInfo, ArtifactError> {
        let dbg_path = artifact.path.with_extension("dbg.json");
        let dbg: DebugFile = read_json(&dbg_path)?;
        let dir = dbg_path.parent().unwrap_or(Path::new("."));
        read_json(&dir.join(dbg.build_info))
    }
}

fn load_artifact(path: PathBuf) -> Result<Artifact, ArtifactError> {
    let mut artifact: Artifact = read_json(&path)?;
    if artifact.bytecode.is_empty() {
        return Err(ArtifactError::EmptyBytecode { path });
    }
    artifact.path = path;
    Ok(artifact)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
