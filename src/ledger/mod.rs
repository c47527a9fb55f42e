//! Deployment ledger: the persisted address book of deployed contracts,
//! partitioned by environment and chain id.
//!
//! The backing store is a single JSON document that is read in full at task
//! start and rewritten in full on every update:
//!
//! ```json
//! {
//!   "dev":  { "11155111": [ { "name": "DrypProxy", "address": "0x..." } ] },
//!   "prod": { "11155111": { "Dryp": "0x..." } }
//! }
//! ```
//!
//! Each `(env, chain_id)` bucket has one of two shapes. A list bucket keeps an
//! ordered array of `{name, address}` records (used for proxy +
//! implementation pairs); a flat bucket keeps a plain `name -> address`
//! object. Both shapes may coexist in one document. The caller's
//! [`LedgerMode`] picks the shape of buckets the ledger creates; buckets that
//! already exist keep their shape and round-trip untouched.

mod flat;
mod list;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use flat::FlatBucket;
pub use list::{DeploymentEntry, ListBucket};

/// Default ledger location, relative to the working directory.
pub const DEFAULT_LEDGER_PATH: &str = "deployment/deployments.json";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ledger at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoding ledger for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Shape of the buckets a ledger creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LedgerMode {
    /// `name -> address` object per bucket.
    Flat,
    /// Ordered `[{name, address}]` array per bucket.
    #[default]
    List,
}

/// One `(env, chain_id)` bucket in whichever shape the document holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bucket {
    List(ListBucket),
    Flat(FlatBucket),
}

impl Bucket {
    fn empty(mode: LedgerMode) -> Self {
        match mode {
            LedgerMode::Flat => Bucket::Flat(FlatBucket::default()),
            LedgerMode::List => Bucket::List(ListBucket::default()),
        }
    }

    pub fn mode(&self) -> LedgerMode {
        match self {
            Bucket::Flat(_) => LedgerMode::Flat,
            Bucket::List(_) => LedgerMode::List,
        }
    }

    fn upsert(&mut self, name: &str, address: &str) {
        match self {
            Bucket::Flat(b) => b.upsert(name, address),
            Bucket::List(b) => b.upsert(name, address),
        }
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        match self {
            Bucket::Flat(b) => b.lookup(name),
            Bucket::List(b) => b.lookup(name),
        }
    }

    fn entries(&self) -> Vec<DeploymentEntry> {
        match self {
            Bucket::Flat(b) => b.entries(),
            Bucket::List(b) => b.entries().to_vec(),
        }
    }
}

type Buckets = BTreeMap<String, BTreeMap<String, Bucket>>;

/// An in-memory ledger document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    mode: LedgerMode,
    buckets: Buckets,
}

impl Ledger {
    /// An empty ledger that creates buckets of the given shape.
    pub fn empty(mode: LedgerMode) -> Self {
        Self {
            mode,
            buckets: Buckets::new(),
        }
    }

    /// Parse a ledger document; new buckets will use `mode`.
    pub fn from_json(mode: LedgerMode, json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            mode,
            buckets: serde_json::from_str(json)?,
        })
    }

    /// Serialize the whole ledger, pretty-printed.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.buckets)
    }

    /// Insert `name -> address` into the `(env, chain_id)` bucket, replacing
    /// an existing entry of the same name. An absent bucket is created in
    /// the ledger's mode; an existing one is written in its own shape.
    pub fn upsert(&mut self, env: &str, chain_id: &str, name: &str, address: &str) {
        let mode = self.mode;
        self.buckets
            .entry(env.to_string())
            .or_default()
            .entry(chain_id.to_string())
            .or_insert_with(|| Bucket::empty(mode))
            .upsert(name, address);
    }

    /// Address recorded under `name`, or `None` if it was never deployed.
    pub fn lookup(&self, env: &str, chain_id: &str, name: &str) -> Option<&str> {
        self.bucket(env, chain_id)?.lookup(name)
    }

    /// All records of one bucket, in storage order.
    pub fn entries(&self, env: &str, chain_id: &str) -> Vec<DeploymentEntry> {
        self.bucket(env, chain_id)
            .map(Bucket::entries)
            .unwrap_or_default()
    }

    pub fn bucket(&self, env: &str, chain_id: &str) -> Option<&Bucket> {
        self.buckets.get(env)?.get(chain_id)
    }
}

// ── Backing store ────────────────────────────────────────────────────

/// The on-disk ledger file together with the shape it is read as.
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    path: PathBuf,
    mode: LedgerMode,
}

impl DeploymentStore {
    pub fn new(path: impl Into<PathBuf>, mode: LedgerMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full ledger. A missing file is an empty ledger.
    pub fn load(&self) -> Result<Ledger, LedgerError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "ledger file absent, starting empty");
            return Ok(Ledger::empty(self.mode));
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|source| LedgerError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ledger::from_json(self.mode, &contents).map_err(|source| LedgerError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the backing file with `ledger`.
    pub fn persist(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        let json = ledger.to_json().map_err(|source| LedgerError::Encode {
            path: self.path.clone(),
            source,
        })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| LedgerError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, json).map_err(|source| LedgerError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "ledger written");
        Ok(())
    }

    /// Load the ledger and upsert one record into it. The updated ledger is
    /// returned unsaved; pass it to [`DeploymentStore::persist`].
    pub fn record(
        &self,
        env: &str,
        chain_id: &str,
        name: &str,
        address: &str,
    ) -> Result<Ledger, LedgerError> {
        let mut ledger = self.load()?;
        ledger.upsert(env, chain_id, name, address);
        Ok(ledger)
    }

    /// Load the ledger and look up one name.
    pub fn lookup(
        &self,
        env: &str,
        chain_id: &str,
        name: &str,
    ) -> Result<Option<String>, LedgerError> {
        Ok(self.load()?.lookup(env, chain_id, name).map(str::to_string))
    }
}
