use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::DeploymentEntry;

/// `{name: address}` bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatBucket {
    addresses: BTreeMap<String, String>,
}

impl FlatBucket {
    pub fn upsert(&mut self, name: &str, address: &str) {
        self.addresses.insert(name.to_string(), address.to_string());
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.addresses.get(name).map(String::as_str)
    }

    pub fn entries(&self) -> Vec<DeploymentEntry> {
        self.addresses
            .iter()
            .map(|(name, address)| DeploymentEntry {
                name: name.clone(),
                address: address.clone(),
            })
            .collect()
    }
}
