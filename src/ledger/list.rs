use serde::{Deserialize, Serialize};

/// One named address inside a ledger bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentEntry {
    pub name: String,
    pub address: String,
}

/// Ordered `[{name, address}]` bucket.
///
/// Entry names are unique; an upsert of an existing name keeps the entry at
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListBucket {
    entries: Vec<DeploymentEntry>,
}

impl ListBucket {
    pub fn upsert(&mut self, name: &str, address: &str) {
        let entry = DeploymentEntry {
            name: name.to_string(),
            address: address.to_string(),
        };
        match self.entries.iter().position(|e| e.name == name) {
            Some(i) => self.entries[i] = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.address.as_str())
    }

    pub fn entries(&self) -> &[DeploymentEntry] {
        &self.entries
    }
}
