//! Process registry: the name-keyed map of descriptors built once per
//! invocation from the manifest.
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use tracing::debug;

use crate::error::SupervisorError;
use crate::procfile::{self, ManifestEntry};
use crate::process::Process;

/// Immutable mapping from process name to descriptor.
///
/// Backed by a `BTreeMap` so that iterating all entries (start-all,
/// stop-all, status) visits names in sorted order, keeping output and
/// side effects deterministic.
#[derive(Debug)]
pub struct Registry {
    processes: BTreeMap<String, Process>,
}

impl Registry {
    /// Builds a registry from parsed manifest entries, rooting every
    /// descriptor's paths at `root`.
    pub fn from_entries(root: &Path, entries: Vec<ManifestEntry>) -> Self {
        let mut processes = BTreeMap::new();
        for entry in entries {
            debug!("Registering '{}': {}", entry.name, entry.command);
            processes.insert(
                entry.name.clone(),
                Process::new(root, &entry.name, &entry.command, entry.arguments),
            );
        }

        Self { processes }
    }

    /// Loads the manifest at `path` and roots descriptors at the current
    /// working directory.
    pub fn load(path: &Path) -> Result<Self, SupervisorError> {
        let entries = procfile::parse_file(path)?;
        let root = env::current_dir()?;
        Ok(Self::from_entries(&root, entries))
    }

    /// Exact-match lookup by name.
    pub fn get(&self, name: &str) -> Result<&Process, SupervisorError> {
        self.processes
            .get(name)
            .ok_or_else(|| SupervisorError::UnknownProcess(name.to_string()))
    }

    /// All descriptors, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.values()
    }
}
