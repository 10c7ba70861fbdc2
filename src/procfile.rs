//! Procfile manifest parsing.
//!
//! The manifest is line-oriented: one `name: command arg…` entry per
//! line. Blank lines and `#` comments are skipped; anything else that
//! does not match the entry grammar is ignored with a warning.
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::warn;

use crate::error::SupervisorError;

/// One parsed manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Process name, unique within the manifest.
    pub name: String,
    /// Executable name or path.
    pub command: String,
    /// Ordered arguments.
    pub arguments: Vec<String>,
}

/// Parses manifest text into entries, preserving file order.
pub fn parse(contents: &str) -> Vec<ManifestEntry> {
    let entry = Regex::new(r"^([A-Za-z0-9_-]+):\s*(.+)$").unwrap();

    let mut entries = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(caps) = entry.captures(line) else {
            warn!("Ignoring malformed Procfile line: {line}");
            continue;
        };

        let mut words = caps[2].split_whitespace().map(str::to_string);
        let Some(command) = words.next() else {
            warn!("Ignoring Procfile entry with empty command: {line}");
            continue;
        };

        entries.push(ManifestEntry {
            name: caps[1].to_string(),
            command,
            arguments: words.collect(),
        });
    }

    entries
}

/// Reads and parses the manifest at `path`.
///
/// A missing manifest is fatal at startup; every verb needs the registry
/// it produces.
pub fn parse_file(path: &Path) -> Result<Vec<ManifestEntry>, SupervisorError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            SupervisorError::ProcfileMissing(path.to_path_buf())
        } else {
            SupervisorError::Io(err)
        }
    })?;

    Ok(parse(&contents))
}
