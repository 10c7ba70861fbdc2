//! Environment-file (.env) loading.
//!
//! A `.env` file holds one `KEY=value` pair per line; the parsed pairs
//! are applied to the process-wide environment before any lifecycle
//! operation runs, so supervised commands inherit them. Absence of the
//! file is not an error.
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::SupervisorError;

/// Loads `KEY=value` pairs from `path`. Returns an empty map when the
/// file does not exist.
pub fn load(path: &Path) -> Result<HashMap<String, String>, SupervisorError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(HashMap::new());
        }
        Err(err) => return Err(err.into()),
    };

    let mut vars = HashMap::new();
    for raw_line in contents.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let mut value = value.trim();

            if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
                value = &value[1..value.len() - 1];
            }

            vars.insert(key.to_string(), value.to_string());
        } else {
            warn!("Ignoring malformed line in {}: {line}", path.display());
        }
    }

    Ok(vars)
}

/// Applies the pairs to this process's environment.
pub fn apply(vars: &HashMap<String, String>) {
    for (key, value) in vars {
        unsafe {
            env::set_var(key, value);
        }
    }
}
