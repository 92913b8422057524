//! `KEY=VALUE` configuration file parsing
//!
//! The value of a key is the text after the first `=` on its line. dotenvy's
//! iterator API runs over the same text so quoted values lose their quotes,
//! but whenever dotenvy would change a value in any other way (variable
//! expansion, inline comments) or rejects the line outright, the raw remainder
//! is kept and a warning is logged. Nothing leaks into the process environment.
//!
//! ## Rules
//! - The first occurrence of a key wins; later duplicates are ignored.
//! - Lines without `=` and comment lines are skipped, they never abort loading.
//! - Values of keys that look sensitive are never logged in clear.

use std::collections::HashMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::{SharedError, SharedResult};
use crate::redact::{display_value, is_sensitive_key, REDACTED};

/// Parsed configuration record
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl EnvFile {
    /// Load and parse the file at `path`
    pub fn load(path: impl AsRef<Path>) -> SharedResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
        Ok(Self::parse(path, &content))
    }

    /// Parse configuration from any reader, labelling it with `path` for diagnostics
    pub fn from_reader<R: Read>(path: impl AsRef<Path>, mut reader: R) -> SharedResult<Self> {
        let path = path.as_ref();
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(|e| read_error(path, e))?;
        Ok(Self::parse(path, &content))
    }

    fn parse(path: &Path, content: &str) -> Self {
        let mut dotenv_values: HashMap<String, String> = HashMap::new();
        for item in dotenvy::from_read_iter(content.as_bytes()) {
            match item {
                Ok((key, value)) => {
                    dotenv_values.entry(key).or_insert(value);
                }
                Err(dotenvy::Error::LineParse(line, index)) => {
                    let shown = if is_sensitive_key(&line) { REDACTED } else { line.as_str() };
                    debug!(path = %path.display(), index, "dotenv parser rejected line: {}", shown);
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "dotenv parser error");
                }
            }
        }

        let mut entries = HashMap::new();
        for (key, raw) in raw_entries(content) {
            if entries.contains_key(&key) {
                debug!(key = %key, "Ignoring duplicate config entry");
                continue;
            }

            let value = match dotenv_values.get(&key) {
                Some(parsed) if agrees(raw, parsed) => parsed.clone(),
                Some(_) => {
                    warn!(path = %path.display(), key = %key, "dotenv parsing altered the value, keeping the text after '='");
                    raw.to_string()
                }
                None => {
                    warn!(path = %path.display(), key = %key, "dotenv parser rejected the line, keeping the text after '='");
                    raw.to_string()
                }
            };

            debug!(key = %key, value = %display_value(&key, &value), "Loaded config entry");
            entries.insert(key, value);
        }

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path the record was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_error(path: &Path, err: io::Error) -> SharedError {
    if err.kind() == io::ErrorKind::NotFound {
        SharedError::ConfigFileMissing {
            path: path.display().to_string(),
        }
    } else {
        SharedError::ConfigRead {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// `(key, text after the first '=')` for every assignment line, in file order
fn raw_entries(content: &str) -> Vec<(String, &str)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").map(str::trim_start).unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_string(), value.trim()))
        })
        .collect()
}

/// dotenvy's value is accepted when it equals the raw text or only drops its quotes
fn agrees(raw: &str, parsed: &str) -> bool {
    if raw == parsed {
        return true;
    }
    ['"', '\'']
        .iter()
        .any(|q| raw.len() >= 2 && raw.starts_with(*q) && raw.ends_with(*q) && &raw[1..raw.len() - 1] == parsed)
}
