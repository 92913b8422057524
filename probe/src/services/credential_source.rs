//! Configuration-file backed credential source
//!
//! The credential is read from a `KEY=VALUE` file on every call. The file is
//! parsed into a full mapping first and the credential key is looked up in it.
//! A blank value counts as missing.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::EnvFile;
use tracing::debug;

use crate::error::{ProbeError, ProbeResult};
use crate::traits::CredentialSource;
use crate::types::ApiKey;

/// Reads the credential from an env-style configuration file
pub struct EnvFileCredentialSource {
    path: PathBuf,
    key_name: String,
}

impl EnvFileCredentialSource {
    pub fn new(path: impl Into<PathBuf>, key_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key_name: key_name.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }
}

#[async_trait]
impl CredentialSource for EnvFileCredentialSource {
    async fn load_credential(&self) -> ProbeResult<ApiKey> {
        let env = EnvFile::load(&self.path)?;
        debug!(path = %self.path.display(), entries = env.len(), "Parsed configuration file");

        env.get(&self.key_name)
            .and_then(ApiKey::new)
            .ok_or_else(|| ProbeError::KeyMissing {
                key: self.key_name.clone(),
                path: self.path.display().to_string(),
            })
    }
}
