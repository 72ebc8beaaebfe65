use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::types::accounts::AccountsConfig;
use crate::types::customizations::CustomizationsConfig;
use crate::types::network::NetworkConfig;

/// Well-known file names within a configuration directory
pub const NETWORK_CONFIG_FILE: &str = "network-config.yaml";
pub const ACCOUNTS_CONFIG_FILE: &str = "accounts-config.yaml";
pub const CUSTOMIZATIONS_CONFIG_FILE: &str = "customizations-config.yaml";

/// The network and accounts documents loaded from one configuration directory.
///
/// The customizations document is deliberately not part of this struct: the
/// validator loads it by path on demand, only when a load balancer references
/// a target group.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Configuration directory the documents were read from
    pub dir: PathBuf,
    pub network: NetworkConfig,
    pub accounts: AccountsConfig,
}

/// Load the network and accounts documents from a configuration directory.
pub fn load_config(dir: &Path) -> Result<LoadedConfig, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirNotFound(
            dir.to_string_lossy().into_owned(),
        ));
    }

    Ok(LoadedConfig {
        dir: dir.to_path_buf(),
        network: load_network_config(dir)?,
        accounts: load_accounts_config(dir)?,
    })
}

/// Load and parse network-config.yaml
pub fn load_network_config(dir: &Path) -> Result<NetworkConfig, LoadError> {
    load_file(dir, NETWORK_CONFIG_FILE)
}

/// Load and parse accounts-config.yaml
pub fn load_accounts_config(dir: &Path) -> Result<AccountsConfig, LoadError> {
    load_file(dir, ACCOUNTS_CONFIG_FILE)
}

/// Load and parse customizations-config.yaml
pub fn load_customizations_config(dir: &Path) -> Result<CustomizationsConfig, LoadError> {
    load_file(dir, CUSTOMIZATIONS_CONFIG_FILE)
}

fn load_file<T: DeserializeOwned>(dir: &Path, file: &'static str) -> Result<T, LoadError> {
    let path = dir.join(file);
    if !path.is_file() {
        return Err(LoadError::ConfigNotFound(
            file,
            path.to_string_lossy().into_owned(),
        ));
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| LoadError::Io(file.to_string(), e))?;

    serde_yaml::from_str(&content).map_err(|e| LoadError::Parse(file.to_string(), e))
}

/// Errors that prevent a configuration document from being loaded at all.
///
/// These are fatal by design: the validation rules only ever see documents
/// that parsed, and report findings as accumulated strings instead.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Configuration directory not found: {0}")]
    DirNotFound(String),

    #[error("{0} not found: {1}")]
    ConfigNotFound(&'static str, String),

    #[error("I/O error reading {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Failed to parse {0}: {1}")]
    Parse(String, #[source] serde_yaml::Error),
}
