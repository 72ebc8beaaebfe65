use serde::{Deserialize, Serialize};

/// Account registry document (accounts-config.yaml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mandatory_accounts: Vec<AccountConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workload_accounts: Vec<AccountConfig>,
}

impl AccountsConfig {
    /// Iterate mandatory and workload accounts in declaration order
    pub fn all_accounts(&self) -> impl Iterator<Item = &AccountConfig> {
        self.mandatory_accounts
            .iter()
            .chain(self.workload_accounts.iter())
    }

    /// Whether an account with this name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.all_accounts().any(|account| account.name == name)
    }
}

/// A single declared deployment account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountConfig {
    pub name: String,
    pub email: String,
    pub organizational_unit: String,
}
