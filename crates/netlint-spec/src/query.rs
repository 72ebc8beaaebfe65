use std::collections::HashSet;

use crate::types::accounts::AccountsConfig;
use crate::types::network::{NetworkConfig, SubnetConfig, VpcConfig};

/// Read-only resolution over the loaded configuration documents.
///
/// Validation rules depend on this trait rather than on the document structs
/// directly, so the rule engine stays decoupled from how the surrounding
/// documents are held in memory. Every lookup returns an `Option`; handling
/// the not-found path is the caller's job.
pub trait ConfigQuery {
    /// Whether an account with this name is declared in the accounts document
    fn account_exists(&self, name: &str) -> bool;

    /// Resolve a VPC or VPC template by name
    fn vpc(&self, name: &str) -> Option<&VpcConfig>;

    /// Resolve a subnet by name within an already-resolved VPC
    fn subnet<'v>(&self, vpc: &'v VpcConfig, name: &str) -> Option<&'v SubnetConfig>;

    /// Whether the sequence contains any repeated value
    fn has_duplicates(&self, values: &[String]) -> bool {
        let mut seen = HashSet::with_capacity(values.len());
        values.iter().any(|value| !seen.insert(value.as_str()))
    }
}

/// `ConfigQuery` implementation borrowing the network and accounts documents.
#[derive(Debug, Clone, Copy)]
pub struct ConfigLookup<'a> {
    network: &'a NetworkConfig,
    accounts: &'a AccountsConfig,
}

impl<'a> ConfigLookup<'a> {
    pub fn new(network: &'a NetworkConfig, accounts: &'a AccountsConfig) -> Self {
        Self { network, accounts }
    }
}

impl ConfigQuery for ConfigLookup<'_> {
    fn account_exists(&self, name: &str) -> bool {
        self.accounts.contains(name)
    }

    fn vpc(&self, name: &str) -> Option<&VpcConfig> {
        self.network
            .vpcs
            .iter()
            .chain(self.network.vpc_templates.iter())
            .find(|vpc| vpc.name == name)
    }

    fn subnet<'v>(&self, vpc: &'v VpcConfig, name: &str) -> Option<&'v SubnetConfig> {
        vpc.subnets.iter().find(|subnet| subnet.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::accounts::AccountConfig;

    fn network() -> NetworkConfig {
        serde_yaml::from_str(
            r#"
vpcs:
  - name: Inspection-Vpc
    subnets:
      - name: Subnet-A
        availabilityZone: us-east-1a
vpcTemplates:
  - name: Workload-Vpc
    subnets:
      - name: Subnet-W
        availabilityZone: us-east-1b
"#,
        )
        .unwrap()
    }

    fn accounts() -> AccountsConfig {
        AccountsConfig {
            mandatory_accounts: vec![AccountConfig {
                name: "Network".to_string(),
                email: "network@example.com".to_string(),
                organizational_unit: "Infrastructure".to_string(),
            }],
            workload_accounts: Vec::new(),
        }
    }

    #[test]
    fn test_vpc_lookup_searches_vpcs_then_templates() {
        let network = network();
        let accounts = accounts();
        let lookup = ConfigLookup::new(&network, &accounts);

        assert!(lookup.vpc("Inspection-Vpc").is_some());
        assert!(lookup.vpc("Workload-Vpc").is_some());
        assert!(lookup.vpc("Missing-Vpc").is_none());
    }

    #[test]
    fn test_subnet_lookup_scoped_to_vpc() {
        let network = network();
        let accounts = accounts();
        let lookup = ConfigLookup::new(&network, &accounts);

        let inspection = lookup.vpc("Inspection-Vpc").unwrap();
        assert!(lookup.subnet(inspection, "Subnet-A").is_some());
        // Subnet-W exists, but in a different VPC
        assert!(lookup.subnet(inspection, "Subnet-W").is_none());
    }

    #[test]
    fn test_account_exists() {
        let network = network();
        let accounts = accounts();
        let lookup = ConfigLookup::new(&network, &accounts);

        assert!(lookup.account_exists("Network"));
        assert!(!lookup.account_exists("999999999999"));
    }

    #[test]
    fn test_has_duplicates() {
        let network = network();
        let accounts = accounts();
        let lookup = ConfigLookup::new(&network, &accounts);

        let distinct = vec!["us-east-1a".to_string(), "us-east-1b".to_string()];
        let repeated = vec!["us-east-1a".to_string(), "us-east-1a".to_string()];
        assert!(!lookup.has_duplicates(&distinct));
        assert!(lookup.has_duplicates(&repeated));
        assert!(!lookup.has_duplicates(&[]));
    }
}
