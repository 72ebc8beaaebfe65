use netlint_spec::query::ConfigQuery;
use netlint_spec::types::network::{GatewayLoadBalancerConfig, VpcConfig};

/// Check that a load balancer's VPC and attached subnets exist, and that the
/// attached subnets span pairwise-distinct availability zones.
///
/// When the VPC does not resolve, subnet validation is skipped for this load
/// balancer; endpoint and target-group rules still run independently.
pub fn check(gwlb: &GatewayLoadBalancerConfig, query: &dyn ConfigQuery, errors: &mut Vec<String>) {
    let Some(vpc) = query.vpc(&gwlb.vpc) else {
        errors.push(format!(
            "[Gateway Load Balancer {}]: VPC {} does not exist",
            gwlb.name, gwlb.vpc
        ));
        return;
    };

    check_subnets(gwlb, vpc, query, errors);
}

fn check_subnets(
    gwlb: &GatewayLoadBalancerConfig,
    vpc: &VpcConfig,
    query: &dyn ConfigQuery,
    errors: &mut Vec<String>,
) {
    let mut resolved = Vec::with_capacity(gwlb.subnets.len());
    for subnet in &gwlb.subnets {
        match query.subnet(vpc, subnet) {
            Some(subnet) => resolved.push(subnet),
            None => errors.push(format!(
                "[Gateway Load Balancer {}]: subnet {} does not exist in VPC {}",
                gwlb.name, subnet, gwlb.vpc
            )),
        }
    }

    // An incomplete subnet list would make a duplicate-AZ report misleading,
    // so the check only runs once every declared subnet resolved.
    if resolved.len() == gwlb.subnets.len() {
        let azs: Vec<String> = resolved
            .iter()
            .map(|subnet| subnet.availability_zone.clone())
            .collect();
        if query.has_duplicates(&azs) {
            errors.push(format!(
                "[Gateway Load Balancer {}]: targeted subnets reside in duplicate \
                 availability zones. AZs targeted: {}",
                gwlb.name,
                azs.join(",")
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlint_spec::query::ConfigLookup;
    use netlint_spec::types::accounts::AccountsConfig;
    use netlint_spec::types::network::NetworkConfig;

    fn network(subnet_azs: &[(&str, &str)]) -> NetworkConfig {
        if subnet_azs.is_empty() {
            return serde_yaml::from_str("vpcs:\n  - name: Inspection-Vpc").unwrap();
        }
        let subnets = subnet_azs
            .iter()
            .map(|(name, az)| format!("      - name: {name}\n        availabilityZone: {az}"))
            .collect::<Vec<_>>()
            .join("\n");
        serde_yaml::from_str(&format!(
            "vpcs:\n  - name: Inspection-Vpc\n    subnets:\n{subnets}"
        ))
        .unwrap()
    }

    fn gwlb(subnets: &[&str]) -> GatewayLoadBalancerConfig {
        GatewayLoadBalancerConfig {
            name: "gwlb-1".to_string(),
            vpc: "Inspection-Vpc".to_string(),
            subnets: subnets.iter().map(|s| s.to_string()).collect(),
            endpoints: Vec::new(),
            target_group: None,
        }
    }

    #[test]
    fn test_missing_vpc() {
        let network = network(&[]);
        let accounts = AccountsConfig::default();
        let lookup = ConfigLookup::new(&network, &accounts);

        let mut gwlb = gwlb(&["Subnet-A"]);
        gwlb.vpc = "Vpc-A".to_string();

        let mut errors = Vec::new();
        check(&gwlb, &lookup, &mut errors);
        assert_eq!(
            errors,
            vec!["[Gateway Load Balancer gwlb-1]: VPC Vpc-A does not exist".to_string()]
        );
    }

    #[test]
    fn test_missing_subnet() {
        let network = network(&[("Subnet-A", "us-east-1a")]);
        let accounts = AccountsConfig::default();
        let lookup = ConfigLookup::new(&network, &accounts);

        let mut errors = Vec::new();
        check(&gwlb(&["Subnet-A", "Subnet-X"]), &lookup, &mut errors);
        assert_eq!(
            errors,
            vec![
                "[Gateway Load Balancer gwlb-1]: subnet Subnet-X does not exist \
                 in VPC Inspection-Vpc"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_duplicate_azs_reported_with_full_list() {
        let network = network(&[("s1", "us-east-1a"), ("s2", "us-east-1a")]);
        let accounts = AccountsConfig::default();
        let lookup = ConfigLookup::new(&network, &accounts);

        let mut errors = Vec::new();
        check(&gwlb(&["s1", "s2"]), &lookup, &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].ends_with("AZs targeted: us-east-1a,us-east-1a"));
    }

    #[test]
    fn test_az_check_suppressed_when_any_subnet_unresolved() {
        // s1 and s2 share an AZ, but s3 is missing; the duplicate-AZ report
        // must be suppressed.
        let network = network(&[("s1", "us-east-1a"), ("s2", "us-east-1a")]);
        let accounts = AccountsConfig::default();
        let lookup = ConfigLookup::new(&network, &accounts);

        let mut errors = Vec::new();
        check(&gwlb(&["s1", "s2", "s3"]), &lookup, &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("subnet s3 does not exist"));
    }

    #[test]
    fn test_distinct_azs_pass() {
        let network = network(&[("s1", "us-east-1a"), ("s2", "us-east-1b")]);
        let accounts = AccountsConfig::default();
        let lookup = ConfigLookup::new(&network, &accounts);

        let mut errors = Vec::new();
        check(&gwlb(&["s1", "s2"]), &lookup, &mut errors);
        assert!(errors.is_empty());
    }
}
