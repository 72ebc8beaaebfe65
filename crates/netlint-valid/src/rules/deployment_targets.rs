use netlint_spec::query::ConfigQuery;
use netlint_spec::types::network::NetworkConfig;

/// Check that every endpoint's deployment target account is declared in the
/// accounts document. Runs over every load balancer before any other rule.
pub fn check(network: &NetworkConfig, query: &dyn ConfigQuery, errors: &mut Vec<String>) {
    for gwlb in network.gateway_load_balancers() {
        for endpoint in &gwlb.endpoints {
            if !query.account_exists(&endpoint.account) {
                errors.push(format!(
                    "[Gateway Load Balancer {} endpoint {}]: account {} not found in accounts config",
                    gwlb.name, endpoint.name, endpoint.account
                ));
            }
        }
    }
}
