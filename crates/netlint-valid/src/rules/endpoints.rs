use netlint_spec::query::ConfigQuery;
use netlint_spec::types::network::GatewayLoadBalancerConfig;

/// Check that every endpoint's VPC exists and that its subnet exists within
/// that VPC. The subnet lookup needs a resolved VPC, so an unresolved VPC
/// skips the subnet check for that endpoint only.
pub fn check(gwlb: &GatewayLoadBalancerConfig, query: &dyn ConfigQuery, errors: &mut Vec<String>) {
    for endpoint in &gwlb.endpoints {
        match query.vpc(&endpoint.vpc) {
            None => errors.push(format!(
                "[Gateway Load Balancer {} endpoint {}]: VPC {} does not exist",
                gwlb.name, endpoint.name, endpoint.vpc
            )),
            Some(vpc) => {
                if query.subnet(vpc, &endpoint.subnet).is_none() {
                    errors.push(format!(
                        "[Gateway Load Balancer {} endpoint {}]: subnet {} does not exist in VPC {}",
                        gwlb.name, endpoint.name, endpoint.subnet, endpoint.vpc
                    ));
                }
            }
        }
    }
}
