use std::path::Path;

use netlint_spec::loader::{self, LoadError};
use netlint_spec::query::ConfigQuery;
use netlint_spec::types::network::NetworkConfig;

use crate::rules;

/// Validate Gateway Load Balancer cross-references against the peer documents.
///
/// Runs every rule over every declared load balancer in a fixed order and
/// appends all findings to `errors`; a finding never short-circuits the rest
/// of the run. The `Err` variant is reserved for a customizations document
/// that cannot be loaded at all, which the rule engine treats as fatal.
///
/// The customizations document is loaded fresh from `config_dir` for every
/// load balancer that references a target group; no caching.
pub fn validate(
    network: &NetworkConfig,
    config_dir: &Path,
    query: &dyn ConfigQuery,
    errors: &mut Vec<String>,
) -> Result<(), LoadError> {
    rules::deployment_targets::check(network, query, errors);

    for gwlb in network.gateway_load_balancers() {
        rules::vpc_subnets::check(gwlb, query, errors);
        rules::endpoints::check(gwlb, query, errors);

        if gwlb.target_group.is_some() {
            let customizations = loader::load_customizations_config(config_dir)?;
            rules::target_groups::check(gwlb, &customizations, errors);
        }
    }

    Ok(())
}
