pub mod deployment_targets;
pub mod endpoints;
pub mod target_groups;
pub mod vpc_subnets;
