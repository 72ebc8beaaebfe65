use netlint_spec::types::customizations::{CustomizationsConfig, TargetGroupItemConfig};
use netlint_spec::types::network::GatewayLoadBalancerConfig;

/// GENEVE listener port; the only port a Gateway Load Balancer supports
pub const GWLB_PORT: u16 = 6081;
/// The only protocol a Gateway Load Balancer target group supports
pub const GWLB_PROTOCOL: &str = "GENEVE";

/// Check a load balancer's target group reference against the customizations
/// document: the group must exist, be pinned to GENEVE on port 6081, and its
/// resolved targets must live in the load balancer's VPC.
pub fn check(
    gwlb: &GatewayLoadBalancerConfig,
    customizations: &CustomizationsConfig,
    errors: &mut Vec<String>,
) {
    let Some(target_group_name) = gwlb.target_group.as_deref() else {
        return;
    };

    let Some(target_group) = customizations.target_group(target_group_name) else {
        errors.push(format!(
            "[Gateway Load Balancer {}]: target group {} not found in customizations config",
            gwlb.name, target_group_name
        ));
        return;
    };

    check_protocol_and_port(gwlb, target_group, errors);

    match target_group.targets.as_deref() {
        // Instance-to-VPC consistency among the remaining explicit targets is
        // the customizations document's own validation; only the first target
        // is checked here.
        Some([first, ..]) => check_instance_target(gwlb, first, customizations, errors),
        _ => check_asg_target(gwlb, target_group, customizations, errors),
    }
}

fn check_protocol_and_port(
    gwlb: &GatewayLoadBalancerConfig,
    target_group: &TargetGroupItemConfig,
    errors: &mut Vec<String>,
) {
    if target_group.port != GWLB_PORT {
        errors.push(format!(
            "[Gateway Load Balancer {}]: target group {}: only port 6081 is supported",
            gwlb.name, target_group.name
        ));
    }
    if target_group.protocol != GWLB_PROTOCOL {
        errors.push(format!(
            "[Gateway Load Balancer {}]: target group {}: only GENEVE protocol is supported",
            gwlb.name, target_group.name
        ));
    }
}

fn check_instance_target(
    gwlb: &GatewayLoadBalancerConfig,
    target: &str,
    customizations: &CustomizationsConfig,
    errors: &mut Vec<String>,
) {
    let Some(instance) = customizations
        .firewall_instances()
        .iter()
        .find(|instance| instance.name == target)
    else {
        errors.push(format!(
            "[Gateway Load Balancer {}]: firewall instance {} not found",
            gwlb.name, target
        ));
        return;
    };

    if instance.vpc != gwlb.vpc {
        errors.push(vpc_mismatch(gwlb));
    }
}

fn check_asg_target(
    gwlb: &GatewayLoadBalancerConfig,
    target_group: &TargetGroupItemConfig,
    customizations: &CustomizationsConfig,
    errors: &mut Vec<String>,
) {
    // An ASG backs this target group when its own first binding names it.
    let asg = customizations.autoscaling_groups().iter().find(|asg| {
        asg.autoscaling
            .target_groups
            .as_ref()
            .and_then(|bindings| bindings.first())
            .is_some_and(|first| first == &target_group.name)
    });

    let Some(asg) = asg else {
        errors.push(format!(
            "[Gateway Load Balancer {}]: firewall ASG for target group {} not found",
            gwlb.name, target_group.name
        ));
        return;
    };

    if asg.vpc != gwlb.vpc {
        errors.push(vpc_mismatch(gwlb));
    }
}

fn vpc_mismatch(gwlb: &GatewayLoadBalancerConfig) -> String {
    format!(
        "[Gateway Load Balancer {}]: targets do not exist in the same VPC as the load balancer",
        gwlb.name
    )
}
