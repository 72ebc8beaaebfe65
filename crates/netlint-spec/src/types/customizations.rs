use serde::{Deserialize, Serialize};

/// Customizations document (customizations-config.yaml)
///
/// Declares the firewall fleet a Gateway Load Balancer forwards traffic to.
/// Every collection is optional; an absent collection reads the same as an
/// empty one through the accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewalls: Option<Ec2FirewallConfig>,
}

impl CustomizationsConfig {
    /// Resolve a target group by name
    pub fn target_group(&self, name: &str) -> Option<&TargetGroupItemConfig> {
        self.firewalls
            .as_ref()
            .and_then(|firewalls| firewalls.target_groups.as_deref())
            .and_then(|groups| groups.iter().find(|group| group.name == name))
    }

    /// Declared firewall instances, or empty when the collection is absent
    pub fn firewall_instances(&self) -> &[Ec2FirewallInstanceConfig] {
        self.firewalls
            .as_ref()
            .and_then(|firewalls| firewalls.instances.as_deref())
            .unwrap_or(&[])
    }

    /// Declared firewall auto-scaling groups, or empty when absent
    pub fn autoscaling_groups(&self) -> &[Ec2FirewallAutoScalingGroupConfig] {
        self.firewalls
            .as_ref()
            .and_then(|firewalls| firewalls.autoscaling_groups.as_deref())
            .unwrap_or(&[])
    }
}

/// EC2 firewall declarations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ec2FirewallConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<Ec2FirewallInstanceConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscaling_groups: Option<Vec<Ec2FirewallAutoScalingGroupConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_groups: Option<Vec<TargetGroupItemConfig>>,
}

/// A standalone firewall instance, a candidate target of a target group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ec2FirewallInstanceConfig {
    pub name: String,
    pub vpc: String,
}

/// A firewall auto-scaling group, the alternative candidate target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ec2FirewallAutoScalingGroupConfig {
    pub name: String,
    pub vpc: String,
    pub autoscaling: AutoScalingConfig,
}

/// Auto-scaling settings; only the target-group bindings matter here
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScalingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_groups: Option<Vec<String>>,
}

/// A declared target group. `targets` lists firewall instance names; when it
/// is absent or empty the group is assumed to be ASG-backed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetGroupItemConfig {
    pub name: String,
    pub port: u16,
    pub protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}
