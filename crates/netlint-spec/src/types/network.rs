use serde::{Deserialize, Serialize};

/// Root network configuration document (network-config.yaml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Network services managed from the delegated administrator account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub central_network_services: Option<CentralNetworkServicesConfig>,

    /// VPCs deployed to individual accounts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vpcs: Vec<VpcConfig>,

    /// VPC templates deployed across organizational units
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vpc_templates: Vec<VpcConfig>,
}

impl NetworkConfig {
    /// All declared Gateway Load Balancers, flattening the optional nesting.
    pub fn gateway_load_balancers(&self) -> &[GatewayLoadBalancerConfig] {
        self.central_network_services
            .as_ref()
            .map(|services| services.gateway_load_balancers.as_slice())
            .unwrap_or(&[])
    }
}

/// Centrally managed network services
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentralNetworkServicesConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gateway_load_balancers: Vec<GatewayLoadBalancerConfig>,
}

/// A declared Gateway Load Balancer deployment.
///
/// `vpc`, `subnets`, and `target_group` are string references resolved against
/// the network and customizations documents at validation time; nothing here
/// guarantees they exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayLoadBalancerConfig {
    /// Unique name within the gatewayLoadBalancers collection
    pub name: String,

    /// Name of the VPC the load balancer is deployed into
    pub vpc: String,

    /// Names of the subnets (within `vpc`) the load balancer attaches to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<String>,

    /// Service endpoints consuming this load balancer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<GwlbEndpointConfig>,

    /// Name of a target group declared in the customizations document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_group: Option<String>,
}

/// A Gateway Load Balancer endpoint, placed in a consumer account/VPC/subnet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GwlbEndpointConfig {
    pub name: String,
    /// Account reference into the accounts document
    pub account: String,
    /// VPC reference into the network document
    pub vpc: String,
    /// Subnet reference, resolved within `vpc`
    pub subnet: String,
}

/// A VPC or VPC template declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<SubnetConfig>,
}

/// A subnet within a VPC declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetConfig {
    pub name: String,
    pub availability_zone: String,
}
