//! Resource representations of the management API.
//!
//! The v2 resources (plans, roles) are fully typed. The v1 resources keep an
//! `extra` map alongside their known fields since the older API grew
//! attributes over time and the server echoes back whatever it stores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A deployment plan: the unit the v2 API plans and scales.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Roles currently associated with the plan.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Flat parameter list, role parameters use the `{role}-{version}::` prefix.
    #[serde(default)]
    pub parameters: Vec<PlanParameter>,
}

/// A single plan parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanParameter {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hidden: Option<bool>,
    #[serde(default)]
    pub parameter_type: Option<String>,
}

/// A deployment role that can be associated with plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Role {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Role {
    /// The `{name}-{version}` spelling used to prefix the role's parameters
    /// within a plan.
    pub fn spec_name(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

/// Body of a plan creation request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePlanBody {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single attribute change within a patch request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterValue {
    pub name: String,
    pub value: String,
}

/// Reference to another resource by id, used in v1 association fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkRef {
    pub id: i64,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A capacity figure attached to v1 racks and resource classes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capacity {
    pub name: String,
    pub value: String,
    pub unit: String,
}

/// A hardware rack (v1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rack {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subnet: Option<String>,
    #[serde(default)]
    pub slots: Option<i64>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub resource_class: Option<LinkRef>,
    #[serde(default)]
    pub capacities: Vec<Capacity>,
    #[serde(default)]
    pub nodes: Vec<LinkRef>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A grouping of racks with a shared service role (v1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceClass {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub racks: Vec<LinkRef>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A hardware flavor nested under a resource class (v1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Flavor {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub max_vms: Option<i64>,
    #[serde(default)]
    pub capacities: Vec<Capacity>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A deployed overcloud (v1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overcloud {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stack_id: Option<String>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub counts: Vec<OvercloudRoleCount>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A role an overcloud node can take (v1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OvercloudRole {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_name: Option<String>,
    #[serde(default)]
    pub flavor_id: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Requested node count for one overcloud role.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OvercloudRoleCount {
    pub overcloud_role_id: i64,
    pub num_nodes: i64,
}

/// A bare metal node (v1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    pub id: i64,
    #[serde(default)]
    pub rack: Option<LinkRef>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_spec_name_joins_name_and_version() {
        let role = Role {
            uuid: "r1".to_string(),
            name: "compute".to_string(),
            version: 2,
            description: None,
        };
        assert_eq!(role.spec_name(), "compute-2");
    }

    #[test]
    fn plan_parses_with_missing_collections() {
        let plan: Plan = serde_json::from_value(json!({
            "uuid": "p1",
            "name": "overcloud"
        }))
        .unwrap();
        assert!(plan.roles.is_empty());
        assert!(plan.parameters.is_empty());
    }

    #[test]
    fn rack_keeps_unknown_attributes() {
        let rack: Rack = serde_json::from_value(json!({
            "id": 1,
            "name": "compute-rack",
            "resource_class": { "id": 42 },
            "capacities": [{ "name": "total_cpu", "value": "64", "unit": "CPU" }],
            "location": "row 3"
        }))
        .unwrap();
        assert_eq!(rack.resource_class.as_ref().map(|rc| rc.id), Some(42));
        assert_eq!(rack.capacities[0].unit, "CPU");
        assert_eq!(rack.extra["location"], json!("row 3"));
    }
}
