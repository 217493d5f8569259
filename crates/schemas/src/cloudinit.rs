//! cloud-init instance data
//!
//! The `v1` document served to nodes by the cloud-init metadata service.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::xname::NodeXname;

/// Extra metadata contributed by each group a node belongs to, keyed by group name
pub type GroupsMetaData = BTreeMap<String, serde_json::Value>;

/// Instance metadata of one node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InstanceV1 {
    /// The region in which the datacenter is located
    pub region: String,

    /// The datacenter the instance is in
    pub data_center: String,

    /// The name of the system the instance belongs to, which may span datacenters and regions
    pub system_name: String,

    /// The failure domain of the instance, e.g. "cooling group", "rack", "row" or "datacenter"
    pub failure_domain: String,

    /// The cloud provider the instance is in (e.g. AWS, GCP, Azure, LANL, CSCS)
    pub cloud_name: String,

    /// Unique but not stable instance ID; preserved across reboots
    pub instance_id: String,

    /// Identifier of the root image
    pub root_image_id: String,

    /// Distribution of the root image
    #[serde(rename = "distro")]
    pub root_image_distro: String,

    /// Distribution release of the root image
    #[serde(rename = "distro_release")]
    pub root_image_distro_release: String,

    /// Distribution version of the root image
    #[serde(rename = "distro_version")]
    pub root_image_distro_version: String,

    /// Text description of the kind of machine, e.g. "x86_64 dual socket HBM2"
    pub machine: String,

    /// Physical location of the instance within the datacenter; an xname on CSM systems
    pub location: String,

    /// Metadata contributed by each group the node is a member of
    #[serde(rename = "groups_metadata")]
    pub groups_metadata: GroupsMetaData,
}

impl InstanceV1 {
    /// The location read as a node xname; `None` unless it is a valid one
    pub fn location_xname(&self) -> Option<NodeXname> {
        let xname = NodeXname::new(self.location.as_str());
        xname.is_valid().then_some(xname)
    }
}

/// Top-level instance-data document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Version 1 instance data
    pub v1: InstanceV1,
}
