//! Node inventory records collected from Redfish

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;

/// Ethernet interface of a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EthernetInterface {
    /// URI of the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// MAC address of the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,

    /// IP address of the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// Name of the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description of the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether interface is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<String>,
}

/// Network adapter backing a network interface
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkAdapter {
    /// URI of the adapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Manufacturer of the adapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// Name of the adapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Model of the adapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Serial number of the adapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,

    /// Description of the adapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Network interface of a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkInterface {
    /// URI of the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Name of the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description of the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Adapter of the interface
    #[serde(default)]
    pub adapter: NetworkAdapter,
}

/// Hardware details of one node as reported by its BMC
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InventoryDetail {
    /// URI of the BMC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// UUID of Node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Manufacturer of the Node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// System type of the Node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_type: Option<String>,

    /// Name of the Node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Model of the Node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Serial number of the Node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,

    /// Version of the BIOS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bios_version: Option<String>,

    /// Ethernet interfaces of the Node
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ethernet_interfaces: Vec<EthernetInterface>,

    /// Network interfaces of the Node
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_interfaces: Vec<NetworkInterface>,

    /// Power state of the Node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_state: Option<String>,

    /// Processors of the Node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor_count: Option<u32>,

    /// Processor type of the Node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor_type: Option<String>,

    /// Total memory of the Node in Gigabytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_total: Option<f32>,

    /// Trusted modules of the Node
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trusted_modules: Vec<String>,

    /// Trusted components of the Chassis
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trusted_components: Vec<String>,

    /// SKU of the Chassis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_sku: Option<String>,

    /// Serial number of the Chassis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_serial: Option<String>,

    /// Asset tag of the Chassis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_asset_tag: Option<String>,

    /// Manufacturer of the Chassis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_manufacturer: Option<String>,

    /// Model of the Chassis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_model: Option<String>,
}

/// Inventory submission: an envelope header plus node details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InventoryRequest {
    /// Schema header
    pub header: Envelope,

    /// Details of every inventoried node
    pub inventory_detail_array: Vec<InventoryDetail>,
}
