//! CSM component records and vocabularies

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::descriptor::schema_enum;
use crate::xname::NodeXname;

/// A component known to the hardware state manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Component {
    /// Unique identifier of the component record
    #[serde(rename = "UID", default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uuid>,

    /// Xname
    #[serde(rename = "ID")]
    pub id: String,

    /// Component type category
    #[serde(rename = "Type")]
    pub component_type: ComponentType,

    /// Free-form subtype
    #[serde(rename = "Subtype", default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,

    /// Role of the component
    #[serde(rename = "Role", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ComponentRole>,

    /// Sub-role of the component
    #[serde(rename = "SubRole", default, skip_serializing_if = "Option::is_none")]
    pub sub_role: Option<ComponentSubRole>,

    /// Network type
    #[serde(rename = "NetType", default, skip_serializing_if = "Option::is_none")]
    pub net_type: Option<ComponentNetType>,

    /// Architecture
    #[serde(rename = "Arch", default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<ComponentArch>,

    /// Hardware class
    #[serde(rename = "Class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ComponentClass>,

    /// Current state
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ComponentState>,

    /// Current flag
    #[serde(rename = "Flag", default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<ComponentFlag>,

    /// Whether the component is enabled
    #[serde(rename = "Enabled", default, skip_serializing_if = "is_false")]
    pub enabled: bool,

    /// Software status reported by the component
    #[serde(rename = "SoftwareStatus", default, skip_serializing_if = "Option::is_none")]
    pub sw_status: Option<String>,

    /// Node ID
    #[serde(rename = "NID", default, skip_serializing_if = "Option::is_none")]
    pub nid: Option<i64>,

    /// Whether reservations are disabled for the component
    #[serde(rename = "ReservationDisabled", default, skip_serializing_if = "is_false")]
    pub reservation_disabled: bool,

    /// Whether the component is locked
    #[serde(rename = "Locked", default, skip_serializing_if = "is_false")]
    pub locked: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "signature required by serde skip_serializing_if")]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

impl Component {
    /// Component of the given type at `id`, all optional fields unset
    pub fn new(id: impl Into<String>, component_type: ComponentType) -> Self {
        Self {
            uid: None,
            id: id.into(),
            component_type,
            subtype: None,
            role: None,
            sub_role: None,
            net_type: None,
            arch: None,
            class: None,
            state: None,
            flag: None,
            enabled: false,
            sw_status: None,
            nid: None,
            reservation_disabled: false,
            locked: false,
        }
    }

    /// The `ID` field as a node xname
    pub fn xname(&self) -> NodeXname {
        NodeXname::new(self.id.as_str())
    }
}

schema_enum! {
    /// CSM component type category
    pub enum ComponentType : "This is the CSM component type category.  It has a particular xname format and represents the kind of component that can occupy that location.  Not to be confused with RedfishType which is Redfish specific and only used when providing Redfish endpoint data from discovery." {
        Cdu => "CDU",
        CabinetCdu => "CabinetCDU",
        CabinetPdu => "CabinetPDU",
        CabinetPduOutlet => "CabinetPDUOutlet",
        CabinetPduPowerConnector => "CabinetPDUPowerConnector",
        CabinetPduController => "CabinetPDUController",
        Cabinet => "Cabinet",
        Chassis => "Chassis",
        ChassisBmc => "ChassisBMC",
        CmmRectifier => "CMMRectifier",
        CmmFpga => "CMMFpga",
        Cec => "CEC",
        ComputeModule => "ComputeModule",
        RouterModule => "RouterModule",
        NodeBmc => "NodeBMC",
        NodeEnclosure => "NodeEnclosure",
        NodeEnclosurePowerSupply => "NodeEnclosurePowerSupply",
        HsnBoard => "HSNBoard",
        MgmtSwitch => "MgmtSwitch",
        MgmtHlSwitch => "MgmtHLSwitch",
        CduMgmtSwitch => "CDUMgmtSwitch",
        Node => "Node",
        VirtualNode => "VirtualNode",
        Processor => "Processor",
        Drive => "Drive",
        StorageGroup => "StorageGroup",
        NodeNic => "NodeNIC",
        Memory => "Memory",
        NodeAccel => "NodeAccel",
        NodeAccelRiser => "NodeAccelRiser",
        NodeFpga => "NodeFpga",
        HsnAsic => "HSNAsic",
        RouterFpga => "RouterFpga",
        RouterBmc => "RouterBMC",
        HsnLink => "HSNLink",
        HsnConnector => "HSNConnector",
        Invalid => "INVALID",
    }
}

schema_enum! {
    /// State of a CSM component
    pub enum ComponentState : "The state of an CSM component" {
        /// Appears missing but has not been confirmed as empty
        Unknown => "Unknown",
        /// The location is not populated with a component
        Empty => "Empty",
        /// Present, but no further tracking can or is being done
        Populated => "Populated",
        /// Present but powered off
        Off => "Off",
        /// Powered on; software state may be unknown without a heartbeat
        On => "On",
        /// No longer ready and presumed dead, typically heartbeat lost
        Standby => "Standby",
        /// No longer ready and halted
        Halt => "Halt",
        /// On and ready to provide its expected services
        Ready => "Ready",
    }
}

schema_enum! {
    /// Health flag of a CSM component
    pub enum ComponentFlag : "The flag of an CSM component" {
        Unknown => "Unknown",
        /// Functioning properly
        Ok => "OK",
        /// Operating, but has an issue that may require attention
        Warning => "Warning",
        /// No longer operating as expected
        Alert => "Alert",
        /// Another service has reserved this component
        Locked => "Locked",
    }
}

schema_enum! {
    /// Role of a CSM component
    pub enum ComponentRole : "The role of an CSM component" {
        Compute => "Compute",
        Service => "Service",
        System => "System",
        Application => "Application",
        Storage => "Storage",
        Management => "Management",
    }
}

schema_enum! {
    /// Sub-role of a CSM component
    pub enum ComponentSubRole : "The sub-role of an CSM component" {
        Master => "Master",
        Worker => "Worker",
        Storage => "Storage",
    }
}

schema_enum! {
    /// Network type of a CSM component
    pub enum ComponentNetType : "The network type of an CSM component" {
        Sling => "Sling",
        Infiniband => "Infiniband",
        Ethernet => "Ethernet",
        /// Placeholder for non-slingshot
        Oem => "OEM",
        None => "None",
    }
}

schema_enum! {
    /// Architecture of a CSM component
    pub enum ComponentArch : "The architecture of an CSM component" {
        X86 => "X86",
        Arm => "ARM",
        Unknown => "UNKNOWN",
        Other => "Other",
    }
}

schema_enum! {
    /// Hardware class of a CSM component
    pub enum ComponentClass : "The class of an CSM component" {
        River => "River",
        Mountain => "Mountain",
        Hill => "Hill",
        Other => "Other",
    }
}
