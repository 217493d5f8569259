//! Redfish endpoint records
//!
//! Endpoints are the BMCs and other controllers found during discovery.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::component::{is_false, ComponentType};
use crate::descriptor::schema_enum;
use crate::xname::BmcXname;

schema_enum! {
    /// Outcome of a discovery attempt
    pub enum DiscoveryStatus : "Describes the outcome of the discovery attempt" {
        EndpointInvalid => "EndpointInvalid",
        EpResponseFailedDecode => "EPResponseFailedDecode",
        HttpsGetFailed => "HTTPsGetFailed",
        NotYetQueried => "NotYetQueried",
        VerificationFailed => "VerificationFailed",
        ChildVerificationFailed => "ChildVerificationFailed",
        DiscoverOk => "DiscoverOK",
    }
}

/// Discovery status of an endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DiscoveryInfo {
    /// The time the last discovery attempt took place
    #[serde(rename = "LastAttempt", default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("readOnly" = true))]
    pub last_attempt: Option<DateTime<Utc>>,

    /// Describes the outcome of the last discovery attempt
    #[serde(rename = "LastStatus", default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("readOnly" = true))]
    pub last_status: Option<DiscoveryStatus>,

    /// Version of Redfish as reported by the RF service root
    #[serde(rename = "RedfishVersion", default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("readOnly" = true))]
    pub redfish_version: Option<String>,
}

/// Credential that never appears in `Debug` output
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Wrap a plain-text password
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Plain-text password
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the password is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// A Redfish service root on the management network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RedfishEndpoint {
    /// Xname of the endpoint, e.g. of a NodeBMC or ChassisBMC
    #[serde(rename = "ID")]
    pub id: String,

    /// Component type of the endpoint
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<ComponentType>,

    /// This is an arbitrary, user-provided name for the endpoint. It can describe anything that is not captured by the ID/xname.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Hostname of the endpoint's FQDN, will always be the host portion of the fully-qualified domain name. Note that the hostname should normally always be the same as the ID field (i.e. xname) of the endpoint.
    #[serde(rename = "Hostname", default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Domain of the endpoint's FQDN. Will always match remaining non-hostname portion of fully-qualified domain name (FQDN).
    #[serde(rename = "Domain", default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Fully-qualified domain name of RF endpoint on management network. This is not writable because it is made up of the Hostname and Domain.
    #[serde(rename = "FQDN", default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,

    /// To disable a component without deleting its data from the database, can be set to false
    #[serde(rename = "Enabled", default, skip_serializing_if = "is_false")]
    #[schemars(extend("examples" = [true]))]
    pub enabled: bool,

    /// URI of the Redfish service root
    #[serde(rename = "URI", default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// UUID of the endpoint
    #[serde(rename = "UUID", default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,

    /// Username to use when interrogating endpoint
    #[serde(rename = "User", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Password to use when interrogating endpoint, normally suppressed in output.
    #[serde(rename = "Password", default, skip_serializing_if = "Password::is_empty")]
    pub password: Password,

    /// Whether to use SSDP for discovery if the EP supports it.
    #[serde(rename = "UseSSDP", default, skip_serializing_if = "is_false")]
    pub use_ssdp: bool,

    /// Whether the MAC must be used (e.g. in River) in setting up geolocation info so the endpoint's location in the system can be determined. The MAC does not need to be provided when creating the endpoint if the endpoint type can arrive at a geolocated hostname on its own.
    #[serde(rename = "MacRequired", default, skip_serializing_if = "is_false")]
    pub mac_required: bool,

    /// This is the MAC on the of the Redfish Endpoint on the management network, i.e. corresponding to the FQDN field's Ethernet interface where the root service is running. Not the HSN MAC. This is a MAC address in the standard colon-separated 12 byte hex format.
    #[serde(rename = "MACAddr", default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("pattern" = "^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$", "examples" = ["ae:12:e2:ff:89:9d"]))]
    pub mac_addr: Option<String>,

    /// This is the IP of the Redfish Endpoint on the management network, i.e. corresponding to the FQDN field's Ethernet interface where the root service is running. This may be IPv4 or IPv6
    #[serde(rename = "IPAddress", default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("examples" = ["10.254.2.10"]))]
    pub ip_address: Option<String>,

    /// Trigger a rediscovery when endpoint info is updated.
    #[serde(rename = "RediscoverOnUpdate", default, skip_serializing_if = "is_false")]
    pub rediscover_on_update: bool,

    /// Links to a discovery template defining how the endpoint should be discovered.
    #[serde(rename = "TemplateID", default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    /// Contains info about the discovery status of the given endpoint
    #[serde(rename = "DiscoveryInfo", default)]
    #[schemars(extend("readOnly" = true))]
    pub discovery_info: DiscoveryInfo,
}

impl RedfishEndpoint {
    /// Endpoint at `id` with every optional field unset
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The `ID` field as a BMC xname
    pub fn bmc_xname(&self) -> BmcXname {
        BmcXname::new(self.id.as_str())
    }
}

/// Record of one discovery run against an endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RedfishDiscovery {
    /// ID of the entrypoint that was used to discover the endpoint
    #[serde(rename = "EntrypointID", default, skip_serializing_if = "Option::is_none")]
    pub entrypoint_id: Option<String>,

    /// Unique identifier of the discovery run
    #[serde(rename = "UID", default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uuid>,

    /// ID of the endpoint that was discovered
    #[serde(rename = "EndpointID", default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Time the discovery was started
    #[serde(rename = "Attempted", default, skip_serializing_if = "Option::is_none")]
    pub attempted: Option<DateTime<Utc>>,

    /// Time the discovery was completed
    #[serde(rename = "Completed", default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<DateTime<Utc>>,

    /// Describes the outcome of the discovery attempt
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DiscoveryStatus>,

    /// The discovered endpoint
    #[serde(rename = "Payload")]
    pub payload: RedfishEndpoint,
}
