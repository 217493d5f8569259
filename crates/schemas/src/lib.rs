//! Cluster Inventory Schemas
//!
//! Data-transfer records for cluster hardware management and the xname codec
//! used to read physical locations out of them.
//!
//! # Example
//!
//! ```
//! use schemas::xname::{self, NodeXname, XnameKind};
//!
//! let node = NodeXname::new("x1003c0s7b0n1");
//! assert_eq!(node.slot(), Ok(7));
//! assert!(node.is_valid());
//!
//! assert!(xname::validate("x1003c256s0b0n0", XnameKind::Node).is_err());
//! ```
//!
//! # Modules
//!
//! - **xname**: lenient decode and strict validation of location identifiers
//! - **csm**: components and Redfish endpoints
//! - **inventory** / **envelope**: node inventory submissions
//! - **cloudinit**: cloud-init instance data
//! - **generate**: JSON Schema documents for the records above

pub mod cloudinit;
pub mod csm;
pub mod descriptor;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod inventory;
pub mod xname;

pub use error::{SchemaError, XnameError};
pub use xname::{BmcXname, LocationComponents, NodeXname, XnameKind};
