//! CSM (Cray System Management) hardware inventory records
//!
//! - Components: every located piece of hardware and its state
//! - Redfish endpoints: discovered BMCs and their discovery status

pub mod component;
pub mod redfish_endpoint;

pub use component::*;
pub use redfish_endpoint::*;
