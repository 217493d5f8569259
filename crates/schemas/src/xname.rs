//! XName codec
//!
//! An xname encodes the physical location of a component:
//!
//! - Node form: `x<cabinet>c<chassis>s<slot>b<bmc>n<node>`
//! - Controller (BMC) form: `x<cabinet>c<chassis>s<slot>b<bmc>`
//!
//! Reading an xname happens in two separate phases. [`decode`] is lenient and
//! never fails: it scans whatever digits it finds and returns an empty record
//! when neither form scans. [`validate`] and [`check_controller_bounds`] are
//! strict and must be called explicitly before the data is trusted.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::XnameError;

/// Pattern published in the node xname schema
pub const NODE_XNAME_PATTERN: &str = r"^x(\d{3,5})c(\d{1,3})s(\d{1,3})b(\d{1,3})n(\d{1,3})$";

/// Pattern published in the BMC xname schema
pub const BMC_XNAME_PATTERN: &str = r"^x(\d{3,5})c(\d{1,3})s(\d{1,3})b(\d{1,3})$";

/// Exclusive upper bound for chassis, slot and bmc positions
pub const POSITION_LIMIT: u64 = 256;

/// Inclusive upper bound for cabinet numbers in [`check_controller_bounds`]
pub const MAX_CABINET: u64 = 100_000;

#[allow(clippy::expect_used, reason = "pattern is a compile-time constant")]
static NODE_XNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^x(?P<cabinet>\d{3,5})c(?P<chassis>\d{1,3})s(?P<slot>\d{1,3})b(?P<bmc>\d{1,3})n(?P<node>\d{1,3})$",
    )
    .expect("node xname pattern compiles")
});

#[allow(clippy::expect_used, reason = "pattern is a compile-time constant")]
static BMC_XNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^x(?P<cabinet>\d{3,5})c(?P<chassis>\d{1,3})s(?P<slot>\d{1,3})b(?P<bmc>\d{1,3})$")
        .expect("bmc xname pattern compiles")
});

/// Which grammar produced a [`LocationComponents`] record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum XnameKind {
    /// Compute node (`...b<bmc>n<node>`)
    #[serde(rename = "n")]
    Node,

    /// Baseboard management controller (`...b<bmc>`)
    #[serde(rename = "b")]
    Controller,
}

impl XnameKind {
    fn regex(self) -> &'static Regex {
        match self {
            Self::Node => &NODE_XNAME_RE,
            Self::Controller => &BMC_XNAME_RE,
        }
    }

    /// Anchored pattern published for this form
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Node => NODE_XNAME_PATTERN,
            Self::Controller => BMC_XNAME_PATTERN,
        }
    }
}

impl fmt::Display for XnameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => f.write_str("node"),
            Self::Controller => f.write_str("controller"),
        }
    }
}

/// Decoded form of an xname
///
/// Controller records never carry a node position. A record produced from
/// input that matched neither form has no kind and all fields zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "LocationComponentsWire")]
pub struct LocationComponents {
    cabinet: u64,
    chassis: u64,
    slot: u64,
    bmc_position: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    node_position: Option<u64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<XnameKind>,
}

/// Unchecked wire form of [`LocationComponents`]
#[derive(Deserialize, JsonSchema)]
struct LocationComponentsWire {
    cabinet: u64,
    chassis: u64,
    slot: u64,
    bmc_position: u64,
    #[serde(default)]
    node_position: Option<u64>,
    #[serde(default, rename = "type")]
    kind: Option<XnameKind>,
}

impl TryFrom<LocationComponentsWire> for LocationComponents {
    type Error = XnameError;

    fn try_from(wire: LocationComponentsWire) -> Result<Self, Self::Error> {
        match (wire.kind, wire.node_position) {
            (Some(XnameKind::Node), Some(node)) => Ok(Self::node(
                wire.cabinet,
                wire.chassis,
                wire.slot,
                wire.bmc_position,
                node,
            )),
            (Some(XnameKind::Controller), None) => Ok(Self::controller(
                wire.cabinet,
                wire.chassis,
                wire.slot,
                wire.bmc_position,
            )),
            (None, None) => Ok(Self {
                cabinet: wire.cabinet,
                chassis: wire.chassis,
                slot: wire.slot,
                bmc_position: wire.bmc_position,
                node_position: None,
                kind: None,
            }),
            (kind, node_position) => Err(XnameError::InconsistentComponents { kind, node_position }),
        }
    }
}

impl LocationComponents {
    /// Record for a node location
    pub fn node(cabinet: u64, chassis: u64, slot: u64, bmc_position: u64, node_position: u64) -> Self {
        Self {
            cabinet,
            chassis,
            slot,
            bmc_position,
            node_position: Some(node_position),
            kind: Some(XnameKind::Node),
        }
    }

    /// Record for a controller location
    pub fn controller(cabinet: u64, chassis: u64, slot: u64, bmc_position: u64) -> Self {
        Self {
            cabinet,
            chassis,
            slot,
            bmc_position,
            node_position: None,
            kind: Some(XnameKind::Controller),
        }
    }

    /// Cabinet number
    pub fn cabinet(&self) -> u64 {
        self.cabinet
    }

    /// Chassis within the cabinet
    pub fn chassis(&self) -> u64 {
        self.chassis
    }

    /// Slot within the chassis
    pub fn slot(&self) -> u64 {
        self.slot
    }

    /// Controller position within the slot
    pub fn bmc_position(&self) -> u64 {
        self.bmc_position
    }

    /// Node position behind the controller, only set for node records
    pub fn node_position(&self) -> Option<u64> {
        self.node_position
    }

    /// Grammar that produced the record, unset when nothing scanned
    pub fn kind(&self) -> Option<XnameKind> {
        self.kind
    }
}

/// Encodes the record without zero padding; an unset kind encodes as "".
impl fmt::Display for LocationComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(kind) = self.kind else {
            return Ok(());
        };
        write!(f, "x{}c{}s{}b{}", self.cabinet, self.chassis, self.slot, self.bmc_position)?;
        if kind == XnameKind::Node {
            write!(f, "n{}", self.node_position.unwrap_or_default())?;
        }
        Ok(())
    }
}

/// Scan `<tag><digits>` pairs from the start of `raw`, ignoring trailing input.
fn scan<const N: usize>(raw: &str, tags: [char; N]) -> Option<[u64; N]> {
    let mut rest = raw;
    let mut fields = [0; N];
    for (field, tag) in fields.iter_mut().zip(tags) {
        rest = rest.strip_prefix(tag)?;
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        *field = rest[..end].parse().ok()?;
        rest = &rest[end..];
    }
    Some(fields)
}

/// Best-effort decode of an xname.
///
/// Tries the node form first, then the controller form. Digit runs of any
/// length are accepted and no bounds are checked. Input matching neither form
/// yields a zeroed record with no kind.
pub fn decode(raw: &str) -> LocationComponents {
    if let Some([cabinet, chassis, slot, bmc, node]) = scan(raw, ['x', 'c', 's', 'b', 'n']) {
        return LocationComponents::node(cabinet, chassis, slot, bmc, node);
    }
    if let Some([cabinet, chassis, slot, bmc]) = scan(raw, ['x', 'c', 's', 'b']) {
        return LocationComponents::controller(cabinet, chassis, slot, bmc);
    }
    debug!(xname = raw, "xname matched neither node nor controller form");
    LocationComponents::default()
}

fn capture_number(captures: &Captures<'_>, field: &'static str) -> Result<u64, XnameError> {
    let text = captures.name(field).map_or("", |m| m.as_str());
    text.parse().map_err(|_| XnameError::InvalidNumericField {
        field,
        value: text.to_string(),
    })
}

fn check_below(field: &'static str, value: u64, limit: u64) -> Result<(), XnameError> {
    if value >= limit {
        return Err(XnameError::OutOfRange {
            field,
            value,
            max: limit - 1,
        });
    }
    Ok(())
}

fn match_form<'a>(raw: &'a str, kind: XnameKind) -> Result<Captures<'a>, XnameError> {
    kind.regex().captures(raw).ok_or_else(|| {
        debug!(xname = raw, %kind, "xname rejected by pattern");
        XnameError::PatternMismatch {
            kind,
            value: raw.to_string(),
        }
    })
}

fn components_from(captures: &Captures<'_>, kind: XnameKind) -> Result<LocationComponents, XnameError> {
    let cabinet = capture_number(captures, "cabinet")?;
    let chassis = capture_number(captures, "chassis")?;
    let slot = capture_number(captures, "slot")?;
    let bmc = capture_number(captures, "bmc")?;
    Ok(match kind {
        XnameKind::Node => {
            LocationComponents::node(cabinet, chassis, slot, bmc, capture_number(captures, "node")?)
        }
        XnameKind::Controller => LocationComponents::controller(cabinet, chassis, slot, bmc),
    })
}

/// Strict check of `raw` against the grammar of `kind`.
///
/// Field widths come from the pattern; of the numeric bounds only
/// `chassis < 256` is enforced here. Slot, bmc and node are limited to three
/// digits. Use [`check_controller_bounds`] for the full controller bounds.
pub fn validate(raw: &str, kind: XnameKind) -> Result<LocationComponents, XnameError> {
    let captures = match_form(raw, kind)?;
    let components = components_from(&captures, kind)?;
    check_below("chassis", components.chassis, POSITION_LIMIT)?;
    Ok(components)
}

/// Controller check with every numeric bound applied.
///
/// Cabinet must not exceed 100000; chassis, slot and bmc must be below 256.
pub fn check_controller_bounds(raw: &str) -> Result<LocationComponents, XnameError> {
    let captures = match_form(raw, XnameKind::Controller)?;
    let components = components_from(&captures, XnameKind::Controller)?;
    if components.cabinet > MAX_CABINET {
        return Err(XnameError::OutOfRange {
            field: "cabinet",
            value: components.cabinet,
            max: MAX_CABINET,
        });
    }
    check_below("chassis", components.chassis, POSITION_LIMIT)?;
    check_below("slot", components.slot, POSITION_LIMIT)?;
    check_below("bmc", components.bmc_position, POSITION_LIMIT)?;
    Ok(components)
}

/// Whether `raw` is a controller xname within every numeric bound
pub fn is_valid_bmc_xname(raw: &str) -> bool {
    check_controller_bounds(raw).is_ok()
}

mod sealed {
    pub trait Sealed {}
}

/// Grammar variant carried by an [`Xname`] wrapper
pub trait XnameForm: sealed::Sealed {
    /// Grammar used by strict validation
    const KIND: XnameKind;
    /// Schema title
    const TITLE: &'static str;
    /// Schema description
    const DESCRIPTION: &'static str;
}

/// Marker for node xnames
#[derive(Debug, Clone, Copy)]
pub struct NodeForm;

/// Marker for BMC xnames
#[derive(Debug, Clone, Copy)]
pub struct BmcForm;

impl sealed::Sealed for NodeForm {}
impl sealed::Sealed for BmcForm {}

impl XnameForm for NodeForm {
    const KIND: XnameKind = XnameKind::Node;
    const TITLE: &'static str = "NodeXName";
    const DESCRIPTION: &'static str = "XName for a compute node";
}

impl XnameForm for BmcForm {
    const KIND: XnameKind = XnameKind::Controller;
    const TITLE: &'static str = "BMCXName";
    const DESCRIPTION: &'static str = "XName for a BMC";
}

/// Xname as received at a system boundary.
///
/// Holds the original text; the lenient decode runs once at construction.
/// Validity is not checked until [`Xname::validate`] is called.
pub struct Xname<F> {
    raw: String,
    decoded: LocationComponents,
    form: PhantomData<fn() -> F>,
}

/// Xname of a compute node
pub type NodeXname = Xname<NodeForm>;

/// Xname of a baseboard management controller
pub type BmcXname = Xname<BmcForm>;

impl<F: XnameForm> Xname<F> {
    /// Wrap `raw` without validating it
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let decoded = decode(&raw);
        Self {
            raw,
            decoded,
            form: PhantomData,
        }
    }

    /// Parse the text form produced by [`Xname::marshal`].
    ///
    /// A quoted JSON string is unescaped. Anything else loses at most one
    /// pair of surrounding double quotes and is otherwise kept verbatim;
    /// nothing is validated.
    pub fn unmarshal(data: &str) -> Self {
        if let Ok(text) = serde_json::from_str::<String>(data) {
            return Self::new(text);
        }
        let raw = data
            .strip_prefix('"')
            .and_then(|inner| inner.strip_suffix('"'))
            .unwrap_or(data);
        Self::new(raw)
    }

    /// Quoted, JSON-escaped text form
    pub fn marshal(&self) -> String {
        serde_json::Value::String(self.raw.clone()).to_string()
    }

    /// Original text
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the wrapper holds no text
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Leniently decoded components; fails only when the text is empty
    pub fn components(&self) -> Result<LocationComponents, XnameError> {
        if self.raw.is_empty() {
            return Err(XnameError::EmptyIdentifier);
        }
        Ok(self.decoded)
    }

    /// Cabinet number
    pub fn cabinet(&self) -> Result<u64, XnameError> {
        self.components().map(|c| c.cabinet)
    }

    /// Chassis within the cabinet
    pub fn chassis(&self) -> Result<u64, XnameError> {
        self.components().map(|c| c.chassis)
    }

    /// Slot within the chassis
    pub fn slot(&self) -> Result<u64, XnameError> {
        self.components().map(|c| c.slot)
    }

    /// Controller position within the slot
    pub fn bmc_position(&self) -> Result<u64, XnameError> {
        self.components().map(|c| c.bmc_position)
    }

    /// Strict check against this form's grammar, see [`validate`]
    pub fn validate(&self) -> Result<LocationComponents, XnameError> {
        validate(&self.raw, F::KIND)
    }

    /// Whether [`Xname::validate`] succeeds
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl NodeXname {
    /// Node position behind the controller; 0 when the text has no node field
    pub fn node_position(&self) -> Result<u64, XnameError> {
        self.components().map(|c| c.node_position.unwrap_or_default())
    }
}

/// Raw text of each xname, in order
pub fn xname_strings<F: XnameForm>(xnames: &[Xname<F>]) -> Vec<String> {
    xnames.iter().map(|x| x.raw.clone()).collect()
}

impl<F> Clone for Xname<F> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            decoded: self.decoded,
            form: PhantomData,
        }
    }
}

impl<F: XnameForm> fmt::Debug for Xname<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(F::TITLE).field(&self.raw).finish()
    }
}

impl<F> fmt::Display for Xname<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<F> PartialEq for Xname<F> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<F> Eq for Xname<F> {}

impl<F> Hash for Xname<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<F: XnameForm> Default for Xname<F> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<F: XnameForm> From<&str> for Xname<F> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<F: XnameForm> From<String> for Xname<F> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<F> AsRef<str> for Xname<F> {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl<F> Serialize for Xname<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

struct XnameVisitor<F>(PhantomData<fn() -> F>);

impl<F: XnameForm> Visitor<'_> for XnameVisitor<F> {
    type Value = Xname<F>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} string", F::TITLE)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Xname::new(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Xname::new(v))
    }

    // Unquoted scalars are kept as their text
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Xname::new(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Xname::new(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Xname::new(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Xname::new(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Xname::new("null"))
    }
}

impl<'de, F: XnameForm> Deserialize<'de> for Xname<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(XnameVisitor(PhantomData))
    }
}

impl<F: XnameForm> JsonSchema for Xname<F> {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed(F::TITLE)
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "title": F::TITLE,
            "description": F::DESCRIPTION,
            "pattern": F::KIND.pattern(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_node() {
        let c = decode("x1003c0s0b0n0");
        assert_eq!(c, LocationComponents::node(1003, 0, 0, 0, 0));
        assert_eq!(c.kind(), Some(XnameKind::Node));
    }

    #[test]
    fn test_decode_controller() {
        let c = decode("x1003c0s0b0");
        assert_eq!(c, LocationComponents::controller(1003, 0, 0, 0));
        assert_eq!(c.node_position(), None);
    }

    #[test]
    fn test_decode_unmatched_is_zeroed() {
        for raw in ["", "not-an-xname", "x", "x12c", "c0s0b0n0"] {
            let c = decode(raw);
            assert_eq!(c, LocationComponents::default(), "input {raw:?}");
            assert_eq!(c.kind(), None);
        }
    }

    #[test]
    fn test_decode_is_lenient() {
        // Out of range and oversized fields are not rejected
        assert_eq!(decode("x1c999s12345b7n42"), LocationComponents::node(1, 999, 12345, 7, 42));
        // Trailing input is ignored
        assert_eq!(decode("x1003c0s0b0n3-extra"), LocationComponents::node(1003, 0, 0, 0, 3));
        // Missing node digits fall back to the controller form
        assert_eq!(decode("x1003c1s2b3n"), LocationComponents::controller(1003, 1, 2, 3));
    }

    #[test]
    fn test_decode_overflow_fails_scan() {
        assert_eq!(decode("x99999999999999999999999c0s0b0n0"), LocationComponents::default());
        // Only the node field overflows, so the controller scan wins
        assert_eq!(
            decode("x1003c0s0b0n99999999999999999999999"),
            LocationComponents::controller(1003, 0, 0, 0)
        );
    }

    #[test]
    fn test_decode_wide_fields() {
        assert_eq!(
            decode("x99999999999c4294967296s0b0n0"),
            LocationComponents::node(99_999_999_999, 4_294_967_296, 0, 0, 0)
        );
        assert_eq!(decode(&format!("x{}c0s0b0", u64::MAX)).cabinet(), u64::MAX);
    }

    #[test]
    fn test_components_display() {
        assert_eq!(LocationComponents::node(3000, 1, 2, 0, 1).to_string(), "x3000c1s2b0n1");
        assert_eq!(LocationComponents::controller(3000, 1, 2, 0).to_string(), "x3000c1s2b0");
        assert_eq!(LocationComponents::default().to_string(), "");
        // Leading zeros are not preserved through components
        assert_eq!(decode("x01003c00s0b0").to_string(), "x1003c0s0b0");
    }

    #[test]
    fn test_components_wire_form() {
        let json = serde_json::to_value(LocationComponents::node(1003, 1, 2, 3, 4)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cabinet": 1003,
                "chassis": 1,
                "slot": 2,
                "bmc_position": 3,
                "node_position": 4,
                "type": "n"
            })
        );

        let json = serde_json::to_value(LocationComponents::controller(1003, 1, 2, 3)).unwrap();
        assert_eq!(json["type"], "b");
        assert!(json.get("node_position").is_none());
    }

    #[test]
    fn test_components_deserialize() {
        let c: LocationComponents = serde_json::from_str(
            r#"{"cabinet":1003,"chassis":1,"slot":2,"bmc_position":3,"node_position":4,"type":"n"}"#,
        )
        .unwrap();
        assert_eq!(c, LocationComponents::node(1003, 1, 2, 3, 4));

        let c: LocationComponents =
            serde_json::from_str(r#"{"cabinet":1003,"chassis":1,"slot":2,"bmc_position":3,"type":"b"}"#).unwrap();
        assert_eq!(c, LocationComponents::controller(1003, 1, 2, 3));

        let c: LocationComponents =
            serde_json::from_str(r#"{"cabinet":0,"chassis":0,"slot":0,"bmc_position":0}"#).unwrap();
        assert_eq!(c, LocationComponents::default());
        assert!(serde_json::from_str::<LocationComponents>("{}").is_err());
    }

    #[test]
    fn test_components_deserialize_rejects_inconsistent() {
        for json in [
            r#"{"cabinet":1,"chassis":0,"slot":0,"bmc_position":0,"node_position":7,"type":"b"}"#,
            r#"{"cabinet":1,"chassis":0,"slot":0,"bmc_position":0,"type":"n"}"#,
            r#"{"cabinet":1,"chassis":0,"slot":0,"bmc_position":0,"node_position":7}"#,
        ] {
            let err = serde_json::from_str::<LocationComponents>(json).unwrap_err();
            assert!(err.to_string().contains("node position"), "{json}: {err}");
        }
    }

    #[test]
    fn test_validate_node() {
        assert_eq!(validate("x1003c0s0b0n0", XnameKind::Node), Ok(LocationComponents::node(1003, 0, 0, 0, 0)));
    }

    #[test]
    fn test_validate_controller() {
        assert_eq!(
            validate("x1003c0s0b0", XnameKind::Controller),
            Ok(LocationComponents::controller(1003, 0, 0, 0))
        );
    }

    #[test]
    fn test_validate_chassis_range_node() {
        for chassis in 0..POSITION_LIMIT {
            let raw = format!("x1003c{chassis}s0b0n0");
            assert!(validate(&raw, XnameKind::Node).is_ok(), "{raw}");
        }
        for chassis in POSITION_LIMIT..1000 {
            let raw = format!("x1003c{chassis}s0b0n0");
            assert_eq!(
                validate(&raw, XnameKind::Node),
                Err(XnameError::OutOfRange {
                    field: "chassis",
                    value: chassis,
                    max: 255
                })
            );
        }
    }

    #[test]
    fn test_validate_chassis_boundary_controller() {
        assert!(validate("x1003c255s0b0", XnameKind::Controller).is_ok());
        assert!(matches!(
            validate("x1003c256s0b0", XnameKind::Controller),
            Err(XnameError::OutOfRange { field: "chassis", value: 256, .. })
        ));
    }

    #[test]
    fn test_validate_only_bounds_chassis() {
        // Slot, bmc and node are limited by digit count only
        assert!(validate("x1003c0s999b999n999", XnameKind::Node).is_ok());
        assert!(validate("x1003c0s999b999", XnameKind::Controller).is_ok());
    }

    #[test]
    fn test_validate_pattern_mismatch() {
        for raw in ["not-an-xname", "", "x12c0s0b0n0", "x123456c0s0b0n0", "x1003c0s0b0n0 ", "X1003c0s0b0n0", "x1003c1000s0b0"] {
            for kind in [XnameKind::Node, XnameKind::Controller] {
                assert_eq!(
                    validate(raw, kind),
                    Err(XnameError::PatternMismatch {
                        kind,
                        value: raw.to_string()
                    }),
                    "{raw:?} as {kind}"
                );
            }
        }
    }

    #[test]
    fn test_validate_forms_are_exclusive() {
        assert!(matches!(
            validate("x1003c0s0b0", XnameKind::Node),
            Err(XnameError::PatternMismatch { .. })
        ));
        assert!(matches!(
            validate("x1003c0s0b0n0", XnameKind::Controller),
            Err(XnameError::PatternMismatch { .. })
        ));
    }

    #[test]
    fn test_check_controller_bounds() {
        assert_eq!(check_controller_bounds("x99999c0s0b0"), Ok(LocationComponents::controller(99999, 0, 0, 0)));
        assert!(is_valid_bmc_xname("x1000c255s255b255"));
        assert!(!is_valid_bmc_xname("x100001c0s0b0"));
        assert!(!is_valid_bmc_xname("x1000c0s0b0n0"));

        assert_eq!(
            check_controller_bounds("x1000c0s256b0"),
            Err(XnameError::OutOfRange {
                field: "slot",
                value: 256,
                max: 255
            })
        );
        assert_eq!(
            check_controller_bounds("x1000c0s0b300"),
            Err(XnameError::OutOfRange {
                field: "bmc",
                value: 300,
                max: 255
            })
        );
        assert!(matches!(
            check_controller_bounds("x1000c256s0b0"),
            Err(XnameError::OutOfRange { field: "chassis", .. })
        ));
    }

    #[test]
    fn test_wrapper_accessors() {
        let xname = NodeXname::new("x1003c1s7b0n1");
        assert_eq!(xname.cabinet(), Ok(1003));
        assert_eq!(xname.chassis(), Ok(1));
        assert_eq!(xname.slot(), Ok(7));
        assert_eq!(xname.bmc_position(), Ok(0));
        assert_eq!(xname.node_position(), Ok(1));
    }

    #[test]
    fn test_wrapper_empty() {
        let xname = NodeXname::new("");
        assert_eq!(xname.cabinet(), Err(XnameError::EmptyIdentifier));
        assert_eq!(xname.chassis(), Err(XnameError::EmptyIdentifier));
        assert_eq!(xname.slot(), Err(XnameError::EmptyIdentifier));
        assert_eq!(xname.bmc_position(), Err(XnameError::EmptyIdentifier));
        assert_eq!(xname.node_position(), Err(XnameError::EmptyIdentifier));
        assert_eq!(BmcXname::default().cabinet(), Err(XnameError::EmptyIdentifier));
    }

    #[test]
    fn test_wrapper_malformed_reads_zero() {
        let xname = NodeXname::new("garbage");
        assert_eq!(xname.cabinet(), Ok(0));
        assert_eq!(xname.node_position(), Ok(0));
        assert!(!xname.is_valid());
    }

    #[test]
    fn test_wrapper_validate_uses_form() {
        assert!(NodeXname::new("x1003c0s0b0n0").is_valid());
        assert!(!NodeXname::new("x1003c0s0b0").is_valid());
        assert!(BmcXname::new("x1003c0s0b0").is_valid());
        assert!(matches!(
            BmcXname::new("x1003c256s0b0").validate(),
            Err(XnameError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_marshal_unmarshal() {
        for raw in ["x1003c0s0b0n0", "", "anything goes", r"C:\path", r"x1003c0s0b0n0\", "a\nb", "tab\there"] {
            let xname = NodeXname::new(raw);
            assert_eq!(NodeXname::unmarshal(&xname.marshal()).as_str(), raw, "{raw:?}");
        }
        assert_eq!(NodeXname::new("x1c0s0b0n0").marshal(), "\"x1c0s0b0n0\"");
        assert_eq!(NodeXname::new(r"C:\path").marshal(), r#""C:\\path""#);
    }

    #[test]
    fn test_unmarshal_accepts_unquoted() {
        assert_eq!(BmcXname::unmarshal("x1003c0s0b0").as_str(), "x1003c0s0b0");
        assert_eq!(BmcXname::unmarshal("\"").as_str(), "\"");
        assert_eq!(BmcXname::unmarshal("\"\"x\"\"").as_str(), "\"x\"");
        // Invalid escape: only the quotes are stripped
        assert_eq!(BmcXname::unmarshal(r#""C:\path""#).as_str(), r"C:\path");
    }

    #[test]
    fn test_serde_string() {
        let xname: NodeXname = serde_json::from_str("\"x1003c0s0b0n0\"").unwrap();
        assert_eq!(xname.as_str(), "x1003c0s0b0n0");
        assert_eq!(serde_json::to_string(&xname).unwrap(), "\"x1003c0s0b0n0\"");

        // Unquoted scalars are kept verbatim
        let xname: BmcXname = serde_json::from_str("1003").unwrap();
        assert_eq!(xname.as_str(), "1003");
        let xname: NodeXname = serde_json::from_str("null").unwrap();
        assert_eq!(xname.as_str(), "null");
        let xname: NodeXname = serde_json::from_str("true").unwrap();
        assert_eq!(xname.as_str(), "true");
    }

    #[test]
    fn test_xname_strings_preserves_order() {
        let xnames: Vec<NodeXname> = ["x1c0s0b0n1", "", "x1c0s0b0n0"].into_iter().map(NodeXname::from).collect();
        assert_eq!(xname_strings(&xnames), vec!["x1c0s0b0n1", "", "x1c0s0b0n0"]);
        assert!(xname_strings::<NodeForm>(&[]).is_empty());
    }

    #[test]
    fn test_schema_metadata() {
        let schema = schemars::schema_for!(NodeXname);
        assert_eq!(schema.as_value().get("title").and_then(|v| v.as_str()), Some("NodeXName"));
        assert_eq!(schema.as_value().get("pattern").and_then(|v| v.as_str()), Some(NODE_XNAME_PATTERN));

        let schema = schemars::schema_for!(BmcXname);
        assert_eq!(schema.as_value().get("description").and_then(|v| v.as_str()), Some("XName for a BMC"));
        assert_eq!(schema.as_value().get("pattern").and_then(|v| v.as_str()), Some(BMC_XNAME_PATTERN));
    }

    #[test]
    fn test_published_patterns_agree_with_validator() {
        let node = Regex::new(NODE_XNAME_PATTERN).unwrap();
        let bmc = Regex::new(BMC_XNAME_PATTERN).unwrap();
        for raw in ["x1003c0s0b0n0", "x1003c0s0b0", "x10c0s0b0n0", "x99999c999s999b999n999"] {
            assert_eq!(node.is_match(raw), NODE_XNAME_RE.is_match(raw), "{raw}");
            assert_eq!(bmc.is_match(raw), BMC_XNAME_RE.is_match(raw), "{raw}");
        }
    }
}
