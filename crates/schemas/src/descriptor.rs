//! Static schema descriptors for string vocabularies
//!
//! Every vocabulary enum carries a `DESCRIPTOR` constant listing its legal
//! values and description. Its JSON Schema is built from that table.

use schemars::{json_schema, Schema};

use crate::csm::{
    ComponentArch, ComponentClass, ComponentFlag, ComponentNetType, ComponentRole, ComponentState,
    ComponentSubRole, ComponentType, DiscoveryStatus,
};

/// Legal values and documentation of one vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// Type name, used as the schema definition name
    pub name: &'static str,
    /// Schema description
    pub description: &'static str,
    /// Wire values in declaration order
    pub values: &'static [&'static str],
}

impl EnumDescriptor {
    /// `{"type": "string", "enum": [...], "description": ...}`
    pub fn to_schema(&self) -> Schema {
        json_schema!({
            "type": "string",
            "enum": self.values,
            "description": self.description,
        })
    }

    /// Whether `value` is one of the legal values
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

/// Descriptors of every vocabulary, in a fixed order
pub fn all() -> [&'static EnumDescriptor; 9] {
    [
        &ComponentType::DESCRIPTOR,
        &ComponentState::DESCRIPTOR,
        &ComponentFlag::DESCRIPTOR,
        &ComponentRole::DESCRIPTOR,
        &ComponentSubRole::DESCRIPTOR,
        &ComponentNetType::DESCRIPTOR,
        &ComponentArch::DESCRIPTOR,
        &ComponentClass::DESCRIPTOR,
        &DiscoveryStatus::DESCRIPTOR,
    ]
}

/// Look up a descriptor by type name
pub fn find(name: &str) -> Option<&'static EnumDescriptor> {
    all().into_iter().find(|d| d.name == name)
}

/// Declare a string vocabulary enum.
///
/// Generates the enum with serde renames, `DESCRIPTOR`, `as_str`, `Display`,
/// `FromStr` and a `JsonSchema` impl backed by the descriptor.
macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $description:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Legal values and description of this vocabulary
            pub const DESCRIPTOR: $crate::descriptor::EnumDescriptor = $crate::descriptor::EnumDescriptor {
                name: stringify!($name),
                description: $description,
                values: &[$($value),+],
            };

            /// Every variant in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire value
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    _ => Err($crate::error::SchemaError::UnknownVariant {
                        type_name: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl schemars::JsonSchema for $name {
            fn schema_name() -> std::borrow::Cow<'static, str> {
                std::borrow::Cow::Borrowed(stringify!($name))
            }

            fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
                Self::DESCRIPTOR.to_schema()
            }
        }
    };
}

pub(crate) use schema_enum;
