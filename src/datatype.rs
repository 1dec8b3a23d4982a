// used to (de)serialize attribute metadata handed over by metadata providers
use serde::{Deserialize, Serialize};

// used to print out readable forms of a data type
use std::fmt;
// used to parse type names reported by metadata providers
use std::str::FromStr;
// used for the attribute type map
use std::collections::HashMap;

/// Attribute logical name -> type information, as supplied by a metadata provider.
pub type AttributeTypeMap = HashMap<String, AttributeTypeInfo>;

// ------------- Semantic Type -------------
/// The closed set of types that decide how a literal is quoted and which
/// operators may be applied to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SemanticType {
    #[default]
    String,
    Number,
    Boolean,
    Date,
    Lookup,
    OptionSet,
}

impl SemanticType {
    pub const ALL: [SemanticType; 6] = [
        SemanticType::String,
        SemanticType::Number,
        SemanticType::Boolean,
        SemanticType::Date,
        SemanticType::Lookup,
        SemanticType::OptionSet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::String => "string",
            SemanticType::Number => "number",
            SemanticType::Boolean => "boolean",
            SemanticType::Date => "date",
            SemanticType::Lookup => "lookup",
            SemanticType::OptionSet => "optionset",
        }
    }

    /// Only plain strings accept `contains`, `startswith` and friends.
    pub fn supports_string_functions(&self) -> bool {
        matches!(self, SemanticType::String)
    }
}

impl FromStr for SemanticType {
    type Err = std::convert::Infallible;

    // Dataverse attribute type names are folded into the semantic types.
    // Anything unrecognized is treated as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let semantic = match s.trim().to_ascii_lowercase().as_str() {
            "number" | "integer" | "bigint" | "decimal" | "double" | "money" => SemanticType::Number,
            "boolean" => SemanticType::Boolean,
            "date" | "datetime" => SemanticType::Date,
            "lookup" | "customer" | "owner" | "uniqueidentifier" => SemanticType::Lookup,
            "optionset" | "picklist" | "state" | "status" | "multiselectpicklist" => {
                SemanticType::OptionSet
            }
            _ => SemanticType::String,
        };
        Ok(semantic)
    }
}
impl From<String> for SemanticType {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}
impl From<SemanticType> for String {
    fn from(t: SemanticType) -> String {
        t.as_str().to_string()
    }
}
impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ------------- Attribute Type Info -------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TypeInfoRepr")]
pub struct AttributeTypeInfo {
    #[serde(rename = "type")]
    pub attribute_type: SemanticType,
    /// Entity sets a lookup may point at. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

impl AttributeTypeInfo {
    pub fn new(attribute_type: SemanticType) -> Self {
        Self { attribute_type, targets: None }
    }
    pub fn lookup<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attribute_type: SemanticType::Lookup,
            targets: Some(targets.into_iter().map(Into::into).collect()),
        }
    }
    pub fn is_lookup(&self) -> bool {
        self.attribute_type == SemanticType::Lookup
    }
}

impl From<SemanticType> for AttributeTypeInfo {
    fn from(t: SemanticType) -> Self {
        Self::new(t)
    }
}

// Metadata providers send either the bare type name or the full object.
#[derive(Deserialize)]
#[serde(untagged)]
enum TypeInfoRepr {
    Bare(SemanticType),
    Full {
        #[serde(rename = "type")]
        attribute_type: SemanticType,
        #[serde(default)]
        targets: Option<Vec<String>>,
    },
}
impl From<TypeInfoRepr> for AttributeTypeInfo {
    fn from(repr: TypeInfoRepr) -> Self {
        match repr {
            TypeInfoRepr::Bare(attribute_type) => Self::new(attribute_type),
            TypeInfoRepr::Full { attribute_type, targets } => Self { attribute_type, targets },
        }
    }
}

/// Storage name of a lookup column in the Web API (`ownerid` -> `_ownerid_value`).
pub fn lookup_storage_name(attribute: &str) -> String {
    format!("_{}_value", attribute)
}
