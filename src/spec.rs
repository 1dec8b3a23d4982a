//! The declarative description of a query, as handed over by callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::datatype::{AttributeTypeInfo, AttributeTypeMap};
use crate::error::OdataqError;
use crate::filter::FilterGroup;
use crate::lenient;

// ------------- Order Direction -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}
impl From<String> for OrderDirection {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            OrderDirection::Desc
        } else {
            OrderDirection::Asc
        }
    }
}
impl From<OrderDirection> for String {
    fn from(d: OrderDirection) -> String {
        d.as_str().to_string()
    }
}
impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ------------- Query Spec -------------
/// Columns, filter groups, ordering and paging for one query.
///
/// Every field is optional; an empty spec builds the empty query string.
/// Decoding from JSON is forgiving: structurally wrong parts decode to their
/// empty form instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    #[serde(default, deserialize_with = "lenient::seq", skip_serializing_if = "Vec::is_empty")]
    pub select: Vec<String>,
    #[serde(default, deserialize_with = "lenient::seq", skip_serializing_if = "Vec::is_empty")]
    pub filter_groups: Vec<FilterGroup>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub order_attr: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub order_dir: Option<OrderDirection>,
    /// Kept as given, whether it arrived as a number or as numeric text.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, deserialize_with = "lenient::map", skip_serializing_if = "Option::is_none")]
    pub attr_map: Option<AttributeTypeMap>,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(columns.into_iter().map(Into::into));
        self
    }
    pub fn filter_group(mut self, group: FilterGroup) -> Self {
        self.filter_groups.push(group);
        self
    }
    pub fn order_by(mut self, attribute: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_attr = Some(attribute.into());
        self.order_dir = Some(direction);
        self
    }
    pub fn top(mut self, top: impl fmt::Display) -> Self {
        self.top = Some(top.to_string());
        self
    }
    pub fn attribute(mut self, name: impl Into<String>, info: impl Into<AttributeTypeInfo>) -> Self {
        self.attr_map
            .get_or_insert_with(AttributeTypeMap::new)
            .insert(name.into(), info.into());
        self
    }
    pub fn attr_map(mut self, attr_map: AttributeTypeMap) -> Self {
        self.attr_map = Some(attr_map);
        self
    }
}

impl FromStr for QuerySpec {
    type Err = OdataqError;

    /// Fails only when `s` is not JSON at all.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        Ok(QuerySpec::deserialize(value).unwrap_or_default())
    }
}
