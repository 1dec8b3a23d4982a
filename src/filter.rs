//! Filter conditions and groups, and the builders that turn them into `$filter` text.
//!
//! Nothing in here fails. A condition that is incomplete, carries an unknown
//! operator, or applies a string function to a non-string attribute is dropped
//! from its group; a group left without conditions is dropped from the
//! composition and does not use up an inter-group operator.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::datatype::{lookup_storage_name, AttributeTypeMap, SemanticType};
use crate::expression::{Expression, Junction};
use crate::format::{escape_odata_string, format_value, quote};
use crate::infer::guess;
use crate::lenient;
use crate::operator::{OperatorClass, OperatorToken};

// ------------- Filter Condition -------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    #[serde(default, alias = "attr", deserialize_with = "lenient::text")]
    pub attribute: Option<String>,
    #[serde(default, alias = "op", deserialize_with = "lenient::text")]
    pub operator: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FilterCondition {
    pub fn new(attribute: impl Into<String>, operator: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: Some(attribute.into()),
            operator: Some(operator.into()),
            value: Some(value.into()),
        }
    }
    /// A condition without a value, as used by `eq null` and `ne null`.
    pub fn valueless(attribute: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            attribute: Some(attribute.into()),
            operator: Some(operator.into()),
            value: None,
        }
    }
}

// ------------- Filter Type -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterType {
    #[default]
    And,
    Or,
    Not,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::And => "and",
            FilterType::Or => "or",
            FilterType::Not => "not",
        }
    }
}
impl From<String> for FilterType {
    // blank or unrecognized text is an "and" group
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "or" => FilterType::Or,
            "not" => FilterType::Not,
            _ => FilterType::And,
        }
    }
}
impl From<FilterType> for String {
    fn from(t: FilterType) -> String {
        t.as_str().to_string()
    }
}
impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ------------- Filter Group -------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroup {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub filter_type: FilterType,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub filters: Vec<FilterCondition>,
    /// Joins this group to the previous non-empty group; "and" when absent.
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub inter_group_operator: Option<Junction>,
}

impl FilterGroup {
    pub fn new(filter_type: FilterType, filters: Vec<FilterCondition>) -> Self {
        Self { filter_type, filters, inter_group_operator: None }
    }
    pub fn and(filters: Vec<FilterCondition>) -> Self {
        Self::new(FilterType::And, filters)
    }
    pub fn or(filters: Vec<FilterCondition>) -> Self {
        Self::new(FilterType::Or, filters)
    }
    pub fn not(filters: Vec<FilterCondition>) -> Self {
        Self::new(FilterType::Not, filters)
    }
    pub fn joined_by(mut self, junction: Junction) -> Self {
        self.inter_group_operator = Some(junction);
        self
    }
}

// ------------- Builders -------------
/// The declared type of `attribute` when known, otherwise a guess from the value.
pub fn resolve_type(attribute: &str, value: &str, attr_map: Option<&AttributeTypeMap>) -> SemanticType {
    attr_map
        .and_then(|map| map.get(attribute))
        .map(|info| info.attribute_type)
        .unwrap_or_else(|| guess(value))
}

/// Builds the fragment for a single condition, or `None` when it has to be dropped.
pub fn build_condition(condition: &FilterCondition, attr_map: Option<&AttributeTypeMap>) -> Option<Expression> {
    let attribute = condition.attribute.as_deref().filter(|a| !a.is_empty());
    let operator = condition.operator.as_deref().filter(|o| !o.is_empty());
    let (Some(attribute), Some(operator_text)) = (attribute, operator) else {
        debug!(attribute = ?condition.attribute, operator = ?condition.operator, "condition dropped: incomplete");
        return None;
    };
    let Some(operator) = OperatorToken::parse(operator_text) else {
        debug!(attribute, operator = operator_text, "condition dropped: unknown operator");
        return None;
    };
    let value = condition.value.as_deref();
    let semantic = resolve_type(attribute, value.unwrap_or_default(), attr_map);
    let target = match semantic {
        SemanticType::Lookup => lookup_storage_name(attribute),
        _ => attribute.to_string(),
    };

    match operator.class() {
        OperatorClass::NullCheck => Some(Expression::NullCheck { attribute: target, operator }),
        OperatorClass::StringFunction if !semantic.supports_string_functions() => {
            debug!(attribute, %operator, %semantic, "condition dropped: operator not valid for type");
            None
        }
        OperatorClass::StringFunction => {
            let value = required_value(attribute, operator, value)?;
            Some(Expression::Function {
                attribute: target,
                operator,
                operand: quote(&escape_odata_string(value)),
            })
        }
        OperatorClass::Comparison => {
            let value = required_value(attribute, operator, value)?;
            Some(Expression::Compare {
                attribute: target,
                operator,
                operand: format_value(value, semantic),
            })
        }
    }
}

fn required_value<'a>(attribute: &str, operator: OperatorToken, value: Option<&'a str>) -> Option<&'a str> {
    if value.is_none() {
        debug!(attribute, %operator, "condition dropped: missing value");
    }
    value
}

/// Builds one group, or `None` when none of its conditions survive.
pub fn build_group(group: &FilterGroup, attr_map: Option<&AttributeTypeMap>) -> Option<Expression> {
    let members: Vec<Expression> = group
        .filters
        .iter()
        .filter_map(|condition| build_condition(condition, attr_map))
        .collect();
    if members.is_empty() {
        debug!(filter_type = %group.filter_type, conditions = group.filters.len(), "group dropped: no valid conditions");
        return None;
    }
    Some(match group.filter_type {
        FilterType::Not => Expression::Not(members),
        FilterType::And => Expression::Group { junction: Junction::And, members },
        FilterType::Or => Expression::Group { junction: Junction::Or, members },
    })
}

/// Chains every non-empty group, each joined to its predecessor by its own
/// inter-group operator. The first surviving group's operator is unused.
pub fn compose_expression(groups: &[FilterGroup], attr_map: Option<&AttributeTypeMap>) -> Option<Expression> {
    Expression::chain(groups.iter().filter_map(|group| {
        build_group(group, attr_map).map(|expression| (group.inter_group_operator.unwrap_or_default(), expression))
    }))
}

/// [`compose_expression`] as text; empty when no group survives.
pub fn compose(groups: &[FilterGroup], attr_map: Option<&AttributeTypeMap>) -> String {
    compose_expression(groups, attr_map)
        .map(|expression| expression.to_string())
        .unwrap_or_default()
}
