//! odataq – OData query construction and response normalization.
//!
//! odataq turns a declarative [`spec::QuerySpec`] (wanted columns, filter
//! groups, ordering and paging) into an OData v4 query string, and turns the
//! assorted shapes an API may answer with into one canonical
//! `{ "entities": [...] }` shape.
//!
//! ## Modules
//! * [`datatype`] – The [`datatype::SemanticType`] enum and attribute metadata
//!   ([`datatype::AttributeTypeMap`]) supplied by a metadata provider.
//! * [`infer`] – Heuristic typing of literals when no metadata is available.
//! * [`format`] – Type-aware literal rendering and OData string escaping.
//! * [`operator`] – The fixed operator table ([`operator::FILTER_OPERATORS`]).
//! * [`expression`] – Structured `$filter` fragments and their rendering.
//! * [`filter`] – Conditions and groups, and the builders composing them.
//! * [`query`] – Assembly of `$select`, `$filter`, `$orderby` and `$top`.
//! * [`response`] – Response normalization and display-property selection.
//! * [`settings`] – Layered settings for the command line tool.
//!
//! ## Filters
//! A condition names an attribute, an operator token and (except for the null
//! checks) a value. Its type comes from the attribute map when present and is
//! guessed from the value otherwise. Lookup attributes are addressed through
//! their `_name_value` storage column. Conditions that cannot be rendered
//! (incomplete, unknown operator, `contains` on a number, ...) are dropped,
//! never reported: a malformed spec yields a smaller query, not an error.
//!
//! Conditions are collected in groups (`and`, `or`, `not`), and groups are
//! chained using each group's own inter-group operator.
//!
//! ## Quick Start
//! ```
//! use odataq::datatype::SemanticType;
//! use odataq::filter::{FilterCondition, FilterGroup};
//! use odataq::spec::{OrderDirection, QuerySpec};
//!
//! let spec = QuerySpec::new()
//!     .select(["name", "ownerid"])
//!     .attribute("ownerid", SemanticType::Lookup)
//!     .attribute("name", SemanticType::String)
//!     .filter_group(FilterGroup::and(vec![FilterCondition::new("name", "eq", "O'Brien")]))
//!     .order_by("name", OrderDirection::Desc)
//!     .top(10);
//! assert_eq!(
//!     odataq::query::build(&spec),
//!     "?$select=name,_ownerid_value&$filter=(name eq 'O''Brien')&$orderby=name desc&$top=10"
//! );
//! ```
//!
//! ## Responses
//! [`response::normalize`] accepts a bare array, `{ "value": [...] }`,
//! `{ "entities": [...], ... }` or any single value and always answers with an
//! `entities` array. [`response::select_display_properties`] then picks the
//! scalar, non-annotation properties of an entity in key order.
//!
//! Everything in here is synchronous and holds no state between calls.

pub mod datatype;
pub mod error;
pub mod expression;
pub mod filter;
pub mod format;
pub mod infer;
pub mod operator;
pub mod query;
pub mod response;
pub mod settings;
pub mod spec;

mod lenient;

pub use error::{OdataqError, Result};
pub use query::build;
pub use response::{normalize, select_display_properties};
