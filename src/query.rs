//! Assembly of the final query string.

use tracing::trace;

use crate::datatype::{lookup_storage_name, AttributeTypeMap};
use crate::filter::compose;
use crate::spec::QuerySpec;

/// Rewrites lookup columns to their `_name_value` storage form. Columns the
/// map does not know, or every column when there is no map, pass through.
pub fn build_select(columns: &[String], attr_map: Option<&AttributeTypeMap>) -> Vec<String> {
    columns
        .iter()
        .map(|column| match attr_map.and_then(|map| map.get(column)) {
            Some(info) if info.is_lookup() => lookup_storage_name(column),
            _ => column.clone(),
        })
        .collect()
}

/// Builds `?$select=..&$filter=..&$orderby=..&$top=..`, leaving out every
/// part the spec does not ask for. An empty spec yields the empty string.
pub fn build(spec: &QuerySpec) -> String {
    let attr_map = spec.attr_map.as_ref();
    let mut parts: Vec<String> = Vec::with_capacity(4);

    let columns = build_select(&spec.select, attr_map);
    if !columns.is_empty() {
        parts.push(format!("$select={}", columns.join(",")));
    }
    let filter = compose(&spec.filter_groups, attr_map);
    if !filter.is_empty() {
        parts.push(format!("$filter={}", filter));
    }
    if let Some(order_attr) = spec.order_attr.as_deref().filter(|a| !a.is_empty()) {
        parts.push(format!("$orderby={} {}", order_attr, spec.order_dir.unwrap_or_default()));
    }
    if let Some(top) = spec.top.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        parts.push(format!("$top={}", top));
    }

    if parts.is_empty() {
        return String::new();
    }
    let query = format!("?{}", parts.join("&"));
    trace!(%query, "query built");
    query
}
