//! Settings for the `odataq` command line tool.
//!
//! Layered lowest precedence first: built-in defaults, an optional
//! `odataq.toml` (or an explicitly given file), then `ODATAQ_*` environment
//! variables such as `ODATAQ_DEFAULT_ORDER_DIRECTION=desc`.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::spec::{OrderDirection, QuerySpec};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Used when a spec orders by an attribute but names no direction.
    pub default_order_direction: OrderDirection,
    /// Used when a spec has no `top` of its own.
    pub default_top: Option<u64>,
    /// Tracing filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_order_direction: OrderDirection::Asc,
            default_top: None,
            log_filter: "warn".to_string(),
            pretty: true,
        }
    }
}

impl Settings {
    /// Loads the layered settings. A given `path` must exist; the default
    /// `odataq.toml` in the working directory may be missing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("odataq").required(false),
        };
        let settings = Config::builder()
            .set_default("default_order_direction", "asc")?
            .set_default("log_filter", "warn")?
            .set_default("pretty", true)?
            .add_source(file)
            .add_source(Environment::with_prefix("ODATAQ").try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Fills in what `spec` leaves open from these settings.
    pub fn apply_defaults(&self, mut spec: QuerySpec) -> QuerySpec {
        if spec.order_attr.is_some() && spec.order_dir.is_none() {
            spec.order_dir = Some(self.default_order_direction);
        }
        if spec.top.is_none() {
            spec.top = self.default_top.map(|top| top.to_string());
        }
        spec
    }
}
