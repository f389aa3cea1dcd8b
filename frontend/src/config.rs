use crate::state::filters::{Category, DateFilter, FilterParseError, StatusFilter, ALL_SENTINEL};
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Optional page global: `window.__EXPENSE_DASHBOARD_CONFIG = { categories: [{ id }], ... }`.
pub const CONFIG_GLOBAL: &str = "__EXPENSE_DASHBOARD_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub categories: Vec<Category>,
    pub date_filter: Option<String>,
    pub status_filter: Option<String>,
    pub category_filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("runtime config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("runtime config global `{0}` could not be read")]
    Unreadable(&'static str),
    #[error("initial category {0:?} is not one of the configured categories")]
    UnknownCategory(String),
    #[error(transparent)]
    Filter(#[from] FilterParseError),
}

/// Filter values and category list the dashboard starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialFilters {
    pub date: DateFilter,
    pub status: StatusFilter,
    pub category: String,
    pub categories: Vec<Category>,
}

impl Default for InitialFilters {
    fn default() -> Self {
        Self {
            date: DateFilter::default(),
            status: StatusFilter::default(),
            category: ALL_SENTINEL.to_string(),
            categories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub filters: InitialFilters,
    pub warnings: Vec<String>,
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Turns raw values into typed initial filters. Anything that does not
    /// resolve is replaced by its default and reported.
    pub fn resolve(self) -> (InitialFilters, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let date = parse_or_default(self.date_filter.as_deref(), &mut errors);
        let status = parse_or_default(self.status_filter.as_deref(), &mut errors);

        // Keep the owner's category in step with the option list.
        let category = match self.category_filter {
            None => ALL_SENTINEL.to_string(),
            Some(id) if id == ALL_SENTINEL || self.categories.iter().any(|c| c.id == id) => id,
            Some(id) => {
                errors.push(ConfigError::UnknownCategory(id));
                ALL_SENTINEL.to_string()
            }
        };

        let filters = InitialFilters {
            date,
            status,
            category,
            categories: self.categories,
        };
        (filters, errors)
    }
}

fn parse_or_default<T>(raw: Option<&str>, errors: &mut Vec<ConfigError>) -> T
where
    T: FromStr<Err = FilterParseError> + Default,
{
    match raw.map(str::parse::<T>) {
        None => T::default(),
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            errors.push(err.into());
            T::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global() -> Result<Option<String>, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into())
        .map_err(|_| ConfigError::Unreadable(CONFIG_GLOBAL))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json =
        js_sys::JSON::stringify(&value).map_err(|_| ConfigError::Unreadable(CONFIG_GLOBAL))?;
    // `JSON.stringify` yields `undefined` for functions and symbols.
    json.as_string()
        .map(Some)
        .ok_or(ConfigError::Unreadable(CONFIG_GLOBAL))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global() -> Result<Option<String>, ConfigError> {
    Ok(None)
}

/// Reads the page global once. Never fails: problems are logged and the
/// affected values fall back to their defaults.
pub fn load() -> LoadedConfig {
    let raw = read_global().and_then(|raw| raw.as_deref().map(RuntimeConfig::from_json).transpose());
    let (filters, errors) = match raw {
        Ok(config) => config.unwrap_or_default().resolve(),
        Err(err) => (InitialFilters::default(), vec![err]),
    };
    for err in &errors {
        warn!("{err}; falling back to defaults");
    }
    LoadedConfig {
        filters,
        warnings: errors.iter().map(ToString::to_string).collect(),
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_global(value: &JsValue) {
        let window = web_sys::window().unwrap();
        js_sys::Reflect::set(&window, &CONFIG_GLOBAL.into(), value).unwrap();
    }

    fn clear_global() {
        let window = web_sys::window().unwrap();
        js_sys::Reflect::delete_property(&window, &CONFIG_GLOBAL.into()).unwrap();
    }

    #[wasm_bindgen_test]
    fn unserializable_global_is_reported() {
        set_global(&js_sys::Function::new_no_args("return 1;"));
        let loaded = load();
        clear_global();

        assert_eq!(loaded.filters, InitialFilters::default());
        assert_eq!(
            loaded.warnings,
            vec![format!("runtime config global `{CONFIG_GLOBAL}` could not be read")]
        );
    }

    #[wasm_bindgen_test]
    fn object_global_is_read() {
        let raw = r#"{"categories":[{"id":"Travel"}],"category_filter":"Travel"}"#;
        set_global(&js_sys::JSON::parse(raw).unwrap());
        let loaded = load();
        clear_global();

        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.filters.category, "Travel");
        assert_eq!(loaded.filters.categories, vec![Category::new("Travel")]);
    }

    #[wasm_bindgen_test]
    fn missing_global_uses_defaults() {
        clear_global();
        assert_eq!(load(), LoadedConfig::default());
    }
}
