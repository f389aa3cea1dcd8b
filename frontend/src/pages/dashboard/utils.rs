use crate::state::filters::{DateFilter, StatusFilter, ALL_CATEGORIES_LABEL, ALL_SENTINEL};

pub fn date_label(value: &str) -> String {
    value
        .parse::<DateFilter>()
        .map(|filter| filter.label().to_string())
        .unwrap_or_else(|_| value.to_string())
}

pub fn status_label(value: &str) -> String {
    value
        .parse::<StatusFilter>()
        .map(|filter| filter.label().to_string())
        .unwrap_or_else(|_| value.to_string())
}

pub fn category_label(value: &str) -> String {
    if value == ALL_SENTINEL {
        ALL_CATEGORIES_LABEL.to_string()
    } else {
        value.to_string()
    }
}

/// One-line description of the current selection, e.g. `This Month · Pending · Travel`.
pub fn describe_active_filters(date: &str, status: &str, category: &str) -> String {
    format!(
        "{} · {} · {}",
        date_label(date),
        status_label(status),
        category_label(category)
    )
}
