use crate::config::{self, InitialFilters, LoadedConfig};
use crate::state::filters::Category;
use leptos::*;

/// Owns the dashboard's filter values; the filter bar only reads them and
/// reports changes back through the handlers below.
#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub date_filter: RwSignal<String>,
    pub status_filter: RwSignal<String>,
    pub category_filter: RwSignal<String>,
    pub categories: Signal<Vec<Category>>,
    pub config_warnings: Signal<Vec<String>>,
    initial: StoredValue<InitialFilters>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let loaded = use_context::<LoadedConfig>().unwrap_or_else(config::load);
        let LoadedConfig { filters, warnings } = loaded;

        let date_filter = create_rw_signal(filters.date.value().to_string());
        let status_filter = create_rw_signal(filters.status.value().to_string());
        let category_filter = create_rw_signal(filters.category.clone());
        let categories = filters.categories.clone();

        Self {
            date_filter,
            status_filter,
            category_filter,
            categories: Signal::derive(move || categories.clone()),
            config_warnings: Signal::derive(move || warnings.clone()),
            initial: store_value(filters),
        }
    }

    pub fn handle_date_change(&self) -> impl Fn(String) {
        let date_filter = self.date_filter;
        move |value| date_filter.set(value)
    }

    pub fn handle_status_change(&self) -> impl Fn(String) {
        let status_filter = self.status_filter;
        move |value| status_filter.set(value)
    }

    pub fn handle_category_change(&self) -> impl Fn(String) {
        let category_filter = self.category_filter;
        move |value| category_filter.set(value)
    }

    /// Restores the values the page started with.
    pub fn reset(&self) {
        self.initial.with_value(|initial| {
            self.date_filter.set(initial.date.value().to_string());
            self.status_filter.set(initial.status.value().to_string());
            self.category_filter.set(initial.category.clone());
        });
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    DashboardViewModel::new()
}
