use crate::components::{filter_bar::FilterBar, layout::ConfigWarningBanner};
use crate::pages::dashboard::{
    components::ActiveFiltersSummary, layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <DashboardFrame>
            <ConfigWarningBanner warnings=vm.config_warnings />
            <div class="space-y-4">
                <FilterBar
                    date_filter=vm.date_filter
                    set_date_filter=Callback::new(vm.handle_date_change())
                    status_filter=vm.status_filter
                    set_status_filter=Callback::new(vm.handle_status_change())
                    category_filter=vm.category_filter
                    set_category_filter=Callback::new(vm.handle_category_change())
                    categories=vm.categories
                />
                <ActiveFiltersSummary
                    date_filter=vm.date_filter
                    status_filter=vm.status_filter
                    category_filter=vm.category_filter
                    on_reset=Callback::new(move |_| vm.reset())
                />
            </div>
        </DashboardFrame>
    }
}
