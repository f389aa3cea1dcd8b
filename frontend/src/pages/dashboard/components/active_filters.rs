use crate::pages::dashboard::utils::describe_active_filters;
use leptos::*;

#[component]
pub fn ActiveFiltersSummary(
    #[prop(into)] date_filter: Signal<String>,
    #[prop(into)] status_filter: Signal<String>,
    #[prop(into)] category_filter: Signal<String>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let summary = move || {
        describe_active_filters(
            &date_filter.get(),
            &status_filter.get(),
            &category_filter.get(),
        )
    };

    view! {
        <div class="flex items-center justify-between gap-3 text-sm text-fg-muted bg-surface-elevated border border-border rounded-lg px-4 py-2 shadow-sm">
            <div class="flex items-center gap-2">
                <span class="font-medium text-fg">{"Showing"}</span>
                <span>{summary}</span>
            </div>
            <button
                type="button"
                class="text-sm text-fg-muted underline"
                on:click=move |_| on_reset.call(())
            >
                {"Reset"}
            </button>
        </div>
    }
}
