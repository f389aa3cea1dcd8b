use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Expense Dashboard"</h1>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

/// Lists configuration problems the app recovered from.
#[component]
pub fn ConfigWarningBanner(#[prop(into)] warnings: MaybeSignal<Vec<String>>) -> impl IntoView {
    let warnings = Signal::derive(move || warnings.get());
    let has_warnings = move || warnings.with(|list| !list.is_empty());

    view! {
        <Show when=has_warnings>
            <div
                class="mb-4 rounded-lg border border-status-warning-border bg-status-warning-bg text-status-warning-text px-4 py-3"
                role="status"
            >
                <p class="text-sm font-semibold">"Configuration warnings"</p>
                <ul class="list-disc list-inside text-sm">
                    {move || {
                        warnings
                            .get()
                            .into_iter()
                            .map(|warning| view! { <li>{warning}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>
        </Show>
    }
}
