use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-fg">{"Dashboard"}</h2>
                    <p class="mt-1 text-sm text-fg-muted">{"Narrow expenses by date, status and category."}</p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
