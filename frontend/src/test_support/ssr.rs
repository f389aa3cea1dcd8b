use crate::config::LoadedConfig;
use leptos::*;

/// Runs `f` inside a fresh reactive runtime, disposed afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Server-renders a view to HTML so tests can assert on the markup.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}

/// Renders a page that reads its filters from context, as if `config` had
/// been loaded from the page global.
pub fn render_with_config<F, N>(config: LoadedConfig, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_context(config);
        view()
    })
}
