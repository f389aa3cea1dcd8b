#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::config::{InitialFilters, LoadedConfig};
    use crate::state::filters::Category;

    pub fn sample_categories() -> Vec<Category> {
        vec![Category::new("Travel"), Category::new("Food")]
    }

    /// Config as the loader would produce it for the sample categories.
    pub fn loaded_config(category: &str) -> LoadedConfig {
        LoadedConfig {
            filters: InitialFilters {
                category: category.to_string(),
                categories: sample_categories(),
                ..InitialFilters::default()
            },
            warnings: Vec::new(),
        }
    }
}
