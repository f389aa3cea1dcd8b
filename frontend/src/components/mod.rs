pub mod filter_bar;
pub mod layout;

pub use filter_bar::{FilterBar, FilterField, FilterSetters};
