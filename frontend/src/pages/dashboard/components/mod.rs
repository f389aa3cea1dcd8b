pub mod active_filters;

pub use active_filters::ActiveFiltersSummary;
