use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Reserved value meaning "no filtering on this dimension".
pub const ALL_SENTINEL: &str = "all";
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
    #[error("unknown date filter: {0:?}")]
    UnknownDateFilter(String),
    #[error("unknown status filter: {0:?}")]
    UnknownStatusFilter(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateFilter {
    Today,
    Last7Days,
    #[default]
    ThisMonth,
    AllTime,
}

impl DateFilter {
    /// Display order of the date selector.
    pub const ALL: [DateFilter; 4] = [
        DateFilter::Today,
        DateFilter::Last7Days,
        DateFilter::ThisMonth,
        DateFilter::AllTime,
    ];

    pub fn value(self) -> &'static str {
        match self {
            DateFilter::Today => "today",
            DateFilter::Last7Days => "last-7-days",
            DateFilter::ThisMonth => "this-month",
            DateFilter::AllTime => "all-time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateFilter::Today => "Today",
            DateFilter::Last7Days => "Last 7 Days",
            DateFilter::ThisMonth => "This Month",
            DateFilter::AllTime => "All Time",
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for DateFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFilter::ALL
            .into_iter()
            .find(|filter| filter.value() == s)
            .ok_or_else(|| FilterParseError::UnknownDateFilter(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Approved,
    Pending,
    Rejected,
}

impl StatusFilter {
    /// Display order of the status selector.
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Approved,
        StatusFilter::Pending,
        StatusFilter::Rejected,
    ];

    pub fn value(self) -> &'static str {
        match self {
            StatusFilter::All => ALL_SENTINEL,
            StatusFilter::Approved => "Approved",
            StatusFilter::Pending => "Pending",
            StatusFilter::Rejected => "Rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            other => other.value(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for StatusFilter {
    type Err = FilterParseError;

    // Status values are matched case-sensitively, as the option values are.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusFilter::ALL
            .into_iter()
            .find(|filter| filter.value() == s)
            .ok_or_else(|| FilterParseError::UnknownStatusFilter(s.to_string()))
    }
}

/// A category the dashboard can be narrowed to. The id doubles as the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
}

impl Category {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub fn date_options() -> Vec<SelectOption> {
    DateFilter::ALL
        .into_iter()
        .map(|filter| SelectOption::new(filter.value(), filter.label()))
        .collect()
}

pub fn status_options() -> Vec<SelectOption> {
    StatusFilter::ALL
        .into_iter()
        .map(|filter| SelectOption::new(filter.value(), filter.label()))
        .collect()
}

/// The sentinel entry followed by one entry per category, in input order.
/// Duplicate ids are passed through untouched.
pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL_SENTINEL, ALL_CATEGORIES_LABEL))
        .chain(
            categories
                .iter()
                .map(|category| SelectOption::new(category.id.clone(), category.id.clone())),
        )
        .collect()
}
