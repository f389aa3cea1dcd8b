use crate::state::filters::{
    category_options, date_options, status_options, Category, SelectOption,
};
use leptos::*;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Date,
    Status,
    Category,
}

impl FilterField {
    /// Used as the `id` and `name` of the field's `<select>`.
    pub fn control_name(self) -> &'static str {
        match self {
            FilterField::Date => "date-filter",
            FilterField::Status => "status-filter",
            FilterField::Category => "category-filter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Date => "Date",
            FilterField::Status => "Status",
            FilterField::Category => "Category",
        }
    }
}

/// The owner's setters, one per filter value.
#[derive(Clone, Copy)]
pub struct FilterSetters {
    date: Callback<String>,
    status: Callback<String>,
    category: Callback<String>,
}

impl FilterSetters {
    pub fn new(
        date: Callback<String>,
        status: Callback<String>,
        category: Callback<String>,
    ) -> Self {
        Self {
            date,
            status,
            category,
        }
    }

    /// Forwards a user selection to the setter owning `field`, and to no other.
    pub fn dispatch(&self, field: FilterField, value: String) {
        debug!("{} changed to {:?}", field.control_name(), value);
        let setter = match field {
            FilterField::Date => self.date,
            FilterField::Status => self.status,
            FilterField::Category => self.category,
        };
        setter.call(value);
    }
}

/// Date, status and category dropdowns bound to values owned by the caller.
///
/// The bar keeps no state of its own: each control displays the option whose
/// value equals the current prop and reports changes through the matching
/// setter. Values outside the option lists are not validated; no option is
/// marked selected and the browser falls back to showing the first one.
#[component]
pub fn FilterBar(
    #[prop(into)] date_filter: MaybeSignal<String>,
    #[prop(into)] set_date_filter: Callback<String>,
    #[prop(into)] status_filter: MaybeSignal<String>,
    #[prop(into)] set_status_filter: Callback<String>,
    #[prop(into)] category_filter: MaybeSignal<String>,
    #[prop(into)] set_category_filter: Callback<String>,
    #[prop(into)] categories: MaybeSignal<Vec<Category>>,
) -> impl IntoView {
    let setters = FilterSetters::new(set_date_filter, set_status_filter, set_category_filter);
    let category_choices = Signal::derive(move || categories.with(|list| category_options(list)));

    view! {
        <div class="flex flex-col gap-3 md:flex-row md:items-end bg-surface-elevated border border-border rounded-lg px-4 py-3 shadow-sm">
            <FilterSelect
                field={FilterField::Date}
                current=date_filter
                options=Signal::derive(date_options)
                setters=setters
            />
            <FilterSelect
                field={FilterField::Status}
                current=status_filter
                options=Signal::derive(status_options)
                setters=setters
            />
            <FilterSelect
                field={FilterField::Category}
                current=category_filter
                options=category_choices
                setters=setters
            />
        </div>
    }
}

#[component]
fn FilterSelect(
    field: FilterField,
    current: MaybeSignal<String>,
    options: Signal<Vec<SelectOption>>,
    setters: FilterSetters,
) -> impl IntoView {
    let name = field.control_name();
    let current = Signal::derive(move || current.get());

    view! {
        <div class="flex flex-col gap-1">
            <label class="text-xs font-medium text-fg-muted" for=name>
                {field.label()}
            </label>
            <select
                id=name
                name=name
                class="border border-form-control-border bg-form-control-bg text-form-control-text rounded-md px-2 py-1 text-sm"
                prop:value=move || current.get()
                on:change=move |ev| setters.dispatch(field, event_target_value(&ev))
            >
                {move || {
                    let selected_value = current.get();
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let is_selected = option.value == selected_value;
                            view! {
                                <option value=option.value selected=is_selected>
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
