//! Dropdown selector for a tab's year.

use dioxus::prelude::*;
use fit_core::YearOptions;

#[derive(Props, Clone, PartialEq)]
pub struct YearSelectorProps {
    /// DOM id of the select element
    pub id: String,
    /// Years to offer
    pub options: YearOptions,
    /// Signal receiving the selected year
    pub year: Signal<Option<i32>>,
}

/// Year dropdown. Writes the chosen year into `year` on change.
#[component]
pub fn YearSelector(props: YearSelectorProps) -> Element {
    let mut year = props.year;
    let selected = year();

    let on_change = move |evt: Event<FormData>| {
        match evt.value().parse::<i32>() {
            Ok(value) => year.set(Some(value)),
            Err(e) => log::warn!("[FIT] ignoring year selection {:?}: {}", evt.value(), e),
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; width: 50%; font-size: 1.2em;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "Year: "
            }
            select {
                id: "{props.id}",
                onchange: on_change,
                for option_year in props.options.years().iter().copied() {
                    option {
                        key: "{option_year}",
                        value: "{option_year}",
                        selected: Some(option_year) == selected,
                        "{option_year}"
                    }
                }
            }
        }
    }
}
