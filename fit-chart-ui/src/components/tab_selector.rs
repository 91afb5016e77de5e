//! Vertical tab selector.

use crate::location;
use crate::state::AppState;
use dioxus::prelude::*;
use fit_core::Tab;

fn tab_style(selected: bool) -> &'static str {
    if selected {
        "text-align: left; padding: 12px; border: none; border-left: 4px solid #1976D2; background: #E3F2FD; cursor: pointer;"
    } else {
        "text-align: left; padding: 12px; border: none; border-left: 4px solid transparent; background: #FAFAFA; cursor: pointer;"
    }
}

/// One button per tab. Clicking a tab selects it by value, resetting its year
/// dropdown, and mirrors the value into the URL fragment.
#[component]
pub fn TabSelector() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        nav {
            style: "display: flex; flex-direction: column; gap: 4px; width: 20%; position: fixed; height: 100vh; font-size: 1.5em;",
            for tab in Tab::ALL {
                button {
                    key: "{tab.value()}",
                    value: "{tab.value()}",
                    style: tab_style(active == Some(tab)),
                    onclick: move |_| {
                        let value = tab.value();
                        state.select_tab(Tab::from_value(value));
                        location::set_fragment(value);
                    },
                    "{tab.label()}"
                }
            }
        }
    }
}
