//! Dropdown selector for choosing a season.

use crate::state::AppState;
use dioxus::prelude::*;

/// Season dropdown selector.
/// Reads available seasons from AppState and updates selected_season on change.
#[component]
pub fn SeasonSelector() -> Element {
    let mut state = use_context::<AppState>();
    let seasons = state.seasons.read().clone();
    let selected = (state.selected_season)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_season.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "season-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select Season: "
            }
            select {
                id: "season-select",
                onchange: on_change,
                for season in seasons.iter() {
                    option {
                        value: "{season}",
                        selected: *season == selected,
                        "{season}"
                    }
                }
            }
        }
    }
}
