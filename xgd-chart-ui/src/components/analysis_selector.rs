//! Radio group for choosing one of the canned analyses.

use crate::state::AppState;
use dioxus::prelude::*;
use xgd_understat::Analysis;

/// Analysis radio selector, one option per canned analysis.
#[component]
pub fn AnalysisSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.selected_analysis)();

    rsx! {
        div {
            style: "margin: 8px 0;",
            span {
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Choose an analysis:"
            }
            for analysis in Analysis::ALL {
                label {
                    style: "display: block; margin: 4px 0; cursor: pointer;",
                    input {
                        r#type: "radio",
                        name: "analysis",
                        value: analysis.label(),
                        checked: analysis == current,
                        onchange: move |_| {
                            state.selected_analysis.set(analysis);
                        },
                        style: "margin-right: 6px;",
                    }
                    {analysis.label()}
                }
            }
        }
    }
}
