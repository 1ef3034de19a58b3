//! Header component with dashboard title and subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Dashboard title
    pub title: String,
    /// Optional subtitle line under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header showing the dashboard title and optional subtitle.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 26px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 14px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
