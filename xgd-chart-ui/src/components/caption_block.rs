//! Caption block shown under a chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CaptionBlockProps {
    pub text: String,
}

/// Short narrative line describing the current chart.
#[component]
pub fn CaptionBlock(props: CaptionBlockProps) -> Element {
    rsx! {
        p {
            style: "margin: 8px 0 0 0; font-size: 12px; color: #555;",
            "{props.text}"
        }
    }
}
