//! Chart frame that injects a rendered SVG string.

use dioxus::prelude::*;

/// Props for ChartFrame
#[derive(Props, Clone, PartialEq)]
pub struct ChartFrameProps {
    /// Rendered SVG markup for the current selection
    pub svg: String,
    /// Optional minimum height in pixels
    #[props(default = 420)]
    pub min_height: u32,
}

/// A container div that renders an SVG chart produced off-DOM.
#[component]
pub fn ChartFrame(props: ChartFrameProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                style: "width: 100%;",
                dangerous_inner_html: "{props.svg}",
            }
        }
    }
}
