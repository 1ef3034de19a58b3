//! Informational notice for selections with no rows.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyNoticeProps {
    pub message: String,
}

/// Displays a non-fatal notice when a selection produces no data.
#[component]
pub fn EmptyNotice(props: EmptyNoticeProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #E3F2FD; color: #1565C0; border-radius: 4px; border: 1px solid #90CAF9;",
            "{props.message}"
        }
    }
}
