//! Reusable Dioxus RSX components for the shot dashboard.

mod analysis_selector;
mod caption_block;
mod chart_frame;
mod chart_header;
mod empty_notice;
mod error_display;
mod loading_spinner;
mod season_selector;

pub use analysis_selector::AnalysisSelector;
pub use caption_block::CaptionBlock;
pub use chart_frame::ChartFrame;
pub use chart_header::ChartHeader;
pub use empty_notice::EmptyNotice;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use season_selector::SeasonSelector;
