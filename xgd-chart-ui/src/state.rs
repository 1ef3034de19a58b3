//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use xgd_understat::{Analysis, ShotTable};

/// Shared application state for the shot dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Full shot table (None until parsed; written once at startup)
    pub table: Signal<Option<ShotTable>>,
    /// Whether the app is still parsing the embedded data
    pub loading: Signal<bool>,
    /// Fatal error raised while loading the table
    pub load_error: Signal<Option<String>>,
    /// Season labels present in the table, ascending
    pub seasons: Signal<Vec<String>>,
    /// Currently selected season
    pub selected_season: Signal<String>,
    /// Currently selected analysis
    pub selected_analysis: Signal<Analysis>,
    /// Rendered SVG for the current selection
    pub chart_svg: Signal<Option<String>>,
    /// Per-analysis error for the current selection
    pub analysis_error: Signal<Option<String>>,
    /// Notice shown when the current selection has no rows
    pub empty_notice: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            load_error: Signal::new(None),
            seasons: Signal::new(Vec::new()),
            selected_season: Signal::new(String::new()),
            selected_analysis: Signal::new(Analysis::GoalsPerSeason),
            chart_svg: Signal::new(None),
            analysis_error: Signal::new(None),
            empty_notice: Signal::new(None),
        }
    }
}
