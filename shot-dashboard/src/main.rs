//! Player shot dashboard.
//!
//! Season selector plus eight canned analyses over an embedded shot-event
//! table, rendered as inline SVG charts.
//!
//! Data flow:
//! 1. `include_str!` embeds `fixtures/shots.csv` into the WASM binary.
//! 2. On mount: parse the CSV into the typed shot table and list its seasons.
//! 3. On season or analysis change: run the selected pipeline over the
//!    filtered season and inject the freshly rendered SVG.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use xgd_chart_ui::components::{
    AnalysisSelector, CaptionBlock, ChartFrame, ChartHeader, EmptyNotice, ErrorDisplay,
    LoadingSpinner, SeasonSelector,
};
use xgd_chart_ui::state::AppState;
use xgd_understat::ShotTable;

// Embed the shot-event table at compile time.
const SHOTS_CSV: &str = include_str!("../../fixtures/shots.csv");

/// The player all player-scoped analyses are run for.
const SUBJECT_PLAYER: &str = "Mohamed Salah";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("shot-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse the embedded CSV once on mount ───
    use_effect(move || {
        match ShotTable::from_csv(SHOTS_CSV) {
            Ok(table) => {
                let seasons = table.seasons();
                if seasons.is_empty() {
                    state.load_error.set(Some("No shot data available.".to_string()));
                    state.loading.set(false);
                    return;
                }
                info!(
                    "loaded {} shot events across {} seasons",
                    table.len(),
                    seasons.len()
                );
                state.selected_season.set(seasons[0].clone());
                state.seasons.set(seasons);
                state.table.set(Some(table));
                state.loading.set(false);
            }
            Err(err) => {
                state.load_error.set(Some(err.to_string()));
                state.loading.set(false);
            }
        }
    });

    // ─── Effect 2: Filter, analyse, and render on every selection change ───
    // Re-runs whenever loading, selected_season, or selected_analysis change.
    use_effect(move || {
        let loading = (state.loading)();
        let season = (state.selected_season)();
        let analysis = (state.selected_analysis)();

        if loading || season.is_empty() {
            return;
        }

        // Clone the table out of the signal immediately so the read borrow
        // doesn't interfere with Dioxus signal tracking.
        let table = state.table.read().clone();
        let Some(table) = table else {
            return;
        };

        state.analysis_error.set(None);
        state.empty_notice.set(None);

        let shots = table.filter_season(&season);
        match analysis.run(&shots, SUBJECT_PLAYER) {
            Ok(output) if output.is_empty() => {
                state.chart_svg.set(None);
                state
                    .empty_notice
                    .set(Some("No shot data available for this selection.".to_string()));
            }
            Ok(output) => match xgd_charts::render(&output, &season) {
                Ok(svg) => state.chart_svg.set(Some(svg)),
                Err(err) => {
                    warn!("chart render failed: {}", err);
                    state.chart_svg.set(None);
                    state.analysis_error.set(Some(err.to_string()));
                }
            },
            Err(err) => {
                state.chart_svg.set(None);
                state.analysis_error.set(Some(err.to_string()));
            }
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.load_error.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: format!("{} Performance Analysis Dashboard", SUBJECT_PLAYER),
                    subtitle: "An in-depth look at goals, shots, and chance creation.".to_string(),
                }

                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",
                    ControlsColumn {}
                    ChartPanel {}
                }
            }
        }
    }
}

/// Sidebar column with the season and analysis selectors.
#[component]
fn ControlsColumn() -> Element {
    rsx! {
        div {
            style: "flex: 0 0 240px; padding: 12px; border: 1px solid #e0e0e0; border-radius: 4px;",
            SeasonSelector {}
            AnalysisSelector {}
        }
    }
}

/// Main panel showing the current chart, inline errors, and the caption.
#[component]
fn ChartPanel() -> Element {
    let state = use_context::<AppState>();
    let analysis = (state.selected_analysis)();

    rsx! {
        div {
            style: "flex: 1 1 auto; min-width: 0;",
            if let Some(err) = state.analysis_error.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if let Some(notice) = state.empty_notice.read().as_ref() {
                EmptyNotice { message: notice.clone() }
            } else if let Some(svg) = state.chart_svg.read().as_ref() {
                ChartFrame { svg: svg.clone() }
            }
            CaptionBlock { text: analysis.caption().to_string() }
        }
    }
}
