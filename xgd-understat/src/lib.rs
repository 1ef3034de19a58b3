//! Core library for the shot dashboard: typed shot-event records, CSV
//! parsing, season filtering, and the eight analysis pipelines.

pub mod analysis;
pub mod error;
pub mod shot;
pub mod table;

pub use analysis::{Analysis, AnalysisOutput};
pub use error::{AnalysisError, DataLoadError};
pub use shot::ShotEvent;
pub use table::ShotTable;
