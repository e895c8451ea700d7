//! Aura Core Library
//!
//! Request/result models and the text analysis heuristic shared by the
//! web server and the CLI.

pub mod analysis;

pub use analysis::model::{AnalysisRequest, AnalysisResult};
pub use analysis::{analyze, POSITIVE_MARKERS};
