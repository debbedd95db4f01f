//! Session state for the input -> analyzing -> results flow

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::AnalysisResult;

/// Phase of the analysis flow; single source of truth for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppPhase {
    Input,
    Analyzing,
    Results,
}

/// How the document was supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Url,
    Text,
}

/// Progress through the orchestration steps, 0-100
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProgressState {
    pub current_step: String,
    pub progress: u8,
    pub total_steps: usize,
    pub current_step_index: usize,
}

/// An analysis request as submitted by the user
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    pub input_mode: InputMode,
    pub content: String,
}

/// The session state store
///
/// Invariants:
/// - `analysis` is `Some` iff `phase == Results`
/// - `error` is `Some` only when `phase == Input` after a failed attempt
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalyzerSession {
    pub phase: AppPhase,
    pub input_mode: InputMode,
    pub analysis: Option<AnalysisResult>,
    pub error: Option<String>,
    pub progress: ProgressState,
}

impl Default for AnalyzerSession {
    fn default() -> Self {
        Self {
            phase: AppPhase::Input,
            input_mode: InputMode::Url,
            analysis: None,
            error: None,
            progress: ProgressState::default(),
        }
    }
}

impl AnalyzerSession {
    /// Clear results and error, returning to the input phase.
    /// The chosen input mode is preserved.
    pub fn start_new_analysis(&mut self) {
        self.phase = AppPhase::Input;
        self.analysis = None;
        self.error = None;
        self.progress = ProgressState::default();
    }

    /// Restore the full initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
