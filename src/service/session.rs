//! The analyzer session service: input -> analyzing -> results
//!
//! Owns the single session state store and runs the orchestration over the
//! document pipeline. Progress mirrors the step display of the original flow.

use std::sync::{Arc, Mutex};

use crate::model::{
    AnalysisRequest, AnalysisResult, AnalyzerSession, AppPhase, InputMode, ProgressState,
};
use crate::service::pipeline::{DocumentPipeline, PipelineError};

const URL_STEPS: &[&str] = &[
    "Fetching webpage content...",
    "Extracting Terms of Service...",
    "Analyzing document...",
];
const TEXT_STEPS: &[&str] = &["Analyzing document..."];

/// Drives the three-phase analysis flow over a shared session
pub struct SessionService {
    pipeline: Arc<dyn DocumentPipeline>,
    state: Mutex<AnalyzerSession>,
    /// Serializes analyses: at most one in-flight request per session
    run_guard: tokio::sync::Mutex<()>,
}

impl SessionService {
    pub fn new(pipeline: Arc<dyn DocumentPipeline>) -> Self {
        Self {
            pipeline,
            state: Mutex::new(AnalyzerSession::default()),
            run_guard: tokio::sync::Mutex::new(()),
        }
    }

    /// Current session state
    pub fn snapshot(&self) -> AnalyzerSession {
        self.state.lock().expect("session lock poisoned").clone()
    }

    /// Clear results and error, returning to the input phase
    pub fn start_new_analysis(&self) {
        self.with_state(|session| session.start_new_analysis());
    }

    /// Restore the full initial state
    pub fn reset(&self) {
        self.with_state(|session| session.reset());
    }

    /// Run a full analysis
    ///
    /// Transitions to `Analyzing`, runs the pipeline (URL mode adds the fetch
    /// and extraction steps), then lands in `Results` with the analysis or
    /// back in `Input` with a user-facing error message.
    pub async fn start_analysis(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisResult, PipelineError> {
        let _running = self.run_guard.lock().await;

        let steps = match request.input_mode {
            InputMode::Url => URL_STEPS,
            InputMode::Text => TEXT_STEPS,
        };
        let total = steps.len();

        self.with_state(|session| {
            session.input_mode = request.input_mode;
            session.phase = AppPhase::Analyzing;
            session.error = None;
            session.analysis = None;
            session.progress = ProgressState {
                current_step: steps[0].to_string(),
                progress: 0,
                total_steps: total,
                current_step_index: 0,
            };
        });

        match self.run_pipeline(&request, steps).await {
            Ok(analysis) => {
                self.with_state(|session| {
                    session.analysis = Some(analysis.clone());
                    session.phase = AppPhase::Results;
                    session.progress = ProgressState {
                        current_step: "Analysis complete!".to_string(),
                        progress: 100,
                        total_steps: total,
                        current_step_index: total,
                    };
                });
                Ok(analysis)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "Analysis failed, returning session to input");
                self.with_state(|session| {
                    session.error = Some(message);
                    session.phase = AppPhase::Input;
                    session.analysis = None;
                    session.progress = ProgressState::default();
                });
                Err(e)
            }
        }
    }

    async fn run_pipeline(
        &self,
        request: &AnalysisRequest,
        steps: &[&str],
    ) -> Result<AnalysisResult, PipelineError> {
        let total = steps.len();
        let mut tos_text = request.content.clone();

        if request.input_mode == InputMode::Url {
            self.set_progress(steps[0], step_percent(0.5, total), 0, total);
            self.set_progress(steps[1], step_percent(1.0, total), 1, total);

            tos_text = self.pipeline.extract_from_url(&request.content).await?;

            self.set_progress(steps[1], step_percent(2.0, total), 1, total);
        }

        let final_index = match request.input_mode {
            InputMode::Url => 2,
            InputMode::Text => 0,
        };
        self.set_progress(
            steps[final_index],
            step_percent(final_index as f64 + 0.5, total),
            final_index,
            total,
        );

        self.pipeline.analyze(&tos_text).await
    }

    fn set_progress(&self, step: &str, progress: u8, index: usize, total: usize) {
        self.with_state(|session| {
            session.progress = ProgressState {
                current_step: step.to_string(),
                progress,
                total_steps: total,
                current_step_index: index,
            };
        });
    }

    fn with_state(&self, f: impl FnOnce(&mut AnalyzerSession)) {
        let mut state = self.state.lock().expect("session lock poisoned");
        f(&mut state);
    }
}

fn step_percent(steps_done: f64, total_steps: usize) -> u8 {
    ((steps_done / total_steps as f64) * 100.0).round() as u8
}
