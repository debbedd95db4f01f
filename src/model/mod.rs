pub mod analysis;
pub mod config;
pub mod extracted;
pub mod session;

pub use analysis::{AnalysisResult, CriticalWarning, PointKind, PointOfInterest, WarningSeverity};
pub use config::{Config, FetcherConfig};
pub use session::{AnalysisRequest, AnalyzerSession, AppPhase, InputMode, ProgressState};
