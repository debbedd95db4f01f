//! Conversion from LLM output contracts to domain models

use crate::model::extracted::{
    ExtractedAnalysis, ExtractedPoint, ExtractedPointKind, ExtractedSeverity, ExtractedWarning,
};
use crate::model::{
    AnalysisResult, CriticalWarning, PointKind, PointOfInterest, WarningSeverity,
};

pub fn convert_analysis(extracted: ExtractedAnalysis) -> AnalysisResult {
    AnalysisResult {
        summary: extracted.summary,
        critical_warnings: extracted
            .critical_warnings
            .into_iter()
            .map(convert_warning)
            .collect(),
        points_of_interest: extracted
            .points_of_interest
            .into_iter()
            .map(convert_point)
            .collect(),
    }
}

fn convert_warning(warning: ExtractedWarning) -> CriticalWarning {
    CriticalWarning {
        title: warning.title,
        description: warning.description,
        severity: match warning.severity {
            ExtractedSeverity::High => WarningSeverity::High,
            ExtractedSeverity::Medium => WarningSeverity::Medium,
        },
    }
}

fn convert_point(point: ExtractedPoint) -> PointOfInterest {
    PointOfInterest {
        title: point.title,
        description: point.description,
        kind: match point.kind {
            ExtractedPointKind::Legal => PointKind::Legal,
            ExtractedPointKind::Termination => PointKind::Termination,
            ExtractedPointKind::Liability => PointKind::Liability,
        },
    }
}
