//! Validation logic for LLM-produced ToS analyses
//!
//! Ensures the analysis is usable before it reaches the session: hard errors
//! for structurally empty output, warnings for quality issues.

use crate::model::extracted::ExtractedAnalysis;

/// Expected cardinality of critical warnings per the output contract
const WARNINGS_RANGE: (usize, usize) = (3, 7);
/// Expected cardinality of points of interest per the output contract
const POINTS_RANGE: (usize, usize) = (5, 10);

/// Result of analysis validation
#[derive(Debug)]
pub struct AnalysisValidationResult {
    /// Whether the analysis passed validation
    pub is_valid: bool,
    /// Critical errors that indicate invalid output
    pub errors: Vec<String>,
    /// Warnings that indicate potential quality issues
    pub warnings: Vec<String>,
}

impl AnalysisValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validate an extracted analysis for completeness
///
/// Checks:
/// 1. Summary is non-empty
/// 2. Every warning and point has a title and description
/// 3. Array cardinalities match the contract (warning only)
/// 4. Descriptions are not trivially short (warning only)
pub fn validate_extracted_analysis(analysis: &ExtractedAnalysis) -> AnalysisValidationResult {
    let mut result = AnalysisValidationResult::valid();

    if analysis.summary.trim().is_empty() {
        result.add_error("Analysis summary is empty".to_string());
    }

    let warning_count = analysis.critical_warnings.len();
    if warning_count < WARNINGS_RANGE.0 || warning_count > WARNINGS_RANGE.1 {
        result.add_warning(format!(
            "Expected {}-{} critical warnings, got {}",
            WARNINGS_RANGE.0, WARNINGS_RANGE.1, warning_count
        ));
    }

    let point_count = analysis.points_of_interest.len();
    if point_count < POINTS_RANGE.0 || point_count > POINTS_RANGE.1 {
        result.add_warning(format!(
            "Expected {}-{} points of interest, got {}",
            POINTS_RANGE.0, POINTS_RANGE.1, point_count
        ));
    }

    for (i, warning) in analysis.critical_warnings.iter().enumerate() {
        if warning.title.trim().is_empty() {
            result.add_error(format!("Critical warning {} has an empty title", i + 1));
        }
        if warning.description.trim().is_empty() {
            result.add_error(format!(
                "Critical warning {} has an empty description",
                i + 1
            ));
        } else if warning.description.trim().len() < 20 {
            result.add_warning(format!(
                "Critical warning {} has a very short description: '{}'",
                i + 1,
                warning.description
            ));
        }
    }

    for (i, point) in analysis.points_of_interest.iter().enumerate() {
        if point.title.trim().is_empty() {
            result.add_error(format!("Point of interest {} has an empty title", i + 1));
        }
        if point.description.trim().is_empty() {
            result.add_error(format!(
                "Point of interest {} has an empty description",
                i + 1
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extracted::*;

    fn warning(title: &str, description: &str) -> ExtractedWarning {
        ExtractedWarning {
            title: title.to_string(),
            description: description.to_string(),
            severity: ExtractedSeverity::High,
        }
    }

    fn point(title: &str, description: &str) -> ExtractedPoint {
        ExtractedPoint {
            title: title.to_string(),
            description: description.to_string(),
            kind: ExtractedPointKind::Legal,
        }
    }

    fn well_formed_analysis() -> ExtractedAnalysis {
        ExtractedAnalysis {
            summary: "The agreement heavily favors the provider.".to_string(),
            critical_warnings: vec![
                warning(
                    "Broad Termination Rights",
                    "Accounts may be terminated at any time without notice.",
                ),
                warning(
                    "Mandatory Arbitration",
                    "All disputes must be resolved through binding arbitration.",
                ),
                warning(
                    "Liability Limitations",
                    "Liability is limited to the maximum extent permitted by law.",
                ),
            ],
            points_of_interest: vec![
                point("Data Retention", "Data is kept for 90 days after closure."),
                point("Age Restrictions", "Users must be at least 13 years old."),
                point("Geographic Limits", "Some features are region-locked."),
                point("Refund Policy", "Fees are charged in advance, no refunds."),
                point("Content Moderation", "Automated and human review of content."),
            ],
        }
    }

    #[test]
    fn well_formed_analysis_passes() {
        let result = validate_extracted_analysis(&well_formed_analysis());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn empty_summary_is_an_error() {
        let mut analysis = well_formed_analysis();
        analysis.summary = "   ".to_string();
        let result = validate_extracted_analysis(&analysis);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("summary"));
    }

    #[test]
    fn empty_warning_title_is_an_error() {
        let mut analysis = well_formed_analysis();
        analysis.critical_warnings[1].title = String::new();
        let result = validate_extracted_analysis(&analysis);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("empty title")));
    }

    #[test]
    fn cardinality_out_of_range_is_only_a_warning() {
        let mut analysis = well_formed_analysis();
        analysis.critical_warnings.truncate(1);
        let result = validate_extracted_analysis(&analysis);
        assert!(result.is_valid);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("critical warnings")));
    }

    #[test]
    fn short_description_is_only_a_warning() {
        let mut analysis = well_formed_analysis();
        analysis.critical_warnings[0].description = "Too short.".to_string();
        let result = validate_extracted_analysis(&analysis);
        assert!(result.is_valid);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("very short description")));
    }
}
