//! Domain model for a completed Terms-of-Service risk analysis

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured risk analysis of a Terms-of-Service document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    /// Executive summary of the key concerns and user implications
    pub summary: String,
    /// Clauses that pose significant risks to users
    pub critical_warnings: Vec<CriticalWarning>,
    /// Notable clauses and conditions users should be aware of
    pub points_of_interest: Vec<PointOfInterest>,
}

/// A clause that poses a significant risk to users
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CriticalWarning {
    pub title: String,
    pub description: String,
    pub severity: WarningSeverity,
}

/// Risk level of a critical warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    /// Major concern
    High,
    /// Notable issue
    Medium,
}

/// A notable clause users should be aware of
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointOfInterest {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PointKind,
}

/// Category of a point of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// General legal matters
    Legal,
    /// Account or service termination
    Termination,
    /// Financial or damage liability
    Liability,
}
