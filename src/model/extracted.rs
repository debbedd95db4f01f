//! LLM output contracts
//!
//! These types define the JSON schemas the model must conform to. They are
//! kept separate from the domain model so schema-level concerns (field
//! descriptions, extraction-friendly shapes) never leak into API responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete ToS analysis as returned by the model
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedAnalysis {
    #[schemars(
        description = "A comprehensive executive summary of the ToS analysis highlighting key concerns and user implications"
    )]
    pub summary: String,

    #[schemars(
        description = "Array of 3-7 critical warnings that pose significant risks to users"
    )]
    pub critical_warnings: Vec<ExtractedWarning>,

    #[schemars(
        description = "Array of 5-10 notable clauses and conditions users should be aware of"
    )]
    pub points_of_interest: Vec<ExtractedPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedWarning {
    #[schemars(description = "Brief title of the critical warning")]
    pub title: String,

    #[schemars(description = "Detailed explanation of why this is concerning for users")]
    pub description: String,

    #[schemars(description = "Risk level - high for major concerns, medium for notable issues")]
    pub severity: ExtractedSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExtractedSeverity {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedPoint {
    #[schemars(description = "Brief title of the point of interest")]
    pub title: String,

    #[schemars(description = "Clear explanation of what users should know about this clause")]
    pub description: String,

    #[schemars(
        description = "Category: legal for general legal matters, termination for account/service termination, liability for financial/damage liability"
    )]
    pub kind: ExtractedPointKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExtractedPointKind {
    Legal,
    Termination,
    Liability,
}

/// Result of asking the model to locate a legal document in page content
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedLegalDocument {
    #[schemars(description = "Whether any recognizable legal document was found on the page")]
    pub document_found: bool,

    #[schemars(description = "The type of legal document identified")]
    pub document_type: ExtractedDocumentType,

    #[schemars(description = "The full, extracted text of the legal document if found")]
    pub extracted_text: Option<String>,

    #[schemars(
        description = "A brief explanation of the classification, or why no document was found"
    )]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExtractedDocumentType {
    TermsOfService,
    PrivacyPolicy,
    CookiePolicy,
    Eula,
    Disclaimer,
    AcceptableUsePolicy,
    Other,
    None,
}
