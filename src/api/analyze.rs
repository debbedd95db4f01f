//! REST API endpoints for the analysis flow

use actix_web::{get, post, web, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::error::ApiError;
use crate::model::{AnalysisRequest, AnalysisResult, AnalyzerSession};
use crate::service::SessionService;

#[derive(OpenApi)]
#[openapi(
    paths(analyze, get_session, new_session, reset_session),
    components(schemas(
        AnalysisRequest,
        AnalysisResult,
        AnalyzerSession,
        crate::model::AppPhase,
        crate::model::InputMode,
        crate::model::ProgressState,
        crate::model::CriticalWarning,
        crate::model::PointOfInterest,
        crate::model::WarningSeverity,
        crate::model::PointKind,
    )),
    tags(
        (name = "analysis", description = "Terms-of-Service risk analysis"),
        (name = "session", description = "Analyzer session state")
    )
)]
pub struct ApiDoc;

/// Run a full analysis of a ToS document supplied by URL or pasted text
#[utoipa::path(
    post,
    path = "/v1/analyze",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisResult),
        (status = 400, description = "Invalid URL or empty content"),
        (status = 422, description = "No legal document found on the page"),
        (status = 502, description = "Failed to fetch the page"),
        (status = 500, description = "Analysis failed")
    ),
    tag = "analysis"
)]
#[post("/v1/analyze")]
pub async fn analyze(
    service: web::Data<SessionService>,
    request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();

    if request.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "No content provided for analysis".to_string(),
        ));
    }

    tracing::info!(input_mode = ?request.input_mode, "Starting analysis");

    let analysis = service.start_analysis(request).await?;
    Ok(HttpResponse::Ok().json(analysis))
}

/// Get the current session state (phase, progress, results, error)
#[utoipa::path(
    get,
    path = "/v1/session",
    responses(
        (status = 200, description = "Current session state", body = AnalyzerSession)
    ),
    tag = "session"
)]
#[get("/v1/session")]
pub async fn get_session(service: web::Data<SessionService>) -> impl Responder {
    HttpResponse::Ok().json(service.snapshot())
}

/// Start a new analysis: clear results and error, return to the input phase
#[utoipa::path(
    post,
    path = "/v1/session/new",
    responses(
        (status = 200, description = "Session reset to input phase", body = AnalyzerSession)
    ),
    tag = "session"
)]
#[post("/v1/session/new")]
pub async fn new_session(service: web::Data<SessionService>) -> impl Responder {
    service.start_new_analysis();
    HttpResponse::Ok().json(service.snapshot())
}

/// Restore the full initial session state, including the input mode
#[utoipa::path(
    post,
    path = "/v1/session/reset",
    responses(
        (status = 200, description = "Session restored to initial state", body = AnalyzerSession)
    ),
    tag = "session"
)]
#[post("/v1/session/reset")]
pub async fn reset_session(service: web::Data<SessionService>) -> impl Responder {
    service.reset();
    HttpResponse::Ok().json(service.snapshot())
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze)
        .service(get_session)
        .service(new_session)
        .service(reset_session);
}
