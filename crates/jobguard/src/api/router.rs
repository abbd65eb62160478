use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::analysis::{analyze_posting, RiskAssessment};
use crate::company::{CompanyLookup, CompanyStats, PlaceholderSource};
use crate::error::AppError;

/// Body of `POST /api/analyze-job`. Non-string values are treated as missing text.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeJobRequest {
    #[serde(rename = "jobText", default)]
    pub job_text: Option<Value>,
}

/// Body of `POST /api/company-stats`.
#[derive(Debug, Default, Deserialize)]
pub struct CompanyStatsRequest {
    #[serde(rename = "companyInput", default)]
    pub company_input: Option<Value>,
}

/// Router builder exposing the analysis and company lookup endpoints.
pub fn detection_router<S>(lookup: Arc<CompanyLookup<S>>) -> Router
where
    S: PlaceholderSource + 'static,
{
    Router::new()
        .route("/api/analyze-job", post(analyze_job_handler))
        .route("/api/company-stats", post(company_stats_handler::<S>))
        .with_state(lookup)
}

pub(crate) async fn analyze_job_handler(
    payload: Result<Json<AnalyzeJobRequest>, JsonRejection>,
) -> Result<Json<RiskAssessment>, AppError> {
    let Json(request) = payload?;
    let text = request.job_text.as_ref().and_then(Value::as_str);
    let assessment = analyze_posting(text)?;
    Ok(Json(assessment))
}

pub(crate) async fn company_stats_handler<S>(
    State(lookup): State<Arc<CompanyLookup<S>>>,
    payload: Result<Json<CompanyStatsRequest>, JsonRejection>,
) -> Result<Json<CompanyStats>, AppError>
where
    S: PlaceholderSource + 'static,
{
    let Json(request) = payload?;
    let input = request
        .company_input
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or_default();
    let stats = lookup.lookup(input)?;
    Ok(Json(stats))
}
