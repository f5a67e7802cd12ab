use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::domain::LayeringTemplate;
use super::enrichment::enrich_templates;
use super::report::EnrichmentReport;

/// Router builder exposing the HTTP endpoint for template enrichment.
///
/// The endpoint is stateless: callers supply the template collection in the
/// request body and receive the enriched collection plus the pass report.
pub fn styling_router() -> Router {
    Router::new().route("/api/v1/styling/templates/enrich", post(enrich_handler))
}

#[derive(Debug, Deserialize)]
pub(crate) struct EnrichRequest {
    pub(crate) templates: Vec<LayeringTemplate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EnrichResponse {
    pub(crate) report: EnrichmentReport,
    pub(crate) templates: Vec<LayeringTemplate>,
}

pub(crate) async fn enrich_handler(Json(payload): Json<EnrichRequest>) -> impl IntoResponse {
    let EnrichRequest { mut templates } = payload;
    let summary = enrich_templates(&mut templates);
    let report = EnrichmentReport::from_summary(summary);

    (StatusCode::OK, Json(EnrichResponse { report, templates }))
}
