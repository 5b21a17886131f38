//! Axum route handlers for the Portfolio API.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::anyhow;
use axum::{
    extract::State,
    http::{header, HeaderName},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generator::archive::write_to_dir;
use crate::models::cv::CvData;
use crate::models::selection::{SelectionPlan, Suggestion};
use crate::selection::archetype::Archetype;
use crate::selection::PlanOptions;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PortfolioRequest {
    pub cv: CvData,
    /// Section key → component key or alias.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
    /// Falls back to `MERGE_SPARSE_SECTIONS` when absent.
    #[serde(default)]
    pub merge_sparse_sections: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub build_id: Uuid,
    pub archetype: Archetype,
    pub generated_at: DateTime<Utc>,
    pub suggestions: Vec<Suggestion>,
    pub files: BTreeMap<String, String>,
}

const BUILD_ID_HEADER: HeaderName = HeaderName::from_static("x-build-id");

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/portfolio/plan
///
/// Runs selection only: archetype, richness, density, component per section
/// and suggestions. Nothing is generated.
pub async fn handle_plan(
    State(state): State<AppState>,
    Json(request): Json<PortfolioRequest>,
) -> Result<Json<SelectionPlan>, AppError> {
    let (_, plan) = plan_request(&state, request)?;
    Ok(Json(plan))
}

/// POST /api/v1/portfolio/generate
///
/// Full pipeline: select → adapt → generate. Returns every file inline and,
/// when PORTFOLIO_OUTPUT_DIR is set, also writes them to disk.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<PortfolioRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let (cv, plan) = plan_request(&state, request)?;
    let portfolio = state.generator.generate(&cv, &plan);

    if let Some(dir) = &state.config.portfolio_output_dir {
        let root = Path::new(dir).join(portfolio.build_id.to_string());
        // std::fs writes block, keep them off the async workers
        let files = portfolio.files.clone();
        let target = root.clone();
        let written = tokio::task::spawn_blocking(move || write_to_dir(&files, &target))
            .await
            .map_err(|e| anyhow!("write task join: {e}"))??;
        info!("Wrote {} files to {}", written.len(), root.display());
    }

    Ok(Json(GenerateResponse {
        build_id: portfolio.build_id,
        archetype: portfolio.archetype,
        generated_at: portfolio.generated_at,
        suggestions: plan.suggestions,
        files: portfolio.files,
    }))
}

/// POST /api/v1/portfolio/archive
///
/// Same pipeline as generate, returned as a zip download.
pub async fn handle_archive(
    State(state): State<AppState>,
    Json(request): Json<PortfolioRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (cv, plan) = plan_request(&state, request)?;
    let portfolio = state.generator.generate(&cv, &plan);
    let bytes = portfolio.archive()?;

    info!(
        "Archived portfolio {} ({} bytes)",
        portfolio.build_id,
        bytes.len()
    );

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", portfolio.archive_name(&cv)),
        ),
        (BUILD_ID_HEADER, portfolio.build_id.to_string()),
    ];

    Ok((headers, bytes))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn plan_request(
    state: &AppState,
    request: PortfolioRequest,
) -> Result<(CvData, SelectionPlan), AppError> {
    if request.cv.is_empty() {
        return Err(AppError::Validation(
            "cv has no renderable sections".to_string(),
        ));
    }

    let options = PlanOptions {
        overrides: request.overrides,
        merge_sparse_sections: request
            .merge_sparse_sections
            .unwrap_or(state.config.merge_sparse_sections),
    };
    let plan = state.selector.plan(&request.cv, &options);
    Ok((request.cv, plan))
}
