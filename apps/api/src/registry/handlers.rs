//! Axum route handlers for the component catalog.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::registry::ComponentSpec;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ComponentEntry {
    pub key: String,
    #[serde(flatten)]
    pub spec: ComponentSpec,
}

#[derive(Debug, Serialize)]
pub struct ComponentListResponse {
    pub count: usize,
    pub components: Vec<ComponentEntry>,
}

/// GET /api/v1/components
///
/// Lists every registered component in key order.
pub async fn handle_list_components(State(state): State<AppState>) -> Json<ComponentListResponse> {
    let components: Vec<ComponentEntry> = state
        .registry
        .entries()
        .iter()
        .map(|(key, spec)| ComponentEntry {
            key: key.clone(),
            spec: spec.clone(),
        })
        .collect();

    Json(ComponentListResponse {
        count: components.len(),
        components,
    })
}

/// GET /api/v1/components/:name
///
/// Looks up one component by key or alias.
pub async fn handle_get_component(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ComponentEntry>, AppError> {
    let key = state
        .registry
        .canonical_key(&name)
        .ok_or_else(|| AppError::NotFound(format!("Component '{name}' is not registered")))?;
    let spec = state
        .registry
        .get(key)
        .ok_or_else(|| AppError::NotFound(format!("Component '{name}' is not registered")))?;

    Ok(Json(ComponentEntry {
        key: key.to_string(),
        spec: spec.clone(),
    }))
}
