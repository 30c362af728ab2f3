use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::design::Design;
use crate::state::AppState;

/// GET /api/v1/themes
/// Every built-in theme with its default design, ordered by name.
pub async fn handle_list_themes(State(state): State<AppState>) -> Json<Vec<Design>> {
    Json(state.themes.designs().cloned().collect())
}

/// GET /api/v1/themes/:name
pub async fn handle_get_theme(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Design>, AppError> {
    state
        .themes
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("theme '{name}'")))
}
