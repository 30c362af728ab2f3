use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::{render_document, Fragment};
use crate::models::cv::CvDocument;
use crate::resolver::{resolve_cv, resolve_design, DesignDocument};
use crate::sections::CatalogRenderer;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub cv: CvDocument,
    #[serde(default)]
    pub design: DesignDocument,
    /// Prefix the body with page and color `set` rules.
    #[serde(default)]
    pub include_preamble: bool,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub render_id: Uuid,
    pub theme: String,
    pub markup: Fragment,
    pub sidebar_sections: Vec<String>,
    pub main_sections: Vec<String>,
    pub rendered_at: DateTime<Utc>,
}

/// POST /api/v1/render
pub async fn handle_render(
    State(state): State<AppState>,
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<Json<RenderResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let render_id = Uuid::new_v4();

    let design = resolve_design(&req.design, &state.themes, &state.config.default_theme)?;
    let (identity, catalog) = resolve_cv(req.cv);
    let renderer = CatalogRenderer::new(&catalog);
    let rendered =
        render_document(&identity, &design, &catalog, &renderer, req.include_preamble)?;

    info!(
        %render_id,
        theme = %design.theme,
        sidebar = rendered.groups.sidebar.len(),
        main = rendered.groups.main.len(),
        bytes = rendered.markup.as_str().len(),
        "render completed"
    );

    Ok(Json(RenderResponse {
        render_id,
        theme: design.theme,
        markup: rendered.markup,
        sidebar_sections: rendered.groups.sidebar,
        main_sections: rendered.groups.main,
        rendered_at: Utc::now(),
    }))
}
