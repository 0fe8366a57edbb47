use axum::{extract::State, Json};
use salon_core::models::style::Style;
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_styles(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Style>>, AppError> {
    let styles = state.store.list_styles().await?;

    Ok(Json(styles))
}
