use axum::{extract::State, Json};
use salon_core::models::appointment::{
    AppointmentDetail, AppointmentRequest, BookAppointmentResponse, MessageResponse,
    BOOKED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE,
};
use std::sync::Arc;

use crate::{
    extract::{AppJson, AppPath},
    middleware::error_handling::AppError,
    ApiState,
};

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<AppointmentRequest>,
) -> Result<Json<BookAppointmentResponse>, AppError> {
    let id = state.store.book_appointment(payload).await?;

    Ok(Json(BookAppointmentResponse {
        mensaje: BOOKED_MESSAGE.to_string(),
        id,
    }))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AppointmentDetail>>, AppError> {
    let appointments = state.store.list_appointments().await?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<AppointmentRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.update_appointment(id, payload).await?;

    Ok(Json(MessageResponse::new(UPDATED_MESSAGE)))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete_appointment(id).await?;

    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
