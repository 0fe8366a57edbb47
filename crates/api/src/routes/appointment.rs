use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/agendar", post(handlers::appointment::book_appointment))
        .route("/citas", get(handlers::appointment::list_appointments))
        .route(
            "/citas/:id",
            put(handlers::appointment::update_appointment)
                .delete(handlers::appointment::delete_appointment),
        )
}
