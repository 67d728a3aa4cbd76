// src/handlers/assets.rs

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::AppState;

// GET /logo
pub async fn get_logo(State(app_state): State<AppState>) -> Response {
    match app_state.logo {
        Some(logo) => (
            [(header::CONTENT_TYPE, logo.content_type)],
            logo.bytes.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
