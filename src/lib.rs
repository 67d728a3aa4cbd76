// src/lib.rs

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

pub mod common;
pub mod config;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    // Formulário HTML
    let form_routes = Router::new()
        .route("/"
               ,get(handlers::registration::show_form)
               .post(handlers::registration::refresh_form)
        )
        .route("/exportar", post(handlers::registration::export_form))
        .route("/limpar", post(handlers::registration::clear_form))
        .route("/logo", get(handlers::assets::get_logo));

    // Mesma ficha via JSON
    let api_routes = Router::new()
        .route("/validacao", post(handlers::api::validate_customer))
        .route("/linhas", post(handlers::api::preview_rows))
        .route("/planilha", post(handlers::api::export_customer));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(form_routes)
        .nest("/api/cadastro", api_routes)
        .with_state(app_state)
}
