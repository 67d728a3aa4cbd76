// src/handlers/api.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::registration::spreadsheet_download,
    models::{customer::CustomerRecord, sheet::SheetRow},
    services::registration::{flatten_record, validate_record},
};

// POST /api/cadastro/validacao
#[utoipa::path(
    post,
    path = "/api/cadastro/validacao",
    tag = "Cadastro",
    request_body = CustomerRecord,
    responses(
        (status = 204, description = "Todos os campos obrigatórios preenchidos"),
        (status = 400, description = "Campos obrigatórios ausentes")
    )
)]
pub async fn validate_customer(
    Json(record): Json<CustomerRecord>,
) -> Result<StatusCode, AppError> {
    validate_record(&record)?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/cadastro/linhas
#[utoipa::path(
    post,
    path = "/api/cadastro/linhas",
    tag = "Cadastro",
    request_body = CustomerRecord,
    responses(
        (status = 200, description = "Linhas da planilha, na ordem exportada", body = Vec<SheetRow>),
        (status = 400, description = "Campos obrigatórios ausentes")
    )
)]
pub async fn preview_rows(
    Json(record): Json<CustomerRecord>,
) -> Result<impl IntoResponse, AppError> {
    validate_record(&record)?;
    let rows: Vec<SheetRow> = flatten_record(&record);
    Ok((StatusCode::OK, Json(rows)))
}

// POST /api/cadastro/planilha
#[utoipa::path(
    post,
    path = "/api/cadastro/planilha",
    tag = "Cadastro",
    request_body = CustomerRecord,
    responses(
        (status = 200, description = "Ficha em Excel (.xlsx) como anexo"),
        (status = 400, description = "Campos obrigatórios ausentes")
    )
)]
pub async fn export_customer(
    State(app_state): State<AppState>,
    Json(record): Json<CustomerRecord>,
) -> Result<Response, AppError> {
    validate_record(&record)?;
    spreadsheet_download(&app_state, &record)
}
