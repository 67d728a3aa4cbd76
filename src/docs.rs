// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Cadastro ---
        handlers::api::validate_customer,
        handlers::api::preview_rows,
        handlers::api::export_customer,
    ),
    components(
        schemas(
            models::customer::DocumentType,
            models::customer::Address,
            models::customer::Reference,
            models::customer::DeliveredDocuments,
            models::customer::CustomerRecord,
            models::sheet::SheetRow,
        )
    ),
    tags(
        (name = "Cadastro", description = "Ficha de Cadastro de Cliente")
    )
)]
pub struct ApiDoc;
