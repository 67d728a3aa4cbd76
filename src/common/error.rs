use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

// Seção da ficha cujos campos obrigatórios ficaram vazios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Main,
    DeliveryAddress,
}

impl fmt::Display for FormSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormSection::Main => {
                write!(f, "Por favor, preencha todos os campos obrigatórios (marcados com *).")
            }
            FormSection::DeliveryAddress => {
                write!(f, "Por favor, preencha todos os campos obrigatórios do Endereço de Entrega.")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    // O único erro que o usuário vê: bloqueia a exportação
    #[error("{section}")]
    MissingRequiredFields {
        section: FormSection,
        fields: Vec<String>,
    },

    #[error("Informe no máximo 3 referências (recebidas: {0})")]
    TooManyReferences(usize),

    #[error("Erro ao gerar a planilha: {0}")]
    SpreadsheetError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Erro ao renderizar a página: {0}")]
    TemplateError(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingRequiredFields { section, fields } => {
                let body = Json(json!({
                    "error": section.to_string(),
                    "details": fields,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::TooManyReferences(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            // Planilha e página: 500, o detalhe fica só no log
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.".to_string())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
