// src/handlers/registration.rs

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::{
    common::{
        error::AppError,
        form::{attachment_disposition, checkbox},
    },
    config::AppState,
    handlers::pages::RegistrationPage,
    models::customer::{Address, CustomerRecord, DeliveredDocuments, DocumentType, Reference},
    services::{
        registration::{flatten_record, validate_record},
        spreadsheet_service::{SpreadsheetService, XLSX_CONTENT_TYPE},
    },
};

// Corpo do formulário HTML (application/x-www-form-urlencoded).
// Campos de seções ocultas simplesmente não chegam.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub name: String,
    pub trade_name: String,
    pub state_registration: String,
    pub municipal_registration: String,
    pub email: String,
    pub phone: String,
    pub mobile: String,
    pub document_type: DocumentType,
    pub document_number: String,

    pub address_postal_code: String,
    pub address_street: String,
    pub address_number: String,
    pub address_complement: String,
    pub address_neighborhood: String,
    pub address_city: String,
    pub address_state: String,

    #[serde(deserialize_with = "checkbox")]
    pub delivery_enabled: bool,
    pub delivery_postal_code: String,
    pub delivery_street: String,
    pub delivery_number: String,
    pub delivery_complement: String,
    pub delivery_neighborhood: String,
    pub delivery_city: String,
    pub delivery_state: String,

    #[serde(deserialize_with = "checkbox")]
    pub doc_articles_of_association: bool,
    #[serde(deserialize_with = "checkbox")]
    pub doc_proof_of_address: bool,

    #[serde(deserialize_with = "checkbox")]
    pub references_enabled: bool,
    pub ref1_name: String,
    pub ref1_contact: String,
    pub ref2_name: String,
    pub ref2_contact: String,
    pub ref3_name: String,
    pub ref3_contact: String,

    pub notes: String,
}

impl From<RegistrationForm> for CustomerRecord {
    fn from(form: RegistrationForm) -> Self {
        Self {
            name: form.name,
            trade_name: form.trade_name,
            state_registration: form.state_registration,
            municipal_registration: form.municipal_registration,
            email: form.email,
            phone: form.phone,
            mobile: form.mobile,
            document_type: form.document_type,
            document_number: form.document_number,
            address: Address {
                postal_code: form.address_postal_code,
                street: form.address_street,
                number: form.address_number,
                complement: form.address_complement,
                neighborhood: form.address_neighborhood,
                city: form.address_city,
                state: form.address_state,
            },
            delivery_enabled: form.delivery_enabled,
            delivery_address: Address {
                postal_code: form.delivery_postal_code,
                street: form.delivery_street,
                number: form.delivery_number,
                complement: form.delivery_complement,
                neighborhood: form.delivery_neighborhood,
                city: form.delivery_city,
                state: form.delivery_state,
            },
            documents: DeliveredDocuments {
                articles_of_association: form.doc_articles_of_association,
                proof_of_address: form.doc_proof_of_address,
            },
            references_enabled: form.references_enabled,
            references: vec![
                Reference { name: form.ref1_name, contact: form.ref1_contact },
                Reference { name: form.ref2_name, contact: form.ref2_contact },
                Reference { name: form.ref3_name, contact: form.ref3_contact },
            ],
            notes: form.notes,
        }
    }
}

// GET /
pub async fn show_form(State(app_state): State<AppState>) -> Result<Response, AppError> {
    RegistrationPage::new(&app_state, CustomerRecord::default()).into_response_with(StatusCode::OK)
}

// POST /
// Reapresenta a ficha (ex.: ao marcar/desmarcar uma seção opcional)
pub async fn refresh_form(
    State(app_state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, AppError> {
    let record = CustomerRecord::from(form);
    RegistrationPage::new(&app_state, record).into_response_with(StatusCode::OK)
}

// POST /exportar
pub async fn export_form(
    State(app_state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, AppError> {
    let record = CustomerRecord::from(form);

    match validate_record(&record) {
        Ok(()) => {}
        Err(err @ AppError::MissingRequiredFields { .. }) => {
            tracing::warn!("Exportação bloqueada: {}", err);
            return RegistrationPage::new(&app_state, record)
                .with_error(err.to_string())
                .into_response_with(StatusCode::BAD_REQUEST);
        }
        Err(err) => return Err(err),
    }

    spreadsheet_download(&app_state, &record)
}

// POST /limpar
pub async fn clear_form(
    State(app_state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, AppError> {
    let mut record = CustomerRecord::from(form);
    record.reset();

    tracing::info!("🧹 Formulário limpo");

    RegistrationPage::new(&app_state, record)
        .with_notice("Formulário limpo. Preencha os dados de um novo cliente.")
        .into_response_with(StatusCode::OK)
}

// Gera a planilha de uma ficha já validada e devolve como download
pub(crate) fn spreadsheet_download(
    app_state: &AppState,
    record: &CustomerRecord,
) -> Result<Response, AppError> {
    let rows = flatten_record(record);
    let bytes = app_state.spreadsheet_service.generate(&rows)?;
    let file_name = SpreadsheetService::file_name(&record.name);

    tracing::info!("✅ Ficha exportada: {} ({} linhas)", file_name, rows.len());

    // Configura os Headers para o navegador baixar a planilha
    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (header::CONTENT_DISPOSITION, attachment_disposition(&file_name)),
    ];

    Ok((headers, bytes).into_response())
}
