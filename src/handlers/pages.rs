// Página do formulário renderizada com Askama

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::customer::{CustomerRecord, Reference},
};

#[derive(Template)]
#[template(path = "ficha.html")]
pub struct RegistrationPage {
    pub record: CustomerRecord,
    // Sempre três posições, na ordem do formulário
    pub references: Vec<Reference>,
    pub has_logo: bool,
    pub logo_warning: Option<String>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl RegistrationPage {
    pub fn new(app_state: &AppState, record: CustomerRecord) -> Self {
        Self {
            references: record.reference_slots(),
            record,
            has_logo: app_state.logo.is_some(),
            logo_warning: app_state.logo_warning.clone(),
            error: None,
            notice: None,
        }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn with_notice(mut self, message: impl Into<String>) -> Self {
        self.notice = Some(message.into());
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Result<Response, AppError> {
        let html = self.render()?;
        Ok((status, Html(html)).into_response())
    }
}
