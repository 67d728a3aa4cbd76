// src/models/sheet.rs

use serde::Serialize;
use utoipa::ToSchema;

// Uma linha da planilha exportada: "Campo" / "Valor"
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SheetRow {
    #[schema(example = "Nome/Razão Social")]
    pub field: String,
    #[schema(example = "Maria da Silva")]
    pub value: String,
}

impl SheetRow {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}
