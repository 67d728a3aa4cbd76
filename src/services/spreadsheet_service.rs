// src/services/spreadsheet_service.rs

use rust_xlsxwriter::{Format, FormatBorder, Workbook};

use crate::{common::error::AppError, models::sheet::SheetRow};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const DEFAULT_SHEET_NAME: &str = "Cadastro Cliente";

#[derive(Clone)]
pub struct SpreadsheetService {
    sheet_name: String,
}

impl Default for SpreadsheetService {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}

impl SpreadsheetService {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self { sheet_name: sheet_name.into() }
    }

    /// Gera a planilha em memória: uma aba, cabeçalho "Campo" / "Valor"
    /// e uma linha por par, na ordem recebida.
    pub fn generate(&self, rows: &[SheetRow]) -> Result<Vec<u8>, AppError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold().set_border(FormatBorder::Thin);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        worksheet.write_string_with_format(0, 0, "Campo", &header)?;
        worksheet.write_string_with_format(0, 1, "Valor", &header)?;

        for (index, row) in rows.iter().enumerate() {
            let line = index as u32 + 1;
            worksheet.write_string(line, 0, row.field.as_str())?;
            worksheet.write_string(line, 1, row.value.as_str())?;
        }

        // Largura pensada para os rótulos mais longos
        worksheet.set_column_width(0, 45)?;
        worksheet.set_column_width(1, 40)?;

        // Renderiza para Buffer (Memória)
        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }

    /// `cadastro_cliente_<nome>.xlsx`, com espaços trocados por `_` e tudo em minúsculas.
    pub fn file_name(customer_name: &str) -> String {
        format!(
            "cadastro_cliente_{}.xlsx",
            customer_name.replace(' ', "_").to_lowercase()
        )
    }
}
