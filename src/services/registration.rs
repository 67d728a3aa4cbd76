// src/services/registration.rs

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::{
    common::error::{AppError, FormSection},
    models::{
        customer::{Address, CustomerRecord, MAX_REFERENCES},
        sheet::SheetRow,
    },
};

// Texto fixo para campos opcionais deixados em branco
pub const NOT_INFORMED: &str = "Não informado";
pub const NO_NOTES: &str = "Nenhuma observação.";

// =========================================================================
//  1. VALIDAÇÃO (somente presença)
// =========================================================================

/// Confere os campos obrigatórios da ficha.
///
/// Primeiro a parte principal (identificação + endereço principal); depois,
/// só se a seção estiver ativa, o endereço de entrega. O formato dos
/// documentos não é verificado.
pub fn validate_record(record: &CustomerRecord) -> Result<(), AppError> {
    if let Err(errors) = record.validate() {
        return Err(AppError::MissingRequiredFields {
            section: FormSection::Main,
            fields: missing_fields(&errors, ""),
        });
    }

    if record.delivery_enabled {
        if let Err(errors) = record.delivery_address.validate() {
            return Err(AppError::MissingRequiredFields {
                section: FormSection::DeliveryAddress,
                fields: missing_fields(&errors, "deliveryAddress"),
            });
        }
    }

    // Referências desligadas nem chegam à planilha
    if record.references_enabled && record.references.len() > MAX_REFERENCES {
        return Err(AppError::TooManyReferences(record.references.len()));
    }

    Ok(())
}

// Achata os erros do validator em caminhos tipo "address.postalCode"
fn missing_fields(errors: &ValidationErrors, prefix: &str) -> Vec<String> {
    let mut fields = Vec::new();

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            camel_case(field)
        } else {
            format!("{}.{}", prefix, camel_case(field))
        };

        match kind {
            ValidationErrorsKind::Field(_) => fields.push(path),
            ValidationErrorsKind::Struct(inner) => fields.extend(missing_fields(inner, &path)),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    fields.extend(missing_fields(inner, &format!("{}[{}]", path, index)));
                }
            }
        }
    }

    fields.sort();
    fields
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

// =========================================================================
//  2. ACHATAMENTO (ficha -> linhas da planilha)
// =========================================================================

fn or_not_informed(value: &str) -> String {
    if value.is_empty() {
        NOT_INFORMED.to_string()
    } else {
        value.to_string()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Sim" } else { "Não" }
}

fn push_address(rows: &mut Vec<SheetRow>, prefix: &str, street_label: &str, address: &Address) {
    rows.push(SheetRow::new(format!("{prefix} - CEP"), address.postal_code.as_str()));
    rows.push(SheetRow::new(format!("{prefix} - {street_label}"), address.street.as_str()));
    rows.push(SheetRow::new(format!("{prefix} - Número"), address.number.as_str()));
    rows.push(SheetRow::new(format!("{prefix} - Complemento"), or_not_informed(&address.complement)));
    rows.push(SheetRow::new(format!("{prefix} - Bairro"), address.neighborhood.as_str()));
    rows.push(SheetRow::new(format!("{prefix} - Cidade"), address.city.as_str()));
    rows.push(SheetRow::new(format!("{prefix} - Estado"), address.state.to_uppercase()));
}

/// Transforma a ficha na lista "Campo" / "Valor" exportada.
///
/// A ordem das linhas é fixa e segue a ordem do formulário. Seções
/// desligadas continuam presentes, preenchidas com "Não informado".
pub fn flatten_record(record: &CustomerRecord) -> Vec<SheetRow> {
    let mut rows = vec![
        SheetRow::new("Nome/Razão Social", record.name.as_str()),
        SheetRow::new("Nome Fantasia", or_not_informed(&record.trade_name)),
        SheetRow::new("Inscrição Estadual", or_not_informed(&record.state_registration)),
        SheetRow::new("Inscrição Municipal", or_not_informed(&record.municipal_registration)),
        SheetRow::new("Email", or_not_informed(&record.email)),
        SheetRow::new("Telefone", record.phone.as_str()),
        SheetRow::new("Celular", or_not_informed(&record.mobile)),
        SheetRow::new("Tipo Documento", record.document_type.label()),
        SheetRow::new("Documento", record.document_number.as_str()),
    ];

    push_address(&mut rows, "Endereço Principal", "Logradouro", &record.address);

    if record.delivery_enabled {
        push_address(&mut rows, "Endereço Entrega", "Rua/Avenida", &record.delivery_address);
    } else {
        for label in ["CEP", "Rua/Avenida", "Número", "Complemento", "Bairro", "Cidade", "Estado"] {
            rows.push(SheetRow::new(format!("Endereço Entrega - {label}"), NOT_INFORMED));
        }
    }

    rows.push(SheetRow::new(
        "Documento: Contrato Social Entregue?",
        yes_no(record.documents.articles_of_association),
    ));
    rows.push(SheetRow::new(
        "Documento: Comprovante de Endereço Entregue?",
        yes_no(record.documents.proof_of_address),
    ));

    if record.references_enabled {
        // A numeração conta apenas as referências com nome
        let informed = record
            .references
            .iter()
            .take(MAX_REFERENCES)
            .filter(|reference| !reference.name.is_empty());

        for (index, reference) in informed.enumerate() {
            let n = index + 1;
            rows.push(SheetRow::new(format!("Referência {n} Nome"), reference.name.as_str()));
            rows.push(SheetRow::new(format!("Referência {n} Contato"), reference.contact.as_str()));
        }
    } else {
        rows.push(SheetRow::new("Referência 1 Nome", NOT_INFORMED));
        rows.push(SheetRow::new("Referência 1 Contato", NOT_INFORMED));
    }

    let notes = if record.notes.is_empty() { NO_NOTES } else { record.notes.as_str() };
    rows.push(SheetRow::new("Observações", notes));

    rows
}
