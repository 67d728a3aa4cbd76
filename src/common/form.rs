use serde::{Deserialize, Deserializer};

// Checkbox HTML: o campo só vem no corpo quando está marcado ("on").
// Use com #[serde(default, deserialize_with = "checkbox")].
pub fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(value.as_deref(), Some("on" | "true" | "1")))
}

/// Monta o valor do `Content-Disposition` para um download.
///
/// Navegadores antigos leem só o `filename` (ASCII); os demais usam o
/// `filename*` codificado em UTF-8, que preserva acentos.
pub fn attachment_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(file_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_keeps_ascii_names() {
        assert_eq!(
            attachment_disposition("cadastro_cliente_maria.xlsx"),
            "attachment; filename=\"cadastro_cliente_maria.xlsx\"; filename*=UTF-8''cadastro_cliente_maria.xlsx"
        );
    }

    #[test]
    fn disposition_encodes_accents() {
        let value = attachment_disposition("cadastro_cliente_joão.xlsx");
        assert!(value.contains("filename=\"cadastro_cliente_jo_o.xlsx\""));
        assert!(value.contains("filename*=UTF-8''cadastro_cliente_jo%C3%A3o.xlsx"));
    }

    #[test]
    fn disposition_replaces_control_characters() {
        let value = attachment_disposition("cadastro_cliente_maria\nsilva\t\u{7f}.xlsx");
        assert!(value.contains("filename=\"cadastro_cliente_maria_silva__.xlsx\""));
        assert!(value.contains("filename*=UTF-8''cadastro_cliente_maria%0Asilva%09%7F.xlsx"));
        assert!(axum::http::HeaderValue::try_from(value).is_ok());
    }
}
