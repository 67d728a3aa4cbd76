// Testes do formulário HTML: renderização, exportação e limpeza

use std::{io::Cursor, path::PathBuf};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use calamine::{open_workbook_from_rs, Reader, Xlsx};
use ficha_cadastro::{
    config::{AppState, Settings},
    create_router,
};
use tower::ServiceExt; // for oneshot

// Helper: app sem logo (caminho inexistente)
fn create_test_app() -> Router {
    create_test_app_with_logo(PathBuf::from("/caminho/inexistente/logo.png"))
}

fn create_test_app_with_logo(logo_path: PathBuf) -> Router {
    let settings = Settings {
        addr: "127.0.0.1:0".parse().unwrap(),
        logo_path,
        sheet_name: "Cadastro Cliente".to_string(),
    };
    create_router(AppState::new(settings))
}

fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

async fn post_form(app: Router, uri: &str, pairs: &[(&str, &str)]) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(pairs)))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec()
}

async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

fn read_sheet(bytes: Vec<u8>) -> Vec<(String, String)> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
    let range = workbook.worksheet_range("Cadastro Cliente").unwrap();
    range
        .rows()
        .map(|cells| (cells[0].to_string(), cells[1].to_string()))
        .collect()
}

fn value_of<'a>(rows: &'a [(String, String)], field: &str) -> &'a str {
    rows.iter()
        .find(|(name, _)| name == field)
        .map(|(_, value)| value.as_str())
        .unwrap_or_else(|| panic!("linha '{field}' ausente"))
}

const REQUIRED: &[(&str, &str)] = &[
    ("name", "Maria da Silva"),
    ("phone", "8532320000"),
    ("document_type", "CPF"),
    ("document_number", "12345678900"),
    ("address_postal_code", "60000-000"),
    ("address_street", "Rua das Flores"),
    ("address_number", "123"),
    ("address_neighborhood", "Centro"),
    ("address_city", "Fortaleza"),
    ("address_state", "ce"),
];

fn with_extra<'a>(extra: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    let mut pairs: Vec<(&str, &str)> = REQUIRED.to_vec();
    pairs.extend_from_slice(extra);
    pairs
}

// =========================================================================
// Renderização
// =========================================================================

#[tokio::test]
async fn test_empty_form_is_rendered() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("Ficha de Cadastro de Cliente"));
    assert!(html.contains("Nome / Razão Social*"));
    assert!(html.contains("Cadastrar Endereço de Entrega"));
    assert!(!html.contains("CEP Entrega*"));
    assert!(!html.contains("Nome Referência 1"));
    // Sem logo: aviso em vez de imagem
    assert!(html.contains("não foi encontrada"));
    assert!(!html.contains("<img src=\"/logo\""));
}

#[tokio::test]
async fn test_toggles_show_optional_sections() {
    let response = post_form(
        create_test_app(),
        "/",
        &[("name", "Maria"), ("delivery_enabled", "on"), ("references_enabled", "on")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("value=\"Maria\""));
    assert!(html.contains("CEP Entrega*"));
    assert!(html.contains("Nome Referência 1"));
    assert!(html.contains("Nome Referência 3"));
    assert!(!html.contains("Nome Referência 4"));
}

#[tokio::test]
async fn test_enter_key_refreshes_instead_of_exporting() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let html = body_text(response).await;

    // O botão padrão (Enter) é o primeiro submit do formulário: não pode exportar
    let form = &html[html.find("<form").unwrap()..];
    let first_submit = &form[form.find("<button type=\"submit\"").unwrap()..];
    let first_submit = &first_submit[..first_submit.find('>').unwrap()];
    assert!(!first_submit.contains("formaction"), "{first_submit}");
    assert!(form.find("default-submit").unwrap() < form.find("formaction=\"/exportar\"").unwrap());
}

#[tokio::test]
async fn test_document_label_follows_document_type() {
    let html = body_text(post_form(create_test_app(), "/", &[("document_type", "CNPJ")]).await).await;

    assert!(html.contains("CNPJ*"));
    assert!(html.contains("maxlength=\"18\""));
}

// =========================================================================
// Exportação
// =========================================================================

#[tokio::test]
async fn test_missing_required_field_blocks_export() {
    let pairs: Vec<(&str, &str)> = REQUIRED
        .iter()
        .copied()
        .filter(|(key, _)| *key != "address_city")
        .collect();

    let response = post_form(create_test_app(), "/exportar", &pairs).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());

    let html = body_text(response).await;
    assert!(html.contains("Por favor, preencha todos os campos obrigatórios (marcados com *)."));
    // O que foi digitado continua na tela
    assert!(html.contains("value=\"Maria da Silva\""));
}

#[tokio::test]
async fn test_incomplete_delivery_address_blocks_export() {
    let pairs = with_extra(&[("delivery_enabled", "on"), ("delivery_postal_code", "61000-000")]);

    let response = post_form(create_test_app(), "/exportar", &pairs).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("Por favor, preencha todos os campos obrigatórios do Endereço de Entrega."));
}

#[tokio::test]
async fn test_export_with_optional_sections_disabled() {
    let response = post_form(create_test_app(), "/exportar", REQUIRED).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.contains("filename=\"cadastro_cliente_maria_da_silva.xlsx\""));

    let rows = read_sheet(body_bytes(response).await);

    assert_eq!(rows[0], ("Campo".to_string(), "Valor".to_string()));
    assert_eq!(rows.len(), 29);
    assert_eq!(value_of(&rows, "Nome/Razão Social"), "Maria da Silva");
    assert_eq!(value_of(&rows, "Tipo Documento"), "CPF");
    assert_eq!(value_of(&rows, "Endereço Principal - Estado"), "CE");
    for (field, value) in &rows {
        if field.starts_with("Endereço Entrega") || field.starts_with("Referência") {
            assert_eq!(value, "Não informado", "{field}");
        }
    }
    assert_eq!(value_of(&rows, "Observações"), "Nenhuma observação.");
}

#[tokio::test]
async fn test_export_with_references_and_delivery() {
    let pairs = with_extra(&[
        ("delivery_enabled", "on"),
        ("delivery_postal_code", "61000-000"),
        ("delivery_street", "Av. Central"),
        ("delivery_number", "50"),
        ("delivery_neighborhood", "Aldeota"),
        ("delivery_city", "Fortaleza"),
        ("delivery_state", "ce"),
        ("doc_proof_of_address", "on"),
        ("references_enabled", "on"),
        ("ref1_name", "Ana"),
        ("ref1_contact", "ana@email.com"),
        ("ref3_name", "Carlos"),
        ("ref3_contact", "85999990000"),
        ("notes", "Entregar pela manhã"),
    ]);

    let response = post_form(create_test_app(), "/exportar", &pairs).await;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = read_sheet(body_bytes(response).await);
    let references: Vec<&(String, String)> = rows
        .iter()
        .filter(|(field, _)| field.starts_with("Referência"))
        .collect();

    assert_eq!(references.len(), 4);
    assert_eq!(references[2].0, "Referência 2 Nome");
    assert_eq!(references[2].1, "Carlos");
    assert_eq!(value_of(&rows, "Endereço Entrega - Rua/Avenida"), "Av. Central");
    assert_eq!(value_of(&rows, "Endereço Entrega - Complemento"), "Não informado");
    assert_eq!(value_of(&rows, "Documento: Contrato Social Entregue?"), "Não");
    assert_eq!(value_of(&rows, "Documento: Comprovante de Endereço Entregue?"), "Sim");
    assert_eq!(value_of(&rows, "Observações"), "Entregar pela manhã");
}

// =========================================================================
// Limpeza
// =========================================================================

#[tokio::test]
async fn test_clear_resets_fields_and_sections() {
    let pairs = with_extra(&[
        ("delivery_enabled", "on"),
        ("references_enabled", "on"),
        ("ref1_name", "Ana"),
        ("doc_articles_of_association", "on"),
        ("notes", "qualquer coisa"),
    ]);

    let response = post_form(create_test_app(), "/limpar", &pairs).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("Formulário limpo"));
    assert!(!html.contains("Maria da Silva"));
    assert!(!html.contains("qualquer coisa"));
    assert!(!html.contains("CEP Entrega*"));
    assert!(!html.contains("Nome Referência 1"));
    // Só o rádio do CPF continua marcado
    assert_eq!(html.matches("checked").count(), 1);
    assert!(html.contains("value=\"CPF\" onchange=\"this.form.submit()\" checked"));
    assert!(html.contains("maxlength=\"14\" title=\"Digite o CPF"));
}

// =========================================================================
// Logo
// =========================================================================

#[tokio::test]
async fn test_missing_logo_is_not_found() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/logo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_logo_is_served_and_shown() {
    let image = image::DynamicImage::new_rgb8(8, 8);
    let mut bytes = Vec::new();
    image.write_to(&mut bytes, image::ImageOutputFormat::Png).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    std::fs::write(&path, &bytes).unwrap();

    let app = create_test_app_with_logo(path);

    let page = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let html = body_text(page).await;
    assert!(html.contains("<img src=\"/logo\""));
    assert!(!html.contains("não foi encontrada"));

    let logo = app
        .oneshot(Request::builder().uri("/logo").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(logo.status(), StatusCode::OK);
    assert_eq!(logo.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(body_bytes(logo).await, bytes);
}
