// src/config.rs

use std::{env, net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;

use crate::services::{
    logo::{load_logo, Logo},
    spreadsheet_service::{SpreadsheetService, DEFAULT_SHEET_NAME},
};

// Configurações lidas do ambiente (ou do .env)
#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
    pub logo_path: PathBuf,
    pub sheet_name: String,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let addr = env::var("APP_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .with_context(|| format!("APP_ADDR inválido: {addr}"))?;

        let logo_path = env::var("LOGO_PATH").unwrap_or_else(|_| "assets/logo.png".to_string());
        let sheet_name = env::var("SHEET_NAME").unwrap_or_else(|_| DEFAULT_SHEET_NAME.to_string());

        Ok(Self {
            addr,
            logo_path: PathBuf::from(logo_path),
            sheet_name,
        })
    }
}

// O estado compartilhado que será acessível em toda a aplicação.
// Não muda depois da inicialização.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub logo: Option<Arc<Logo>>,
    // Aviso exibido no topo da página quando a logo falha
    pub logo_warning: Option<String>,
    pub spreadsheet_service: SpreadsheetService,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let (logo, logo_warning) = match load_logo(&settings.logo_path) {
            Ok(logo) => (Some(Arc::new(logo)), None),
            Err(e) => {
                tracing::warn!("⚠️ {}", e);
                (None, Some(e.to_string()))
            }
        };

        let spreadsheet_service = SpreadsheetService::new(settings.sheet_name.clone());

        Self {
            settings,
            logo,
            logo_warning,
            spreadsheet_service,
        }
    }
}
