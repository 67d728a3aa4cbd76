//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ficha_cadastro::{
    config::{AppState, Settings},
    create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // A logo é carregada aqui; se faltar, vira só um aviso na página
    let app_state = AppState::new(settings.clone());
    let app = create_router(app_state);

    let listener = TcpListener::bind(settings.addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
