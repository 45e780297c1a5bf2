pub mod api;
pub mod config;
pub mod error;
mod state;

use tokio::net::TcpListener;
use tracing::info;

pub use api::build_router;
pub use config::ServerConfig;
pub use error::{Error, Result};
pub use state::{ReadMode, StatusHolder};
pub use vigil_common::{Severity, StatusRecord};

pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    config.validate()?;
    let addr = config.bind_addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })
}

pub async fn serve(
    listener: TcpListener,
    holder: StatusHolder,
    config: &ServerConfig,
) -> Result<()> {
    config.validate()?;
    let app = build_router(holder, config);
    if let Ok(addr) = listener.local_addr() {
        info!(
            "Serving status on http://{addr}{} (background: {})",
            config.status_path, config.background_path
        );
    }
    axum::serve(listener, app).await.map_err(Error::Serve)
}

pub async fn run_app(holder: StatusHolder, config: ServerConfig) -> Result<()> {
    let listener = bind(&config).await?;
    serve(listener, holder, &config).await
}
