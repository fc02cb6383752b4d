use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, error};
use dotenvy::dotenv;

use automotores::config::environment::EnvironmentConfig;
use automotores::repositories::automotor_repository::AutomotorRepository;
use automotores::state::AppState;
use automotores::create_app;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 {}", automotores::PROGRAMA);
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    let addr: SocketAddr = config.server_addr().parse()?;

    let app_state = AppState::new(config, AutomotorRepository::new());
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    / - Descriptor del programa");
    info!("   GET    /automotores - Listar automotores");
    info!("   POST   /automotores - Crear automotor");
    info!("   GET    /automotores/:id - Obtener automotor");
    info!("   PUT    /automotores/:id - Reemplazar automotor");
    info!("   DELETE /automotores/:id - Borrar automotor");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("✅ Escuchando el puerto {}", addr.port());

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
