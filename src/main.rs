use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fixly_backend::config::environment::EnvironmentConfig;
use fixly_backend::database;
use fixly_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🔧 Fixly Backend - Marketplace de servicios");
    info!("===========================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = database::run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);
    let app = fixly_backend::build_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registro");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/verify - Verificar email");
    info!("   POST /api/auth/send-verification - Reenviar verificación");
    info!("   POST /api/auth/password-change - Cambiar contraseña");
    info!("👤 Perfil y usuarios:");
    info!("   GET/PUT /api/profile - Perfil propio");
    info!("   GET  /api/users/:id - Detalle público");
    info!("   GET  /api/users/:id/reviews - Reseñas recibidas");
    info!("   GET  /api/users/:id/rating - Promedio de rating");
    info!("📋 Solicitudes y ofertas:");
    info!("   GET/POST /api/requests - Listar / crear solicitud");
    info!("   GET/PUT/DELETE /api/requests/:id - Detalle / editar / borrar");
    info!("   GET/POST /api/requests/:id/offers - Ofertas / upsert de oferta");
    info!("   POST /api/requests/:id/offers/:offer_id/accept - Aceptar oferta");
    info!("   POST /api/requests/:id/offers/:offer_id/reject - Rechazar oferta");
    info!("🛠 Servicios y leads:");
    info!("   GET/POST /api/services - Listar / crear servicio");
    info!("   GET  /api/services/me - Mis servicios");
    info!("   GET/PUT/DELETE /api/services/:id - Detalle / editar / borrar");
    info!("   POST /api/services/:id/contact - Contactar proveedor");
    info!("   GET  /api/me/leads - Leads recibidos");
    info!("💬 Chat y reseñas:");
    info!("   GET/POST /api/chats/:request_id/messages - Conversación");
    info!("   POST /api/reviews - Crear reseña");
    info!("🤖 Asistente:");
    info!("   POST /api/assistant/chat - Chat con el asistente");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
