//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    /// Ventana del rate limit para reenvío de verificación, en segundos
    pub resend_window_secs: u64,
    /// Base del frontend para construir links de verificación
    pub frontend_url: String,
    /// Webhook HTTP del side-channel de email; sin configurar, los envíos solo se loguean
    pub email_webhook_url: Option<String>,
    pub email_from: String,
    // Asistente (Ollama local)
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub assistant_faq_path: String,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| {
                tracing::warn!("⚠️ JWT_SECRET no configurado, usando secreto de desarrollo");
                "dev-secret-change-me".to_string()
            }),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            resend_window_secs: env::var("RESEND_WINDOW_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("RESEND_WINDOW_SECS must be a valid number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            email_webhook_url: env::var("EMAIL_WEBHOOK_URL").ok(),
            email_from: env::var("DEFAULT_FROM_EMAIL")
                .unwrap_or_else(|_| "no-reply@fixly.test".to_string()),
            ollama_base_url: env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "phi3.5:3.8b".to_string()),
            assistant_faq_path: env::var("ASSISTANT_FAQ_PATH")
                .unwrap_or_else(|_| "assistant/faq.json".to_string()),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
