//! Side-channel de email
//!
//! Los envíos se despachan en background contra un webhook HTTP y nunca
//! bloquean la respuesta; los fallos se loguean y se tragan.

use reqwest::Client;
use serde_json::json;
use tracing::{error, info};

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct EmailService {
    client: Client,
    webhook_url: Option<String>,
    from: String,
    frontend_url: String,
}

impl EmailService {
    pub fn new(client: Client, config: &EnvironmentConfig) -> Self {
        Self {
            client,
            webhook_url: config.email_webhook_url.clone(),
            from: config.email_from.clone(),
            frontend_url: config.frontend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Despacha el correo de verificación en background
    pub fn send_verification_email(&self, to: String, username: String, token: String) {
        let verify_url = format!(
            "{}/verify?token={}",
            self.frontend_url,
            urlencoding::encode(&token)
        );
        let subject = "Confirma tu cuenta en Fixly".to_string();
        let body = format!(
            "Hola {},\n\nConfirma tu cuenta haciendo clic en el siguiente enlace:\n{}\n\nSi no fuiste tú, ignora este mensaje.",
            username, verify_url
        );

        self.dispatch(to, subject, body);
    }

    fn dispatch(&self, to: String, subject: String, body: String) {
        let Some(webhook_url) = self.webhook_url.clone() else {
            info!("📧 Email webhook no configurado; omitiendo envío a {}", to);
            return;
        };

        let client = self.client.clone();
        let from = self.from.clone();

        tokio::spawn(async move {
            let payload = json!({
                "from": from,
                "to": to,
                "subject": subject,
                "text": body,
            });

            match client.post(&webhook_url).json(&payload).send().await {
                Ok(response) if response.status().is_success() => {
                    info!("📧 Email enviado a {}", to);
                }
                Ok(response) => {
                    error!(
                        "Error enviando email a {}: status {}",
                        to,
                        response.status()
                    );
                }
                Err(e) => {
                    error!("Error enviando email a {}: {}", to, e);
                }
            }
        });
    }
}
