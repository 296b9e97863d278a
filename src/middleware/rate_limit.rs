//! Rate limiting para reenvío de emails de verificación
//!
//! Limitador explícito con TTL, una entrada por identidad de usuario.
//! Las entradas expiradas se podan en cada consulta, así el mapa queda
//! acotado por los usuarios activos dentro de la ventana.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct RateLimitState {
    last_sent: Arc<RwLock<HashMap<String, Instant>>>,
    window: Duration,
}

impl RateLimitState {
    pub fn new(window_secs: u64) -> Self {
        Self {
            last_sent: Arc::new(RwLock::new(HashMap::new())),
            window: Duration::from_secs(window_secs),
        }
    }

    /// Registra un intento para la clave dada. Devuelve `Err(retry_in)` con
    /// los segundos restantes si la ventana aún no venció.
    pub async fn check_key(&self, key: &str) -> Result<(), u64> {
        let mut last_sent = self.last_sent.write().await;
        let now = Instant::now();

        // Poda de entradas expiradas
        last_sent.retain(|_, sent_at| now.duration_since(*sent_at) < self.window);

        if let Some(sent_at) = last_sent.get(key) {
            let elapsed = now.duration_since(*sent_at);
            if elapsed < self.window {
                let retry_in = (self.window - elapsed).as_secs().max(1);
                return Err(retry_in);
            }
        }

        last_sent.insert(key.to_string(), now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_attempt_allowed() {
        let state = RateLimitState::new(60);
        assert!(state.check_key("user@fixly.test").await.is_ok());
    }

    #[tokio::test]
    async fn test_second_attempt_within_window_throttled() {
        let state = RateLimitState::new(60);
        state.check_key("user@fixly.test").await.unwrap();

        let retry_in = state.check_key("user@fixly.test").await.unwrap_err();
        assert!(retry_in >= 1 && retry_in <= 60);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let state = RateLimitState::new(60);
        state.check_key("a@fixly.test").await.unwrap();
        assert!(state.check_key("b@fixly.test").await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_window_allows_again() {
        let state = RateLimitState::new(0);
        state.check_key("a@fixly.test").await.unwrap();
        assert!(state.check_key("a@fixly.test").await.is_ok());
    }
}
