//! Cliente del asistente (Ollama local)
//!
//! Rankea entradas de la FAQ por solapamiento de palabras, arma el prompt
//! de sistema y delega la generación en el endpoint de chat de Ollama.
//! La construcción del índice RAG es externa a este servicio.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::environment::EnvironmentConfig;
use crate::dto::assistant_dto::AssistantTurn;
use crate::utils::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub a: String,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    #[serde(default)]
    message: OllamaMessage,
}

#[derive(Debug, Default, Deserialize)]
struct OllamaMessage {
    #[serde(default)]
    content: String,
}

#[derive(Clone)]
pub struct AssistantService {
    client: Client,
    base_url: String,
    model: String,
    faq_path: String,
}

impl AssistantService {
    pub fn new(client: Client, config: &EnvironmentConfig) -> Self {
        Self {
            client,
            base_url: config.ollama_base_url.trim_end_matches('/').to_string(),
            model: config.ollama_model.clone(),
            faq_path: config.assistant_faq_path.clone(),
        }
    }

    fn load_faq(&self) -> Vec<FaqEntry> {
        match std::fs::read_to_string(&self.faq_path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Responde al mensaje del usuario con contexto de FAQ
    pub async fn chat(
        &self,
        message: &str,
        history: &[AssistantTurn],
    ) -> Result<String, AppError> {
        let top = pick_relevant_faq(&self.load_faq(), message, 5);
        let context = top
            .iter()
            .map(|e| format!("Q: {}\nA: {}", e.q, e.a))
            .collect::<Vec<_>>()
            .join("\n\n");

        let system = format!(
            "Eres un asistente de Fixly en español. Responde conciso y útil basándote en el contexto. \
             Si algo no está en el contexto, dilo y sugiere pasos prácticos.\n\nContexto:\n{}",
            if context.is_empty() {
                "- (sin entradas relevantes)"
            } else {
                &context
            }
        );

        let mut messages = vec![json!({ "role": "system", "content": system })];
        for turn in sanitize_history(history) {
            messages.push(json!({ "role": turn.role, "content": turn.content }));
        }
        messages.push(json!({ "role": "user", "content": message }));

        let payload = json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
            "options": { "temperature": 0.2 },
        });

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ServiceUnavailable(format!("Ollama error: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ServiceUnavailable(format!(
                "Ollama error: status {}",
                response.status()
            )));
        }

        let body: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::ServiceUnavailable(format!("Ollama error: {}", e)))?;

        let reply = body.message.content.trim().to_string();
        if reply.is_empty() {
            return Ok("Lo siento, no pude generar una respuesta.".to_string());
        }

        Ok(reply)
    }
}

/// Entradas de FAQ más afines al mensaje, por solapamiento de palabras
fn pick_relevant_faq(entries: &[FaqEntry], message: &str, k: usize) -> Vec<FaqEntry> {
    let words: Vec<String> = message
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > 2)
        .map(|w| w.to_string())
        .collect();

    if words.is_empty() || entries.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, &FaqEntry)> = entries
        .iter()
        .map(|entry| {
            let text = format!("{} {}", entry.q, entry.a).to_lowercase();
            let score = words.iter().filter(|w| text.contains(w.as_str())).count();
            (score, entry)
        })
        .collect();

    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked
        .into_iter()
        .take(k)
        .filter(|(score, _)| *score > 0)
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// Historial saneado: últimos 4 turnos con rol conocido y contenido no vacío
fn sanitize_history(history: &[AssistantTurn]) -> Vec<AssistantTurn> {
    history
        .iter()
        .rev()
        .filter(|turn| {
            let role = turn.role.to_lowercase();
            (role == "user" || role == "assistant") && !turn.content.trim().is_empty()
        })
        .take(4)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq() -> Vec<FaqEntry> {
        vec![
            FaqEntry {
                q: "¿Cómo publico una solicitud?".to_string(),
                a: "Desde tu cuenta de cliente, botón Nueva solicitud.".to_string(),
            },
            FaqEntry {
                q: "¿Cómo acepto una oferta?".to_string(),
                a: "Abre la solicitud y pulsa Aceptar sobre la oferta elegida.".to_string(),
            },
            FaqEntry {
                q: "¿Cómo cambio mi contraseña?".to_string(),
                a: "En tu perfil, sección seguridad.".to_string(),
            },
        ]
    }

    #[test]
    fn test_pick_relevant_faq_ranks_by_overlap() {
        let top = pick_relevant_faq(&faq(), "quiero aceptar una oferta", 2);
        assert!(!top.is_empty());
        assert!(top[0].q.contains("oferta"));
    }

    #[test]
    fn test_pick_relevant_faq_empty_message() {
        assert!(pick_relevant_faq(&faq(), "", 3).is_empty());
        assert!(pick_relevant_faq(&faq(), "a el", 3).is_empty());
    }

    #[test]
    fn test_pick_relevant_faq_no_match() {
        let top = pick_relevant_faq(&faq(), "zzz xxx yyy", 3);
        assert!(top.is_empty());
    }

    #[test]
    fn test_sanitize_history_filters_and_truncates() {
        let history: Vec<AssistantTurn> = (0..6)
            .map(|i| AssistantTurn {
                role: if i % 2 == 0 { "user" } else { "assistant" }.to_string(),
                content: format!("turno {}", i),
            })
            .chain(std::iter::once(AssistantTurn {
                role: "system".to_string(),
                content: "no debería pasar".to_string(),
            }))
            .chain(std::iter::once(AssistantTurn {
                role: "user".to_string(),
                content: "   ".to_string(),
            }))
            .collect();

        let sanitized = sanitize_history(&history);
        assert_eq!(sanitized.len(), 4);
        assert!(sanitized.iter().all(|t| t.role != "system"));
        assert_eq!(sanitized.last().unwrap().content, "turno 5");
    }
}
