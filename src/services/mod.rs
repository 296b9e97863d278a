//! Servicios de integración con colaboradores externos
//!
//! Email (fire-and-forget) y asistente FAQ/Ollama.

pub mod assistant_service;
pub mod email_service;

pub use assistant_service::AssistantService;
pub use email_service::EmailService;
