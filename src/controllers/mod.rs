//! Controladores de negocio
//!
//! Validación, autorización y orquestación de repositorios. Todo chequeo
//! de rol o de dueño corre antes de cualquier mutación.

pub mod assistant_controller;
pub mod auth_controller;
pub mod chat_controller;
pub mod lead_controller;
pub mod offer_controller;
pub mod profile_controller;
pub mod request_controller;
pub mod review_controller;
pub mod service_controller;
pub mod user_controller;
