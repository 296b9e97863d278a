//! Repositorios de acceso a datos
//!
//! Un repositorio por agregado; todo el SQL vive aquí. La transición de
//! aceptar oferta es la única unidad transaccional del sistema.

pub mod chat_repository;
pub mod lead_repository;
pub mod offer_repository;
pub mod profile_repository;
pub mod request_repository;
pub mod review_repository;
pub mod service_repository;
pub mod user_repository;
