//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL, junto con las enumeraciones de estado y rol.

pub mod chat;
pub mod lead;
pub mod offer;
pub mod profile;
pub mod request;
pub mod review;
pub mod service;
pub mod user;
