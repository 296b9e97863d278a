//! Utilidades de validación
//!
//! Este módulo contiene funciones helper de validación compartidas
//! por los controladores.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use crate::utils::errors::AppError;

lazy_static! {
    static ref RE_UPPER: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref RE_LOWER: Regex = Regex::new(r"[a-z]").unwrap();
    static ref RE_DIGIT: Regex = Regex::new(r"\d").unwrap();
}

/// Una contraseña fuerte tiene al menos 6 caracteres e incluye
/// mayúsculas, minúsculas y números.
pub fn is_strong_password(password: &str) -> bool {
    if password.len() < 6 {
        return false;
    }
    RE_UPPER.is_match(password) && RE_LOWER.is_match(password) && RE_DIGIT.is_match(password)
}

/// Normalizar el texto de un mensaje de chat: unifica los saltos de línea
/// (CRLF, CR y la secuencia literal `\n` de dos caracteres) y recorta
/// espacios en los extremos.
pub fn normalize_chat_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace("\\n", "\n")
        .trim()
        .to_string()
}

/// Validar que un monto no sea negativo
pub fn validate_non_negative(field: &str, value: &Decimal) -> Result<(), AppError> {
    if *value < Decimal::ZERO {
        return Err(AppError::BadRequest(format!(
            "{} no puede ser negativo",
            field
        )));
    }
    Ok(())
}

/// Validar que el rating esté en [1, 5]
pub fn validate_rating(rating: i32) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::BadRequest(
            "El rating debe estar entre 1 y 5".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_strong_password() {
        assert!(is_strong_password("Abc123"));
        assert!(is_strong_password("Contraseña1x"));
        assert!(!is_strong_password("abc123")); // sin mayúscula
        assert!(!is_strong_password("ABC123")); // sin minúscula
        assert!(!is_strong_password("Abcdef")); // sin dígito
        assert!(!is_strong_password("Ab1")); // demasiado corta
        assert!(!is_strong_password(""));
    }

    #[test]
    fn test_normalize_chat_text() {
        assert_eq!(normalize_chat_text("hola\r\nmundo"), "hola\nmundo");
        assert_eq!(normalize_chat_text("hola\rmundo"), "hola\nmundo");
        assert_eq!(normalize_chat_text("hola\\nmundo"), "hola\nmundo");
        assert_eq!(normalize_chat_text("  hola  "), "hola");
        assert_eq!(normalize_chat_text(" \r\n \\n "), "");
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("El precio", &Decimal::new(100, 0)).is_ok());
        assert!(validate_non_negative("El precio", &Decimal::ZERO).is_ok());
        assert!(validate_non_negative("El precio", &Decimal::new(-5, 0)).is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-1).is_err());
    }
}
