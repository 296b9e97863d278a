//! Modelo de Profile y rol de usuario
//!
//! El rol se modela como enumeración cerrada; los perfiles legacy sin rol
//! quedan en `Unset` y se serializan como cadena vacía.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;
use uuid::Uuid;

/// Rol de un perfil
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Unset,
    Client,
    Provider,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Unset => "",
            Role::Client => "client",
            Role::Provider => "provider",
        }
    }

    pub fn is_client(&self) -> bool {
        matches!(self, Role::Client)
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, Role::Provider)
    }
}

impl TryFrom<&str> for Role {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "" | "unset" => Ok(Role::Unset),
            "client" => Ok(Role::Client),
            "provider" => Ok(Role::Provider),
            other => Err(format!("rol desconocido: '{}'", other)),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Role::try_from(value.as_str()).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub user_id: Uuid,
    pub display_name: String,
    pub photo_url: String,
    pub role: Role,
    pub location: String,
    pub bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::try_from("client").unwrap(), Role::Client);
        assert_eq!(Role::try_from("provider").unwrap(), Role::Provider);
        assert_eq!(Role::try_from("").unwrap(), Role::Unset);
        assert_eq!(Role::try_from("unset").unwrap(), Role::Unset);
        assert_eq!(Role::try_from("  client  ").unwrap(), Role::Client);
        assert!(Role::try_from("admin").is_err());
        assert!(Role::try_from("cliente").is_err());
    }

    #[test]
    fn test_role_serde_roundtrip() {
        assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"client\"");
        assert_eq!(serde_json::to_string(&Role::Unset).unwrap(), "\"\"");

        let parsed: Role = serde_json::from_str("\"provider\"").unwrap();
        assert_eq!(parsed, Role::Provider);
        let parsed: Role = serde_json::from_str("\"\"").unwrap();
        assert_eq!(parsed, Role::Unset);
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }
}
