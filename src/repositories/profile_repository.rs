use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::{Profile, Role};
use crate::utils::errors::AppError;

pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    /// Los perfiles se crean de forma perezosa la primera vez que se consultan
    pub async fn get_or_create(&self, user_id: Uuid) -> Result<Profile, AppError> {
        if let Some(profile) = self.find(user_id).await? {
            return Ok(profile);
        }

        sqlx::query("INSERT INTO profiles (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        self.find(user_id)
            .await?
            .ok_or_else(|| AppError::Internal("No se pudo crear el perfil".to_string()))
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        display_name: Option<String>,
        photo_url: Option<String>,
        role: Option<Role>,
        location: Option<String>,
        bio: Option<String>,
    ) -> Result<Profile, AppError> {
        let current = self.get_or_create(user_id).await?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET display_name = $2, photo_url = $3, role = $4, location = $5, bio = $6
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(display_name.unwrap_or(current.display_name))
        .bind(photo_url.unwrap_or(current.photo_url))
        .bind(role.unwrap_or(current.role))
        .bind(location.unwrap_or(current.location))
        .bind(bio.unwrap_or(current.bio))
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Rol efectivo de un usuario; sin perfil equivale a `Unset`
    pub async fn role_of(&self, user_id: Uuid) -> Result<Role, AppError> {
        let role: Option<(Role,)> =
            sqlx::query_as("SELECT role FROM profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(role.map(|(r,)| r).unwrap_or(Role::Unset))
    }
}
