use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::profile::{Profile, Role};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub display_name: String,
    pub photo_url: String,
    pub role: Role,
    pub location: String,
    pub bio: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            display_name: profile.display_name,
            photo_url: profile.photo_url,
            role: profile.role,
            location: profile.location,
            bio: profile.bio,
        }
    }
}

// Update parcial del propio perfil
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 120))]
    pub display_name: Option<String>,

    #[validate(length(max = 200))]
    pub photo_url: Option<String>,

    pub role: Option<Role>,

    #[validate(length(max = 160))]
    pub location: Option<String>,

    pub bio: Option<String>,
}
