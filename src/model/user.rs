use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::server::model::user::User;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
}

impl UserDto {
    pub fn from_user(user: User) -> Self {
        Self {
            id: user.id,
            discord_id: user.discord_id,
            username: user.username,
            avatar: user.avatar,
        }
    }
}
