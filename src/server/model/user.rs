use uuid::Uuid;

/// An authenticated Discord user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,
    /// Discord account id the user authenticated with.
    pub discord_id: String,
    /// Display name from the Discord profile.
    pub username: String,
    /// Avatar URL, if the profile has one.
    pub avatar: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            username: entity.username,
            avatar: entity.avatar,
        }
    }
}

/// Parameters for creating or refreshing a user record on login.
///
/// Upserts are keyed by `discord_id`; the name and avatar are overwritten on
/// every successful login.
#[derive(Debug, Clone)]
pub struct UpsertUserParams {
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
}
