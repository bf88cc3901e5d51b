pub use super::collection::Entity as Collection;
pub use super::collection_monster::Entity as CollectionMonster;
pub use super::family::Entity as Family;
pub use super::monster::Entity as Monster;
pub use super::user::Entity as User;
