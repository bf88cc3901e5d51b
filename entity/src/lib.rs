pub mod prelude;

pub mod collection;
pub mod collection_monster;
pub mod family;
pub mod monster;
pub mod user;
