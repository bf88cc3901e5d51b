//! Entity factories for creating test records with sensible defaults.

pub mod collection;
pub mod family;
pub mod helpers;
pub mod monster;
pub mod user;
