//! JSON view models exchanged with API clients.
//!
//! DTOs carry camelCase field names and convert to and from the domain models
//! at the controller boundary. Enum-valued fields travel as strings and are
//! validated through the domain enum tables, so a bad token in a request body
//! is a 400 rather than a deserialization quirk.

pub mod api;
pub mod collection;
pub mod download;
pub mod family;
pub mod monster;
pub mod user;
