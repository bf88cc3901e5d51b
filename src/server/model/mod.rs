//! Domain models and the mapping between storage rows and view models.
//!
//! Entity models cross into this layer through fallible `from_entity`
//! constructors: enum columns go through fixed exhaustive tables and blob
//! lists are decoded entry by entry, so corrupt stored data surfaces as a
//! `DataError` instead of a panic or a silent default. The visibility and
//! ownership policy (`can_read`/`can_write`) also lives on these models.

pub mod collection;
pub mod family;
pub mod monster;
pub mod user;
