//! Business logic orchestration between controllers and the data layer.
//!
//! Services enforce the visibility/ownership policy in a fixed order —
//! existence first (`NotFound`), then access (`Forbidden`) — and own the
//! collection membership reconciliation. They speak store traits only, so the
//! same code runs against SQLite in production and the in-memory doubles in
//! tests.

pub mod auth;
pub mod collection;
pub mod family;
pub mod monster;
