//! HTTP request handlers.
//!
//! Controllers resolve the request identity through `AuthGuard`, convert DTOs
//! to service parameters, call the service layer, and convert domain models
//! back to DTOs. All error mapping to status codes happens through
//! `AppError`'s `IntoResponse`.

pub mod auth;
pub mod collection;
pub mod family;
pub mod monster;
