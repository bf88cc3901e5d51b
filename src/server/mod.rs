//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure
//! services. The backend uses Axum as the web framework, SeaORM for database
//! operations, and tower-sessions for cookie-backed sessions.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Store traits and their SQLite/in-memory implementations
//! - **Model Layer** (`model/`) - Domain models, enum tables, and the visibility policy
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the request auth guard
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, store handles)
//! - **Startup** (`startup`) - Initialization of database, sessions, and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs (expired session sweep)
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Middleware** resolves the cookie session to a user where needed
//! 3. **Controller** converts DTOs to params and calls the service with the
//!    requester's identity as an explicit argument
//! 4. **Service** enforces existence and ownership, orchestrates store calls
//! 5. **Data** queries storage and converts rows to domain models
//! 6. **Controller** converts the domain result back to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
