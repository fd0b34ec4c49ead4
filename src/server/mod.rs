//! Server-side API backend and business logic.
//!
//! The backend records typed dictation attempts, scores them against the dictation's
//! reference text and keeps a running performance summary per user and dictation. It
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Scoring, summary maintenance and transaction coordination
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Caller identity and ownership guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection, listener binding and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Transaction deadline helper
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the caller from the `X-User-Id` header
//! 3. **Controller** validates access, converts DTOs to params, calls service
//! 4. **Service** executes business logic, opening a transaction where several writes must land together
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
