//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the brewery service: HTTP endpoints,
//! bearer token checks, business rules, and the two storage backends. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, validation, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic behind traits, one database and one in-memory implementation per entity
//! - **Data Layer** (`data/`) - Repositories over SeaORM plus the in-memory store
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token verification
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (services and token verifier)
//! - **Startup** (`startup`) - Database connection, migrations, seeding, key loading
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request
//! 2. **Middleware** verifies the bearer token and attaches its claims
//! 3. **Controller** validates the body, converts DTOs to params, calls the service
//! 4. **Service** runs the operation in one transaction (or under the store lock)
//! 5. **Data** reads and writes rows, converting entities to domain models
//! 6. **Controller** converts the domain model to a DTO and picks the status code

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
