//! Shoes Domain
//!
//! This module provides a complete domain implementation for a shoe catalog
//! held in process memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_shoes::{
//!     handlers,
//!     repository::InMemoryShoeRepository,
//!     service::ShoeService,
//! };
//!
//! // Create the seeded repository and service
//! let repository = InMemoryShoeRepository::seeded();
//! let service = ShoeService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ShoeError, ShoeResult};
pub use handlers::ApiDoc;
pub use models::{CreateShoe, Shoe, ShoeFilter, UpdateShoe};
pub use repository::{InMemoryShoeRepository, ShoeRepository};
pub use service::ShoeService;
