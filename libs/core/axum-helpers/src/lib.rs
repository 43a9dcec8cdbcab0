//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: Uniform `{success, message, errors}` error envelopes
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON, validated query)
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`server`]**: Router assembly, server setup, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes);
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorBody, validation_messages};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson, ValidatedQuery};

// Re-export HTTP middleware
pub use http::{create_permissive_cors_layer, security_headers};

// Re-export server helpers
pub use server::{create_app, create_router, shutdown_signal};
