//! API routes module

pub mod health;

use axum::Router;
use domain_shoes::{ShoeRepository, ShoeService, handlers};

/// Create all API routes
pub fn routes<R: ShoeRepository + 'static>(service: ShoeService<R>) -> Router {
    Router::new().nest("/shoes", handlers::router(service))
}
