//! Server assembly: router construction, listener bind, graceful shutdown.

pub mod app;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use shutdown::shutdown_signal;
