use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, method, and header. Appropriate for a public
/// read-mostly catalog API with no credentials in play.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
