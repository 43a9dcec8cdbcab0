//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Shoe catalog API with filtering over an in-memory store",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api/shoes", api = domain_shoes::ApiDoc)
    ),
    tags(
        (name = "Shoes", description = "Shoe catalog endpoints")
    )
)]
pub struct ApiDoc;
