//! Cross-origin resource sharing.
//!
//! The browser UI is served from a different origin than the API, so every
//! route answers preflight requests and allows any origin, method and header.

use tower_http::cors::CorsLayer;

/// Permissive CORS layer for all routes.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
