use axum::http::Method;
use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::system::middleware::request_logger;

/// All routes of the static host.
///
/// Files that exist under `static_dir` are served as is; `/order-form` and
/// every other unknown path get the entry page so the client router can
/// take over.
pub fn configure_routes(static_dir: &Path, index_file: &str) -> Router {
    let index = static_dir.join(index_file);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS]);

    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route_service("/order-form", ServeFile::new(&index))
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(&index)))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const INDEX_HTML: &str = "<!doctype html><div id=\"root\"></div>";

    fn static_site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::create_dir(dir.path().join("pkg")).unwrap();
        std::fs::write(dir.path().join("pkg").join("app.js"), "console.log(1)").unwrap();
        dir
    }

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_reports_message() {
        let site = static_site();
        let (status, body) = get_text(configure_routes(site.path(), "index.html"), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"API is healthy"}"#);
    }

    #[tokio::test]
    async fn order_form_serves_entry_page() {
        let site = static_site();
        let (status, body) =
            get_text(configure_routes(site.path(), "index.html"), "/order-form?access=12345").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_entry_page() {
        let site = static_site();
        for uri in ["/OrderDashboard", "/QRPAGE", "/no/such/page"] {
            let (status, body) = get_text(configure_routes(site.path(), "index.html"), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, INDEX_HTML, "{uri}");
        }
    }

    #[tokio::test]
    async fn existing_assets_are_served_as_files() {
        let site = static_site();
        let (status, body) = get_text(configure_routes(site.path(), "index.html"), "/pkg/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }
}
