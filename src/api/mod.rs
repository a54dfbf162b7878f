mod error;
mod handlers;

pub use error::ApiError;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::PostStore;

pub fn create_router(store: PostStore) -> Router {
    Router::new()
        .route(
            "/posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route(
            "/posts/{id}",
            get(handlers::get_post)
                .put(handlers::replace_post)
                .patch(handlers::patch_post)
                .delete(handlers::delete_post),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn status_of(method: Method, uri: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_router(PostStore::new())
            .oneshot(request)
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        assert_eq!(status_of(Method::GET, "/authors").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn paths_are_case_sensitive() {
        assert_eq!(status_of(Method::GET, "/Posts").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unsupported_method_is_rejected() {
        assert_eq!(
            status_of(Method::DELETE, "/posts").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn health_reports_ok() {
        assert_eq!(status_of(Method::GET, "/health").await, StatusCode::OK);
    }
}
