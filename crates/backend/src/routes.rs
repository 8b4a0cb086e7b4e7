use axum::http::{header, HeaderValue, Method};
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::handlers;
use crate::shared::config::CorsConfig;
use crate::system::middleware::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(serde_json::json!({ "ok": true })) }),
        )
        // ========================================
        // CATALOG
        // ========================================
        .route("/products", get(handlers::a001_product::list_all))
        // ========================================
        // ORDERS
        // ========================================
        .route(
            "/orders",
            get(handlers::a002_order::list).post(handlers::a002_order::create),
        )
        .route("/orders/:id", get(handlers::a002_order::get_by_id))
        .route("/orders/:id/pay", post(handlers::a002_order::pay))
        .route("/orders/:id/ship", post(handlers::a002_order::ship))
        .route("/orders/:id/cancel", post(handlers::a002_order::cancel))
}

pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Routes with request logging and CORS applied
pub fn build_app(cors: &CorsConfig) -> Router {
    configure_routes()
        .layer(middleware::from_fn(request_logger))
        .layer(cors_layer(cors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn call(app: Router, method: Method, uri: &str, body: Body) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn http_get(uri: &str) -> (StatusCode, serde_json::Value) {
        call(configure_routes(), Method::GET, uri, Body::empty()).await
    }

    async fn http_post(uri: &str) -> (StatusCode, serde_json::Value) {
        call(configure_routes(), Method::POST, uri, Body::empty()).await
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = call(configure_routes(), Method::GET, "/health", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn bad_order_id_uses_error_body() {
        let (status, body) =
            call(configure_routes(), Method::POST, "/orders/abc/pay", Body::empty()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn order_lifecycle_over_http() {
        crate::shared::data::db::install_test_connection().await;
        crate::system::initialization::ensure_catalog_seeded().await.unwrap();

        let (status, products) = http_get("/products").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(products[0]["name"], "Apple");
        assert_eq!(products[0]["stock"], 10);

        let (status, order) = call(
            configure_routes(),
            Method::POST,
            "/orders",
            Body::from(r#"{"items": [{"product_id": 1, "quantity": 2}]}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(order["status"], "CREATED");
        assert_eq!(order["total_amount"], 6000);
        let id = order["id"].as_i64().unwrap();

        let (_, created) = http_get("/orders?status=CREATED").await;
        assert_eq!(created.as_array().unwrap().len(), 1);
        let (_, paid) = http_get("/orders?status=PAID").await;
        assert!(paid.as_array().unwrap().is_empty());

        let (status, body) = http_post(&format!("/orders/{id}/pay")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "PAID");
        let (_, paid) = http_get("/orders?status=PAID").await;
        assert_eq!(paid[0]["id"], id);

        let (status, body) = http_post(&format!("/orders/{id}/cancel")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "INVALID_STATUS");
        assert_eq!(body["message"], "Only CREATED order can be cancelled");

        let (status, body) = http_post(&format!("/orders/{id}/ship")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "SHIPPED");

        let (status, body) = http_get(&format!("/orders/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["product_name"], "Apple");
        assert_eq!(body["items"][0]["unit_price"], 3000);

        let (status, body) = http_get("/orders/9999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "ORDER_NOT_FOUND");

        let (_, products) = http_get("/products").await;
        assert_eq!(products[0]["stock"], 8);
    }

    #[tokio::test]
    async fn malformed_create_body_uses_error_body() {
        let (status, body) = call(
            configure_routes(),
            Method::POST,
            "/orders",
            Body::from(r#"{"items": "many"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["message"].is_string());
    }
}
