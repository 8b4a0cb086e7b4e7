use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a002_order::aggregate::{
    CreateOrderRequest, OrderDetail, OrderId, OrderListQuery, OrderSummary,
};
use contracts::shared::api_error::ApiError;

use crate::domain::a002_order;
use crate::shared::data::db::get_connection;
use crate::shared::error::ServiceError;

// Extractor rejections are answered with the same {error, message} body
// as business errors.
fn rejected(e: impl std::fmt::Display) -> ServiceError {
    ApiError::validation(e.to_string()).into()
}

fn order_id(path: Result<Path<i32>, PathRejection>) -> Result<OrderId, ServiceError> {
    let Path(id) = path.map_err(rejected)?;
    Ok(OrderId(id))
}

/// POST /orders
pub async fn create(
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderDetail>, ServiceError> {
    let Json(request) = body.map_err(rejected)?;
    let order = a002_order::service::create(get_connection(), request).await?;
    Ok(Json(order))
}

/// GET /orders?status=
pub async fn list(
    query: Result<Query<OrderListQuery>, QueryRejection>,
) -> Result<Json<Vec<OrderSummary>>, ServiceError> {
    let Query(query) = query.map_err(rejected)?;
    let orders = a002_order::service::list(get_connection(), &query).await?;
    Ok(Json(orders))
}

/// GET /orders/:id
pub async fn get_by_id(
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<OrderDetail>, ServiceError> {
    let id = order_id(path)?;
    let order = a002_order::service::get_by_id(get_connection(), id).await?;
    Ok(Json(order))
}

/// POST /orders/:id/pay
pub async fn pay(
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<OrderDetail>, ServiceError> {
    let id = order_id(path)?;
    Ok(Json(a002_order::service::pay(get_connection(), id).await?))
}

/// POST /orders/:id/ship
pub async fn ship(
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<OrderDetail>, ServiceError> {
    let id = order_id(path)?;
    Ok(Json(a002_order::service::ship(get_connection(), id).await?))
}

/// POST /orders/:id/cancel
pub async fn cancel(
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<OrderDetail>, ServiceError> {
    let id = order_id(path)?;
    Ok(Json(a002_order::service::cancel(get_connection(), id).await?))
}
