use contracts::domain::a002_order::aggregate::{
    CreateOrderRequest, OrderDetail, OrderId, OrderItemInput, OrderSummary,
};
use contracts::domain::a002_order::lifecycle::{OrderAction, OrderStatus};
use contracts::domain::common::AggregateRoot;

use crate::shared::api_utils::{get_json, post_empty, post_json, ClientError};

/// `/orders` or `/orders?status=PAID`
pub fn list_path(status: Option<OrderStatus>) -> String {
    let base = OrderDetail::collection_path();
    match status {
        Some(status) => format!("{}?status={}", base, urlencoding::encode(status.as_str())),
        None => base,
    }
}

/// `/orders/{id}/{pay|ship|cancel}`
pub fn action_path(id: OrderId, action: OrderAction) -> String {
    format!("{}/{}", OrderDetail::element_path(id), action.path_segment())
}

/// POST /orders
pub async fn create_order(items: Vec<OrderItemInput>) -> Result<OrderDetail, ClientError> {
    post_json(&OrderDetail::collection_path(), &CreateOrderRequest { items }).await
}

/// GET /orders[?status=S]
pub async fn list_orders(status: Option<OrderStatus>) -> Result<Vec<OrderSummary>, ClientError> {
    get_json(&list_path(status)).await
}

/// GET /orders/{id}
pub async fn get_order(id: OrderId) -> Result<OrderDetail, ClientError> {
    get_json(&OrderDetail::element_path(id)).await
}

/// POST /orders/{id}/pay
pub async fn pay_order(id: OrderId) -> Result<OrderDetail, ClientError> {
    post_empty(&action_path(id, OrderAction::Pay)).await
}

/// POST /orders/{id}/ship
pub async fn ship_order(id: OrderId) -> Result<OrderDetail, ClientError> {
    post_empty(&action_path(id, OrderAction::Ship)).await
}

/// POST /orders/{id}/cancel
pub async fn cancel_order(id: OrderId) -> Result<OrderDetail, ClientError> {
    post_empty(&action_path(id, OrderAction::Cancel)).await
}
