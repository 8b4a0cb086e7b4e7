use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lifecycle::OrderStatus;
use crate::domain::a001_product::aggregate::ProductId;
use crate::domain::common::{AggregateId, AggregateRoot};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub i32);

impl AggregateId for OrderId {
    fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Read models
// ============================================================================

/// Строка списка заказов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Order line. `unit_price` is the product price captured when the
/// order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: i64,
}

/// Заказ с позициями
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: OrderId,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

impl OrderDetail {
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id,
            status: self.status,
            total_amount: self.total_amount,
            created_at: self.created_at,
        }
    }
}

impl AggregateRoot for OrderDetail {
    type Id = OrderId;

    fn collection_name() -> &'static str {
        "orders"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Одна позиция в запросе на создание заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemInput>,
}

/// Query of `GET /orders`. An empty `status` means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
}

impl OrderListQuery {
    /// Filter value with the empty string folded into "no filter"
    pub fn status_filter(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_decodes_and_keeps_line_order() {
        let json = r#"{
            "id": 7,
            "status": "CREATED",
            "total_amount": 1000,
            "created_at": "2024-05-01T10:00:00Z",
            "items": [
                {"product_id": 1, "product_name": "Widget", "quantity": 2, "unit_price": 500},
                {"product_id": 3, "product_name": "Gadget", "quantity": 1, "unit_price": 0}
            ]
        }"#;
        let detail: OrderDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, OrderId(7));
        assert_eq!(detail.status, OrderStatus::Created);
        assert_eq!(detail.items[0].product_name, "Widget");
        assert_eq!(detail.items[0].unit_price, 500);
        assert_eq!(detail.items[1].product_id, ProductId(3));
        assert_eq!(detail.summary().total_amount, 1000);
    }

    #[test]
    fn create_request_wire_shape() {
        let request = CreateOrderRequest {
            items: vec![OrderItemInput {
                product_id: ProductId(1),
                quantity: 2,
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"items": [{"product_id": 1, "quantity": 2}]})
        );
    }

    #[test]
    fn empty_status_means_unfiltered() {
        let query = OrderListQuery {
            status: Some(String::new()),
        };
        assert_eq!(query.status_filter(), None);
        assert_eq!(OrderListQuery::default().status_filter(), None);
        let paid = OrderListQuery {
            status: Some("PAID".into()),
        };
        assert_eq!(paid.status_filter(), Some("PAID"));
    }

    #[test]
    fn order_paths() {
        assert_eq!(OrderDetail::collection_path(), "/orders");
        assert_eq!(OrderDetail::element_path(OrderId(7)), "/orders/7");
    }
}
