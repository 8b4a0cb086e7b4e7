use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_order::aggregate::{OrderDetail, OrderId, OrderItemInput, OrderSummary};
use contracts::domain::a002_order::lifecycle::OrderStatus;

use crate::domain::{a001_product, a002_order};
use crate::shared::api_utils::ClientError;

/// Remote operations the desk depends on
#[async_trait(?Send)]
pub trait OrdersApi {
    async fn get_products(&self) -> Result<Vec<Product>, ClientError>;

    async fn create_order(&self, items: Vec<OrderItemInput>) -> Result<OrderDetail, ClientError>;

    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderSummary>, ClientError>;

    async fn get_order(&self, id: OrderId) -> Result<OrderDetail, ClientError>;

    async fn pay_order(&self, id: OrderId) -> Result<OrderDetail, ClientError>;

    async fn ship_order(&self, id: OrderId) -> Result<OrderDetail, ClientError>;

    async fn cancel_order(&self, id: OrderId) -> Result<OrderDetail, ClientError>;
}

/// Talks to the order service over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOrdersApi;

#[async_trait(?Send)]
impl OrdersApi for HttpOrdersApi {
    async fn get_products(&self) -> Result<Vec<Product>, ClientError> {
        a001_product::api::get_products().await
    }

    async fn create_order(&self, items: Vec<OrderItemInput>) -> Result<OrderDetail, ClientError> {
        a002_order::api::create_order(items).await
    }

    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderSummary>, ClientError> {
        a002_order::api::list_orders(status).await
    }

    async fn get_order(&self, id: OrderId) -> Result<OrderDetail, ClientError> {
        a002_order::api::get_order(id).await
    }

    async fn pay_order(&self, id: OrderId) -> Result<OrderDetail, ClientError> {
        a002_order::api::pay_order(id).await
    }

    async fn ship_order(&self, id: OrderId) -> Result<OrderDetail, ClientError> {
        a002_order::api::ship_order(id).await
    }

    async fn cancel_order(&self, id: OrderId) -> Result<OrderDetail, ClientError> {
        a002_order::api::cancel_order(id).await
    }
}
