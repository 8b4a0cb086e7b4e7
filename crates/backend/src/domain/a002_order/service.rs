use std::collections::{HashMap, HashSet};

use chrono::Utc;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a002_order::aggregate::{
    CreateOrderRequest, OrderDetail, OrderId, OrderItemInput, OrderLine, OrderListQuery,
    OrderSummary,
};
use contracts::domain::a002_order::lifecycle::{OrderAction, OrderStatus};
use contracts::shared::api_error::{ApiError, ApiErrorKind};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use super::{lines, repository};
use crate::domain::a001_product::repository as product_repository;
use crate::shared::error::ServiceError;

/// Shape checks that need no database access.
fn validate_items(items: &[OrderItemInput]) -> Result<(), ApiError> {
    if items.is_empty() {
        return Err(ApiError::validation("Order must contain at least one item"));
    }
    let mut seen = HashSet::new();
    for item in items {
        if item.quantity <= 0 {
            return Err(ApiError::validation(format!(
                "Quantity for product {} must be greater than 0",
                item.product_id
            )));
        }
        if !seen.insert(item.product_id) {
            return Err(ApiError::validation(format!(
                "Product {} is listed more than once",
                item.product_id
            )));
        }
    }
    Ok(())
}

/// Resolves every item against the locked-in product rows and returns the
/// order total.
fn check_stock(
    items: &[OrderItemInput],
    products: &HashMap<ProductId, Product>,
) -> Result<i64, ApiError> {
    let mut total = 0i64;
    for item in items {
        let product = products.get(&item.product_id).ok_or_else(|| {
            ApiError::new(
                ApiErrorKind::ProductNotFound,
                format!("Product {} not found", item.product_id),
            )
        })?;
        if !product.can_fulfil(item.quantity) {
            return Err(ApiError::new(
                ApiErrorKind::InsufficientStock,
                format!("Insufficient stock for product {}", item.product_id),
            ));
        }
        total = product
            .price
            .checked_mul(i64::from(item.quantity))
            .and_then(|line| total.checked_add(line))
            .ok_or_else(|| ApiError::validation("Order total is out of range"))?;
    }
    Ok(total)
}

/// Создание заказа: списывает остатки и фиксирует цены позиций.
///
/// Все проверки выполняются до первой записи, вся операция идёт в одной
/// транзакции.
pub async fn create(
    db: &DatabaseConnection,
    request: CreateOrderRequest,
) -> Result<OrderDetail, ServiceError> {
    let items = request.items;
    validate_items(&items)?;

    let txn = db.begin().await?;

    let ids: Vec<ProductId> = items.iter().map(|i| i.product_id).collect();
    let products: HashMap<ProductId, Product> = product_repository::find_by_ids(&txn, &ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    let total = check_stock(&items, &products)?;

    let order = repository::insert(&txn, OrderStatus::Created, total, Utc::now()).await?;
    let order_id = order.order_id();
    for item in &items {
        let unit_price = products[&item.product_id].price;
        product_repository::adjust_stock(&txn, item.product_id, -item.quantity).await?;
        lines::insert(&txn, order_id, item.product_id, item.quantity, unit_price).await?;
    }

    txn.commit().await?;
    tracing::info!("Order #{} created, total {}", order_id, total);

    get_by_id(db, order_id).await
}

/// Заказ с позициями
pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: OrderId) -> Result<OrderDetail, ServiceError> {
    let order = repository::get_by_id(db, id)
        .await?
        .ok_or_else(ApiError::order_not_found)?;
    let line_rows = lines::list_for_order(db, id).await?;

    let product_ids: Vec<ProductId> = line_rows.iter().map(|l| l.product()).collect();
    let names: HashMap<ProductId, String> = product_repository::find_by_ids(db, &product_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();

    let items = line_rows
        .into_iter()
        .map(|l| OrderLine {
            product_id: l.product(),
            product_name: names.get(&l.product()).cloned().unwrap_or_default(),
            quantity: l.quantity,
            unit_price: l.unit_price,
        })
        .collect();

    let summary = order.to_summary()?;
    Ok(OrderDetail {
        id: summary.id,
        status: summary.status,
        total_amount: summary.total_amount,
        created_at: summary.created_at,
        items,
    })
}

/// Список заказов, новые сверху
pub async fn list<C: ConnectionTrait>(
    db: &C,
    query: &OrderListQuery,
) -> Result<Vec<OrderSummary>, ServiceError> {
    repository::list(db, query.status_filter())
        .await?
        .iter()
        .map(repository::Model::to_summary)
        .collect()
}

/// Applies a lifecycle action. Cancelling returns the ordered quantities
/// to stock.
pub async fn transition(
    db: &DatabaseConnection,
    id: OrderId,
    action: OrderAction,
) -> Result<OrderDetail, ServiceError> {
    let txn = db.begin().await?;

    let order = repository::get_by_id(&txn, id)
        .await?
        .ok_or_else(ApiError::order_not_found)?;
    let from = order.parsed_status()?;
    let to = from.apply(action)?;

    match action {
        OrderAction::Cancel => {
            for line in lines::list_for_order(&txn, id).await? {
                product_repository::adjust_stock(&txn, line.product(), line.quantity).await?;
            }
        }
        OrderAction::Pay | OrderAction::Ship => {}
    }
    repository::set_status(&txn, id, to).await?;

    txn.commit().await?;
    tracing::info!("Order #{}: {} -> {}", id, from, to);

    get_by_id(db, id).await
}

pub async fn pay(db: &DatabaseConnection, id: OrderId) -> Result<OrderDetail, ServiceError> {
    transition(db, id, OrderAction::Pay).await
}

pub async fn ship(db: &DatabaseConnection, id: OrderId) -> Result<OrderDetail, ServiceError> {
    transition(db, id, OrderAction::Ship).await
}

pub async fn cancel(db: &DatabaseConnection, id: OrderId) -> Result<OrderDetail, ServiceError> {
    transition(db, id, OrderAction::Cancel).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::service as product_service;
    use crate::shared::data::db::test_connection;

    async fn seeded() -> (DatabaseConnection, Vec<Product>) {
        let db = test_connection().await;
        product_service::seed_if_empty(&db).await.unwrap();
        let products = product_service::list_all(&db).await.unwrap();
        (db, products)
    }

    fn request(items: &[(ProductId, i32)]) -> CreateOrderRequest {
        CreateOrderRequest {
            items: items
                .iter()
                .map(|(product_id, quantity)| OrderItemInput {
                    product_id: *product_id,
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    fn business_kind(err: ServiceError) -> ApiErrorKind {
        match err {
            ServiceError::Business(e) => e.error,
            other => panic!("expected business error, got {other:?}"),
        }
    }

    async fn stock_of(db: &DatabaseConnection, id: ProductId) -> i32 {
        product_service::list_all(db)
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
            .stock
    }

    #[tokio::test]
    async fn create_snapshots_prices_and_takes_stock() {
        let (db, products) = seeded().await;
        let apple = &products[0];
        let coffee = &products[2];

        let order = create(&db, request(&[(apple.id, 2), (coffee.id, 1)]))
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Created);
        assert_eq!(order.total_amount, 2 * 3000 + 4500);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product_name, "Apple");
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].unit_price, 3000);
        assert_eq!(order.items[1].product_name, "Coffee");
        assert_eq!(stock_of(&db, apple.id).await, 8);
        assert_eq!(stock_of(&db, coffee.id).await, 9);
    }

    #[tokio::test]
    async fn insufficient_stock_writes_nothing() {
        let (db, products) = seeded().await;
        let apple = products[0].id;
        let banana = products[1].id;

        let err = create(&db, request(&[(apple, 1), (banana, 11)]))
            .await
            .unwrap_err();

        assert_eq!(business_kind(err), ApiErrorKind::InsufficientStock);
        assert_eq!(stock_of(&db, apple).await, 10);
        assert!(list(&db, &OrderListQuery::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_product_is_reported() {
        let (db, _) = seeded().await;
        let err = create(&db, request(&[(ProductId(999), 1)])).await.unwrap_err();
        match err {
            ServiceError::Business(e) => {
                assert_eq!(e.to_string(), "PRODUCT_NOT_FOUND: Product 999 not found");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_requests_are_validation_errors() {
        let (db, products) = seeded().await;
        let apple = products[0].id;

        for bad in [request(&[]), request(&[(apple, 0)]), request(&[(apple, 1), (apple, 2)])] {
            let err = create(&db, bad).await.unwrap_err();
            assert_eq!(business_kind(err), ApiErrorKind::ValidationError);
        }
        assert_eq!(stock_of(&db, apple).await, 10);
    }

    #[test]
    fn total_overflow_is_rejected() {
        let pricey = Product {
            id: ProductId(1),
            sku: "GOLD".into(),
            name: "Gold".into(),
            price: i64::MAX / 2,
            stock: 10,
        };
        let products = HashMap::from([(pricey.id, pricey)]);
        let items = [OrderItemInput {
            product_id: ProductId(1),
            quantity: 3,
        }];

        let err = check_stock(&items, &products).unwrap_err();
        assert_eq!(err.error, ApiErrorKind::ValidationError);
        assert_eq!(err.message, "Order total is out of range");
    }

    #[tokio::test]
    async fn happy_path_pay_then_ship() {
        let (db, products) = seeded().await;
        let order = create(&db, request(&[(products[0].id, 1)])).await.unwrap();

        let paid = pay(&db, order.id).await.unwrap();
        assert_eq!(paid.status, OrderStatus::Paid);
        assert_eq!(paid.items, order.items);

        let shipped = ship(&db, order.id).await.unwrap();
        assert_eq!(shipped.status, OrderStatus::Shipped);

        let err = cancel(&db, order.id).await.unwrap_err();
        assert_eq!(business_kind(err), ApiErrorKind::InvalidStatus);
        assert_eq!(stock_of(&db, products[0].id).await, 9);
    }

    #[tokio::test]
    async fn cancel_restocks() {
        let (db, products) = seeded().await;
        let banana = products[1].id;
        let order = create(&db, request(&[(banana, 4)])).await.unwrap();
        assert_eq!(stock_of(&db, banana).await, 6);

        let cancelled = cancel(&db, order.id).await.unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
        assert_eq!(stock_of(&db, banana).await, 10);

        // terminal: a second cancel must not restock again
        let err = cancel(&db, order.id).await.unwrap_err();
        assert_eq!(business_kind(err), ApiErrorKind::InvalidStatus);
        assert_eq!(stock_of(&db, banana).await, 10);
    }

    #[tokio::test]
    async fn ship_requires_payment() {
        let (db, products) = seeded().await;
        let order = create(&db, request(&[(products[2].id, 1)])).await.unwrap();

        match ship(&db, order.id).await.unwrap_err() {
            ServiceError::Business(e) => {
                assert_eq!(e.to_string(), "INVALID_STATUS: Only PAID order can be shipped")
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(get_by_id(&db, order.id).await.unwrap().status, OrderStatus::Created);
    }

    #[tokio::test]
    async fn missing_order() {
        let (db, _) = seeded().await;
        let err = get_by_id(&db, OrderId(42)).await.unwrap_err();
        assert_eq!(business_kind(err), ApiErrorKind::OrderNotFound);
        let err = pay(&db, OrderId(42)).await.unwrap_err();
        assert_eq!(business_kind(err), ApiErrorKind::OrderNotFound);
    }

    #[tokio::test]
    async fn list_filters_by_status_newest_first() {
        let (db, products) = seeded().await;
        let first = create(&db, request(&[(products[0].id, 1)])).await.unwrap();
        let second = create(&db, request(&[(products[1].id, 1)])).await.unwrap();
        let third = create(&db, request(&[(products[2].id, 1)])).await.unwrap();
        pay(&db, second.id).await.unwrap();

        let all = list(&db, &OrderListQuery::default()).await.unwrap();
        let ids: Vec<OrderId> = all.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);

        let empty_filter = list(&db, &OrderListQuery { status: Some(String::new()) })
            .await
            .unwrap();
        assert_eq!(empty_filter, all);

        let paid = list(&db, &OrderListQuery { status: Some("PAID".into()) })
            .await
            .unwrap();
        assert_eq!(paid.len(), 1);
        assert_eq!(paid[0].id, second.id);
        assert_eq!(paid[0].status, OrderStatus::Paid);

        let unknown = list(&db, &OrderListQuery { status: Some("LOST".into()) })
            .await
            .unwrap();
        assert!(unknown.is_empty());
    }
}
