use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a001_product::aggregate::Product;
use sea_orm::ConnectionTrait;

/// Стартовый каталог
const SEED_CATALOG: &[(&str, &str, i64, i32)] = &[
    ("SKU-APPLE", "Apple", 3000, 10),
    ("SKU-BANANA", "Banana", 1500, 10),
    ("SKU-COFFEE", "Coffee", 4500, 10),
];

/// Получение списка всех товаров (по возрастанию id)
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Product>, ServiceError> {
    Ok(repository::list_all(db).await?)
}

/// Seeds the catalog when the product table is empty.
/// Returns the number of inserted products.
pub async fn seed_if_empty<C: ConnectionTrait>(db: &C) -> Result<usize, ServiceError> {
    if repository::count(db).await? > 0 {
        return Ok(0);
    }
    for (sku, name, price, stock) in SEED_CATALOG {
        repository::insert(db, sku, name, *price, *stock).await?;
    }
    Ok(SEED_CATALOG.len())
}
