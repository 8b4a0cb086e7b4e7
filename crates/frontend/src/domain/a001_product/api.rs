use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;

use crate::shared::api_utils::{get_json, ClientError};

/// GET /products
pub async fn get_products() -> Result<Vec<Product>, ClientError> {
    get_json(&Product::collection_path()).await
}
