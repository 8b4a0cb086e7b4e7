use axum::Json;
use contracts::domain::a001_product::aggregate::Product;

use crate::domain::a001_product;
use crate::shared::data::db::get_connection;
use crate::shared::error::ServiceError;

/// GET /products
pub async fn list_all() -> Result<Json<Vec<Product>>, ServiceError> {
    let items = a001_product::service::list_all(get_connection()).await?;
    Ok(Json(items))
}
