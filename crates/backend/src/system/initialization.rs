use anyhow::Context;

use crate::domain::a001_product;
use crate::shared::data::db::get_connection;

/// Ensure the product catalog has its starter rows
pub async fn ensure_catalog_seeded() -> anyhow::Result<()> {
    let inserted = a001_product::service::seed_if_empty(get_connection())
        .await
        .context("seeding product catalog")?;
    if inserted > 0 {
        tracing::info!("Seeded {} products", inserted);
    } else {
        tracing::info!("Product catalog already populated");
    }
    Ok(())
}
