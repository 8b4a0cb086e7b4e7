//! Order line storage. `unit_price` is a snapshot of the product price.

use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a002_order::aggregate::OrderId;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_order_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn product(&self) -> ProductId {
        ProductId(self.product_id)
    }
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    order_id: OrderId,
    product_id: ProductId,
    quantity: i32,
    unit_price: i64,
) -> Result<(), DbErr> {
    let active = ActiveModel {
        order_id: Set(order_id.0),
        product_id: Set(product_id.0),
        quantity: Set(quantity),
        unit_price: Set(unit_price),
        ..Default::default()
    };
    active.insert(db).await?;
    Ok(())
}

/// Lines in insertion order
pub async fn list_for_order<C: ConnectionTrait>(
    db: &C,
    order_id: OrderId,
) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::OrderId.eq(order_id.0))
        .order_by_asc(Column::Id)
        .all(db)
        .await
}
