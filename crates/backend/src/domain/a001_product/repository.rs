use contracts::domain::a001_product::aggregate::{Product, ProductId};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub price: i64,
    pub stock: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: ProductId(m.id),
            sku: m.sku,
            name: m.name,
            price: m.price,
            stock: m.stock,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Product>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn find_by_ids<C: ConnectionTrait>(
    db: &C,
    ids: &[ProductId],
) -> Result<Vec<Product>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let items = Entity::find()
        .filter(Column::Id.is_in(ids.iter().map(|id| id.0)))
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    Entity::find().count(db).await
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    sku: &str,
    name: &str,
    price: i64,
    stock: i32,
) -> Result<Product, DbErr> {
    let active = ActiveModel {
        sku: Set(sku.to_string()),
        name: Set(name.to_string()),
        price: Set(price),
        stock: Set(stock),
        ..Default::default()
    };
    Ok(active.insert(db).await?.into())
}

/// `stock = stock + delta` in one statement
pub async fn adjust_stock<C: ConnectionTrait>(
    db: &C,
    id: ProductId,
    delta: i32,
) -> Result<(), DbErr> {
    let result = Entity::update_many()
        .col_expr(Column::Stock, Expr::col(Column::Stock).add(delta))
        .filter(Column::Id.eq(id.0))
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(DbErr::RecordNotUpdated);
    }
    Ok(())
}
