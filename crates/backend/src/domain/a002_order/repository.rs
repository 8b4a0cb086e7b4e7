use chrono::{DateTime, Utc};
use contracts::domain::a002_order::aggregate::{OrderId, OrderSummary};
use contracts::domain::a002_order::lifecycle::OrderStatus;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::error::ServiceError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub status: String,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn order_id(&self) -> OrderId {
        OrderId(self.id)
    }

    pub fn parsed_status(&self) -> Result<OrderStatus, ServiceError> {
        self.status
            .parse()
            .map_err(|e: String| ServiceError::Corrupt(format!("order {}: {}", self.id, e)))
    }

    pub fn to_summary(&self) -> Result<OrderSummary, ServiceError> {
        Ok(OrderSummary {
            id: self.order_id(),
            status: self.parsed_status()?,
            total_amount: self.total_amount,
            created_at: self.created_at,
        })
    }
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    status: OrderStatus,
    total_amount: i64,
    created_at: DateTime<Utc>,
) -> Result<Model, DbErr> {
    let active = ActiveModel {
        status: Set(status.as_str().to_string()),
        total_amount: Set(total_amount),
        created_at: Set(created_at),
        ..Default::default()
    };
    active.insert(db).await
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: OrderId) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id.0).one(db).await
}

/// Newest first. `status` is matched verbatim.
pub async fn list<C: ConnectionTrait>(db: &C, status: Option<&str>) -> Result<Vec<Model>, DbErr> {
    let mut query = Entity::find().order_by_desc(Column::Id);
    if let Some(status) = status {
        query = query.filter(Column::Status.eq(status));
    }
    query.all(db).await
}

pub async fn set_status<C: ConnectionTrait>(
    db: &C,
    id: OrderId,
    status: OrderStatus,
) -> Result<(), DbErr> {
    let active = ActiveModel {
        id: Set(id.0),
        status: Set(status.as_str().to_string()),
        ..Default::default()
    };
    active.update(db).await?;
    Ok(())
}
