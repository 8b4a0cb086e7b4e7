//! Order lifecycle: CREATED → PAID → SHIPPED, or CREATED → CANCELLED.
//!
//! The service enforces these transitions; the desk only renders the status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Paid,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in lifecycle order, as offered by the status filter.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Created,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// No action leads out of a terminal status.
    pub fn is_terminal(&self) -> bool {
        match self {
            OrderStatus::Shipped | OrderStatus::Cancelled => true,
            OrderStatus::Created | OrderStatus::Paid => false,
        }
    }

    /// Status reached by applying `action`, or the reason it is not allowed.
    pub fn apply(self, action: OrderAction) -> Result<OrderStatus, LifecycleError> {
        match (self, action) {
            (OrderStatus::Created, OrderAction::Pay) => Ok(OrderStatus::Paid),
            (OrderStatus::Created, OrderAction::Cancel) => Ok(OrderStatus::Cancelled),
            (OrderStatus::Paid, OrderAction::Ship) => Ok(OrderStatus::Shipped),
            (from, action) => Err(LifecycleError { from, action }),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown order status: {}", s))
    }
}

/// Действие над заказом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderAction {
    Pay,
    Ship,
    Cancel,
}

impl OrderAction {
    pub const ALL: [OrderAction; 3] = [OrderAction::Pay, OrderAction::Ship, OrderAction::Cancel];

    /// Sub-path of `POST /orders/{id}/{action}`
    pub fn path_segment(&self) -> &'static str {
        match self {
            OrderAction::Pay => "pay",
            OrderAction::Ship => "ship",
            OrderAction::Cancel => "cancel",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::Pay => "Pay",
            OrderAction::Ship => "Ship",
            OrderAction::Cancel => "Cancel",
        }
    }

    /// The only status this action may start from.
    pub fn required_status(&self) -> OrderStatus {
        match self {
            OrderAction::Pay | OrderAction::Cancel => OrderStatus::Created,
            OrderAction::Ship => OrderStatus::Paid,
        }
    }
}

/// Rejected transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleError {
    pub from: OrderStatus,
    pub action: OrderAction,
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.action {
            OrderAction::Pay => "paid",
            OrderAction::Ship => "shipped",
            OrderAction::Cancel => "cancelled",
        };
        write!(f, "Only {} order can be {}", self.action.required_status(), verb)
    }
}

impl std::error::Error for LifecycleError {}
