use std::cell::RefCell;
use std::collections::BTreeMap;

use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a002_order::aggregate::{OrderDetail, OrderId, OrderItemInput, OrderSummary};
use contracts::domain::a002_order::lifecycle::OrderStatus;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;

/// Everything the desk shows. Mutated only through the methods below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub products: Vec<Product>,
    /// Chosen quantity per product; missing means 0
    pub quantities: BTreeMap<ProductId, i64>,
    pub orders: Vec<OrderSummary>,
    pub status_filter: Option<OrderStatus>,
    pub selected_order: Option<OrderId>,
    pub order_detail: Option<OrderDetail>,
    /// Last status or error line; empty hides the banner
    pub message: String,
}

impl AppState {
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn set_orders(&mut self, orders: Vec<OrderSummary>) {
        self.orders = orders;
    }

    pub fn quantity(&self, product_id: ProductId) -> i64 {
        self.quantities.get(&product_id).copied().unwrap_or(0)
    }

    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.quantities.insert(product_id, quantity);
    }

    /// Items to submit: every product with a strictly positive quantity,
    /// in product id order.
    pub fn selected_items(&self) -> Vec<OrderItemInput> {
        self.quantities
            .iter()
            .filter(|(_, quantity)| **quantity > 0)
            .map(|(product_id, quantity)| OrderItemInput {
                product_id: *product_id,
                quantity: i32::try_from(*quantity).unwrap_or(i32::MAX),
            })
            .collect()
    }

    pub fn can_create_order(&self) -> bool {
        self.quantities.values().any(|quantity| *quantity > 0)
    }

    pub fn set_status_filter(&mut self, filter: Option<OrderStatus>) {
        self.status_filter = filter;
    }

    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    /// Shows a rejected request as `"{error}: {message}"`
    pub fn fail(&mut self, err: &ApiError) {
        self.message = err.to_string();
    }

    pub fn order_created(&mut self, detail: &OrderDetail) {
        self.message = format!("Order #{} created", detail.id);
        self.quantities.clear();
    }

    /// Selects the order and shows `detail` for it
    pub fn show_order(&mut self, detail: OrderDetail) {
        self.selected_order = Some(detail.id);
        self.order_detail = Some(detail);
    }

    /// Response of a Pay/Ship/Cancel replaces the detail panel
    pub fn transition_applied(&mut self, detail: OrderDetail) {
        self.order_detail = Some(detail);
    }
}

/// Reads `<input type=number>` text. Empty, malformed or negative input
/// counts as 0.
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse::<i64>().map(|q| q.max(0)).unwrap_or(0)
}

/// `<select>` value to filter: `""` is "All".
pub fn parse_status_filter(raw: &str) -> Option<OrderStatus> {
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

/// Filter to `<select>` value
pub fn status_filter_value(filter: Option<OrderStatus>) -> &'static str {
    filter.map(|s| s.as_str()).unwrap_or("")
}

/// Where the controller keeps [`AppState`]: a signal in the browser,
/// a `RefCell` in tests.
pub trait StateStore {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;

    fn update_state(&self, f: impl FnOnce(&mut AppState));
}

impl StateStore for RwSignal<AppState> {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut AppState)) {
        self.update(f);
    }
}

impl StateStore for RefCell<AppState> {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.borrow_mut());
    }
}
