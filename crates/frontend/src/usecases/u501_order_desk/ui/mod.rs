pub mod order_detail;
pub mod order_list;
pub mod product_table;
pub mod status_badge;

pub use order_detail::OrderDetailPanel;
pub use order_list::OrderList;
pub use product_table::{CreateOrderButton, ProductTable};
pub use status_badge::StatusBadge;
