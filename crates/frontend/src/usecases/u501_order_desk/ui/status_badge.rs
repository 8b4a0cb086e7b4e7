use contracts::domain::a002_order::lifecycle::OrderStatus;
use leptos::prelude::*;

/// CSS class of the badge: closed orders are greyed out
pub fn badge_class(status: OrderStatus) -> &'static str {
    if status.is_terminal() {
        "badge badge--closed"
    } else {
        "badge badge--open"
    }
}

#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    view! { <span class=badge_class(status)>{status.as_str()}</span> }
}
