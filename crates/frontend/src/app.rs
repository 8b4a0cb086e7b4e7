use crate::usecases::u501_order_desk::OrderDesk;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <OrderDesk />
    }
}
