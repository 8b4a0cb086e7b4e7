use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::HttpOrdersApi;
use super::controller::{dispatch, Command};
use super::state::AppState;
use super::ui::{CreateOrderButton, OrderDetailPanel, OrderList, ProductTable};

fn run_command(state: RwSignal<AppState>, command: Command) {
    spawn_local(async move {
        dispatch(&HttpOrdersApi, &state, command).await;
    });
}

/// Рабочее место оператора: каталог, список заказов и карточка заказа
#[component]
pub fn OrderDesk() -> impl IntoView {
    let state = RwSignal::new(AppState::default());
    let on_command = Callback::new(move |command: Command| run_command(state, command));

    // Загрузить каталог и заказы при монтировании
    Effect::new(move || run_command(state, Command::LoadInitial));

    let message = move || state.with(|s| s.message.clone());

    view! {
        <div class="order-desk">
            <h1>"Orders"</h1>
            <Show when=move || !message().is_empty()>
                <div class="order-desk__message">{message}</div>
            </Show>
            <ProductTable state=state />
            <CreateOrderButton state=state on_command=on_command />
            <OrderList state=state on_command=on_command />
            <OrderDetailPanel state=state on_command=on_command />
        </div>
    }
}
