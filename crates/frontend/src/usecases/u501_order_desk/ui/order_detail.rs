use contracts::domain::a002_order::aggregate::{OrderDetail, OrderLine};
use contracts::domain::a002_order::lifecycle::OrderAction;
use contracts::shared::money::format_minor_units;
use leptos::prelude::*;

use super::super::controller::Command;
use super::super::state::AppState;

/// Header line of the detail panel: `#7 | CREATED | 10.00`
pub fn detail_header(detail: &OrderDetail) -> String {
    format!(
        "#{} | {} | {}",
        detail.id,
        detail.status,
        format_minor_units(detail.total_amount)
    )
}

/// `Widget x 2 @ 5.00`
pub fn line_text(line: &OrderLine) -> String {
    format!(
        "{} x {} @ {}",
        line.product_name,
        line.quantity,
        format_minor_units(line.unit_price)
    )
}

/// Детали выбранного заказа и кнопки Pay / Ship / Cancel.
/// Кнопки не блокируются по статусу, недопустимый переход отклоняет сервер.
#[component]
pub fn OrderDetailPanel(state: RwSignal<AppState>, on_command: Callback<Command>) -> impl IntoView {
    let detail = move || state.with(|s| s.order_detail.clone());

    view! {
        <section class="order-desk__detail">
            <h2>"Order Detail"</h2>
            {move || match detail() {
                None => view! { <p class="muted">"Select an order to view"</p> }.into_any(),
                Some(detail) => view! {
                    <div>
                        <p class="order-desk__header">{detail_header(&detail)}</p>
                        <ul>
                            {detail
                                .items
                                .iter()
                                .map(|line| view! { <li>{line_text(line)}</li> })
                                .collect_view()}
                        </ul>
                        <div class="order-desk__actions">
                            {OrderAction::ALL
                                .into_iter()
                                .map(move |action| {
                                    view! {
                                        <button
                                            class="button"
                                            on:click=move |_| on_command.run(Command::Apply(action))
                                        >
                                            {action.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
