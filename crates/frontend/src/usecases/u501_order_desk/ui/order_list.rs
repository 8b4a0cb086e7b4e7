use contracts::domain::a002_order::aggregate::OrderSummary;
use contracts::domain::a002_order::lifecycle::OrderStatus;
use contracts::shared::money::format_minor_units;
use leptos::prelude::*;

use super::super::controller::Command;
use super::super::state::{parse_status_filter, status_filter_value, AppState};
use super::StatusBadge;
use crate::shared::date_utils::format_timestamp;

#[component]
pub fn OrderList(state: RwSignal<AppState>, on_command: Callback<Command>) -> impl IntoView {
    let filter_value = move || state.with(|s| status_filter_value(s.status_filter));

    view! {
        <section class="order-desk__orders">
            <h2>"Orders"</h2>
            <div class="order-desk__toolbar">
                <select
                    class="form__select"
                    on:change=move |ev| {
                        let filter = parse_status_filter(&event_target_value(&ev));
                        on_command.run(Command::ChangeStatusFilter(filter));
                    }
                >
                    <option value="" selected=move || filter_value().is_empty()>"All"</option>
                    {OrderStatus::ALL
                        .into_iter()
                        .map(move |status| {
                            view! {
                                <option
                                    value=status.as_str()
                                    selected=move || filter_value() == status.as_str()
                                >
                                    {status.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button class="button" on:click=move |_| on_command.run(Command::RefreshOrders)>
                    "Refresh"
                </button>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Status"</th>
                        <th>"Total"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.orders.clone())
                        key=|o: &OrderSummary| (o.id, o.status)
                        children=move |order: OrderSummary| {
                            let id = order.id;
                            view! {
                                <tr>
                                    <td>{format!("#{}", order.id)}</td>
                                    <td><StatusBadge status=order.status /></td>
                                    <td>{format_minor_units(order.total_amount)}</td>
                                    <td>{format_timestamp(&order.created_at)}</td>
                                    <td>
                                        <button
                                            class="button button--small"
                                            on:click=move |_| on_command.run(Command::ViewOrder(id))
                                        >
                                            "View"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
