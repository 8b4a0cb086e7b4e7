use contracts::domain::a001_product::aggregate::Product;
use contracts::shared::money::format_minor_units;
use leptos::prelude::*;

use super::super::controller::Command;
use super::super::state::{parse_quantity, AppState};

/// Каталог с полем количества для каждого товара
#[component]
pub fn ProductTable(state: RwSignal<AppState>) -> impl IntoView {
    view! {
        <section class="order-desk__products">
            <h2>"Products"</h2>
            <table class="table">
                <thead>
                    <tr>
                        <th>"SKU"</th>
                        <th>"Name"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                        <th>"Qty"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.products.clone())
                        // stock is part of the key so a refreshed row is redrawn
                        key=|p: &Product| (p.id, p.stock)
                        children=move |product: Product| {
                            let id = product.id;
                            let quantity = move || state.with(|s| s.quantity(id)).to_string();
                            view! {
                                <tr>
                                    <td>{product.sku}</td>
                                    <td>{product.name}</td>
                                    <td>{format_minor_units(product.price)}</td>
                                    <td>{product.stock}</td>
                                    <td>
                                        <input
                                            type="number"
                                            min="0"
                                            class="form__input"
                                            prop:value=quantity
                                            on:input=move |ev| {
                                                let qty = parse_quantity(&event_target_value(&ev));
                                                state.update(|s| s.set_quantity(id, qty));
                                            }
                                        />
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

/// Disabled until some quantity is above zero
#[component]
pub fn CreateOrderButton(state: RwSignal<AppState>, on_command: Callback<Command>) -> impl IntoView {
    let can_create = move || state.with(|s| s.can_create_order());

    view! {
        <button
            class="button button--primary"
            disabled=move || !can_create()
            on:click=move |_| on_command.run(Command::CreateOrder)
        >
            "Create Order"
        </button>
    }
}
