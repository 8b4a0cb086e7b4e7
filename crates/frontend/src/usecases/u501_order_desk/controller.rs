//! Async command handlers. Each one awaits its calls in sequence; after a
//! mutation products are refreshed before orders.

use contracts::domain::a002_order::aggregate::OrderId;
use contracts::domain::a002_order::lifecycle::{OrderAction, OrderStatus};

use super::api::OrdersApi;
use super::state::StateStore;
use crate::shared::api_utils::ClientError;

/// User intents that reach the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LoadInitial,
    RefreshOrders,
    ChangeStatusFilter(Option<OrderStatus>),
    CreateOrder,
    ViewOrder(OrderId),
    Apply(OrderAction),
}

/// Runs `command`. A rejected request ends up in the message banner;
/// transport failures are only logged. Either way state written before the
/// failure stays as it is.
pub async fn dispatch<A: OrdersApi, S: StateStore>(api: &A, store: &S, command: Command) {
    let result = match command {
        Command::LoadInitial => load_initial(api, store).await,
        Command::RefreshOrders => refresh_orders(api, store).await,
        Command::ChangeStatusFilter(filter) => change_status_filter(api, store, filter).await,
        Command::CreateOrder => create_order(api, store).await,
        Command::ViewOrder(id) => view_order(api, store, id).await,
        Command::Apply(action) => apply_action(api, store, action).await,
    };

    match result {
        Ok(()) => {}
        Err(ClientError::Api(e)) => store.update_state(|s| s.fail(&e)),
        Err(ClientError::Transport(e)) => log::error!("{:?} failed: {}", command, e),
    }
}

pub async fn load_initial<A: OrdersApi, S: StateStore>(
    api: &A,
    store: &S,
) -> Result<(), ClientError> {
    refresh_products(api, store).await?;
    refresh_orders(api, store).await
}

pub async fn refresh_products<A: OrdersApi, S: StateStore>(
    api: &A,
    store: &S,
) -> Result<(), ClientError> {
    let products = api.get_products().await?;
    store.update_state(|s| s.set_products(products));
    Ok(())
}

pub async fn refresh_orders<A: OrdersApi, S: StateStore>(
    api: &A,
    store: &S,
) -> Result<(), ClientError> {
    let filter = store.read_state(|s| s.status_filter);
    let orders = api.list_orders(filter).await?;
    store.update_state(|s| s.set_orders(orders));
    Ok(())
}

pub async fn change_status_filter<A: OrdersApi, S: StateStore>(
    api: &A,
    store: &S,
    filter: Option<OrderStatus>,
) -> Result<(), ClientError> {
    store.update_state(|s| s.set_status_filter(filter));
    refresh_orders(api, store).await
}

/// Submits the positive quantities. Does nothing when there are none.
pub async fn create_order<A: OrdersApi, S: StateStore>(
    api: &A,
    store: &S,
) -> Result<(), ClientError> {
    let items = store.read_state(|s| s.selected_items());
    if items.is_empty() {
        return Ok(());
    }
    store.update_state(|s| s.clear_message());

    let detail = api.create_order(items).await?;
    store.update_state(|s| s.order_created(&detail));

    refresh_products(api, store).await?;
    refresh_orders(api, store).await?;
    store.update_state(|s| s.show_order(detail));
    Ok(())
}

/// Selection changes only after the detail has arrived.
pub async fn view_order<A: OrdersApi, S: StateStore>(
    api: &A,
    store: &S,
    id: OrderId,
) -> Result<(), ClientError> {
    let detail = api.get_order(id).await?;
    store.update_state(|s| s.show_order(detail));
    Ok(())
}

/// Sends Pay/Ship/Cancel for the selected order. Does nothing without a
/// selection; invalid transitions are left for the service to reject.
pub async fn apply_action<A: OrdersApi, S: StateStore>(
    api: &A,
    store: &S,
    action: OrderAction,
) -> Result<(), ClientError> {
    let Some(id) = store.read_state(|s| s.selected_order) else {
        return Ok(());
    };
    store.update_state(|s| s.clear_message());

    let detail = match action {
        OrderAction::Pay => api.pay_order(id).await?,
        OrderAction::Ship => api.ship_order(id).await?,
        OrderAction::Cancel => api.cancel_order(id).await?,
    };
    store.update_state(|s| s.transition_applied(detail));

    refresh_products(api, store).await?;
    refresh_orders(api, store).await
}
