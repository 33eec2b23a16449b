use actor_framework::mock::MockClient;
use actor_framework::ActorClient;
use canteen::clients::{AccountClient, OrderClient};
use canteen::model::{
    Account, AccountId, CartLine, LineId, MenuItem, MenuItemId, Order, OrderCreate, OrderStatus,
    PaymentMethod, Role,
};
use canteen::order_actor::OrderError;

/// Integration tests: real Order actor with a mocked account directory.
/// This exercises the order actor's validation and status machine while
/// isolating it from the account actor.
///
/// Pattern 2: Actor + Mocks
/// - Real Order actor (creation hooks, transition logic)
/// - Mocked AccountClient (isolates the directory dependency)

fn student(id: u32) -> Account {
    Account {
        id: AccountId(id),
        name: "Mei Lin".to_string(),
        email: "mei@school.example".to_string(),
        phone: None,
        role: Role::Student {
            balance: 50_000,
            monthly_limit: None,
            parent: None,
        },
    }
}

fn line(line_id: u32, item_id: u32, price: u64, quantity: u32) -> CartLine {
    CartLine {
        id: LineId(line_id),
        item: MenuItem {
            id: MenuItemId(item_id),
            name: format!("Dish {item_id}"),
            description: String::new(),
            price,
            category: "rice".to_string(),
            available: true,
            preparation_minutes: 5,
        },
        quantity,
        notes: None,
    }
}

fn order_params(account: u32) -> OrderCreate {
    OrderCreate {
        account_id: AccountId(account),
        lines: vec![line(1, 1, 15_000, 1), line(2, 2, 5_000, 2)],
        payment_method: PaymentMethod::EWallet,
    }
}

/// Spawns a real order actor wired to the given mocked directory.
fn spawn_order_actor(
    account_mock: &MockClient<Account>,
) -> (OrderClient, tokio::task::JoinHandle<()>) {
    let account_client = AccountClient::new(account_mock.client());
    let (order_actor, order_generic) = canteen::order_actor::new();
    let handle = tokio::spawn(order_actor.run(account_client));
    (OrderClient::new(order_generic), handle)
}

#[tokio::test]
async fn test_order_walks_the_full_lifecycle() {
    let mut account_mock = MockClient::<Account>::new();
    account_mock
        .expect_get(AccountId(1))
        .return_ok(Some(student(1)));

    let (order_client, handle) = spawn_order_actor(&account_mock);

    let order_id = order_client
        .place_order(order_params(1))
        .await
        .expect("Failed to place order");

    let order: Order = order_client
        .get(order_id)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, 25_000);

    order_client.start_preparing(order_id).await.unwrap();
    order_client.mark_ready(order_id).await.unwrap();
    order_client.complete(order_id).await.unwrap();

    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Completed);

    account_mock.verify();
    drop(order_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_completing_twice_is_a_no_op() {
    let mut account_mock = MockClient::<Account>::new();
    account_mock
        .expect_get(AccountId(1))
        .return_ok(Some(student(1)));

    let (order_client, handle) = spawn_order_actor(&account_mock);

    let order_id = order_client.place_order(order_params(1)).await.unwrap();
    order_client.start_preparing(order_id).await.unwrap();
    order_client.mark_ready(order_id).await.unwrap();
    order_client.complete(order_id).await.unwrap();

    // Second completion: no error, no observable change.
    order_client.complete(order_id).await.unwrap();
    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Completed);

    drop(order_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_illegal_transition_is_rejected_and_order_untouched() {
    let mut account_mock = MockClient::<Account>::new();
    account_mock
        .expect_get(AccountId(1))
        .return_ok(Some(student(1)));

    let (order_client, handle) = spawn_order_actor(&account_mock);

    let order_id = order_client.place_order(order_params(1)).await.unwrap();

    // Pending -> Ready skips Preparing.
    let result = order_client.mark_ready(order_id).await;
    assert_eq!(
        result,
        Err(OrderError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Ready,
        })
    );

    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    drop(order_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_cancelled_order_is_terminal() {
    let mut account_mock = MockClient::<Account>::new();
    account_mock
        .expect_get(AccountId(1))
        .return_ok(Some(student(1)));

    let (order_client, handle) = spawn_order_actor(&account_mock);

    let order_id = order_client.place_order(order_params(1)).await.unwrap();
    order_client.cancel(order_id).await.unwrap();

    let result = order_client.start_preparing(order_id).await;
    assert_eq!(
        result,
        Err(OrderError::InvalidTransition {
            from: OrderStatus::Cancelled,
            to: OrderStatus::Preparing,
        })
    );

    drop(order_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_empty_order_is_rejected() {
    let account_mock = MockClient::<Account>::new();
    let (order_client, handle) = spawn_order_actor(&account_mock);

    let result = order_client
        .place_order(OrderCreate {
            account_id: AccountId(1),
            lines: vec![],
            payment_method: PaymentMethod::Cash,
        })
        .await;
    assert_eq!(result, Err(OrderError::EmptyOrder));

    // The directory is never consulted for an order that fails validation.
    account_mock.verify();
    drop(order_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_order_for_unknown_account_is_rejected() {
    let mut account_mock = MockClient::<Account>::new();
    account_mock.expect_get(AccountId(99)).return_ok(None);

    let (order_client, handle) = spawn_order_actor(&account_mock);

    let result = order_client
        .place_order(OrderCreate {
            account_id: AccountId(99),
            lines: vec![line(1, 1, 8_000, 1)],
            payment_method: PaymentMethod::Qr,
        })
        .await;
    assert_eq!(
        result,
        Err(OrderError::UnknownAccount(AccountId(99).to_string()))
    );

    drop(order_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_transition_on_unknown_order_is_a_silent_no_op() {
    let account_mock = MockClient::<Account>::new();
    let (order_client, handle) = spawn_order_actor(&account_mock);

    // Nothing was ever created under this id.
    order_client
        .start_preparing(canteen::model::OrderId(404))
        .await
        .expect("Unknown order must be a no-op, not an error");

    drop(order_client);
    handle.await.unwrap();
}
