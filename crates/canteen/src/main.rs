//! # School Canteen Ordering System
//!
//! A message-passing backend for a school canteen: menu catalog, per-account
//! carts, a kitchen-facing order pipeline, and parental monitoring.
//!
//! ## 🚀 Core Components
//!
//! - **[model]**: Pure data structures ([`MenuItem`](model::MenuItem), [`Cart`](model::Cart), [`Order`](model::Order), [`Account`](model::Account)).
//! - **[clients]**: Type-safe wrappers (e.g., [`OrderClient`](clients::OrderClient)) that hide the complexity of message passing.
//! - **[session]**: Login gate that hands out the caller's cart.
//! - **[lifecycle]**: Orchestration layer that manages the lifecycle of actors and the checkout/payment flows.
//!
//! ## 📚 Quick Start
//!
//! The application entry point is in [`main`], which demonstrates:
//! 1.  Setting up the [`CanteenSystem`].
//! 2.  Seeding the menu and the account directory.
//! 3.  Logging a student in, filling a cart, checking out, and paying.
//! 4.  Walking the order through the kitchen and the parent's view.
//!
//! ## 🧪 Testing
//!
//! See [`actor_framework::mock`] for utilities to test clients without spawning full actors.

use actor_framework::tracing::setup_tracing;
use actor_framework::ActorClient;
use canteen::lifecycle::CanteenSystem;
use canteen::model::{AccountCreate, MenuItemCreate, PaymentMethod, Role};
use canteen::session::Session;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting application with complete canteen system");

    // Create the entire canteen system (starts all services)
    let system = CanteenSystem::new();

    // Seed the menu
    let noodles = system
        .menu_client
        .create_item(MenuItemCreate {
            name: "Beef Noodles".to_string(),
            description: "Braised beef over hand-pulled noodles".to_string(),
            price: 15_000,
            category: "noodles".to_string(),
            preparation_minutes: 10,
        })
        .await
        .map_err(|e| e.to_string())?;
    let tea = system
        .menu_client
        .create_item(MenuItemCreate {
            name: "Iced Lemon Tea".to_string(),
            description: "Fresh-brewed, lightly sweetened".to_string(),
            price: 5_000,
            category: "drinks".to_string(),
            preparation_minutes: 2,
        })
        .await
        .map_err(|e| e.to_string())?;

    info!(%noodles, %tea, "Menu seeded");

    // Seed the account directory: one student with an e-wallet balance and
    // the parent linked to them.
    let student_id = system
        .account_client
        .create_account(AccountCreate {
            name: "Mei Lin".to_string(),
            email: "mei@school.example".to_string(),
            phone: None,
            role: Role::Student {
                balance: 50_000,
                monthly_limit: None,
                parent: None,
            },
        })
        .await
        .map_err(|e| e.to_string())?;
    let parent_id = system
        .account_client
        .create_account(AccountCreate {
            name: "Lin Hua".to_string(),
            email: "lin.hua@example.com".to_string(),
            phone: Some("555-0142".to_string()),
            role: Role::Parent {
                children: vec![student_id],
            },
        })
        .await
        .map_err(|e| e.to_string())?;

    info!(student = %student_id, parent = %parent_id, "Accounts created");

    // The student logs in; the session hands them their cart.
    let mut session = Session::new(system.account_client.clone(), system.cart_client.clone());
    session
        .login("mei@school.example", Session::DEV_PASSWORD)
        .await
        .map_err(|e| e.to_string())?;
    let cart_id = session
        .current_cart()
        .ok_or_else(|| "No cart after login".to_string())?;

    // Fill the cart and check out.
    let span = tracing::info_span!("checkout_flow");
    let order_id = async {
        let noodles = system
            .menu_client
            .get(noodles)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "Menu item vanished".to_string())?;
        let tea = system
            .menu_client
            .get(tea)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "Menu item vanished".to_string())?;

        system
            .cart_client
            .add_item(cart_id, noodles, 1, Some("no cilantro".to_string()))
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .add_item(cart_id, tea, 2, None)
            .await
            .map_err(|e| e.to_string())?;

        let (amount, items) = system
            .cart_client
            .totals(cart_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(amount, items, "Cart ready");

        system
            .checkout(cart_id, PaymentMethod::EWallet)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order = %order_id, "Order placed");

    match system.pay(order_id).await {
        Ok(()) => info!(order = %order_id, "Payment captured"),
        Err(e) => error!(error = %e, "Payment failed"),
    }

    // Kitchen works the order through its lifecycle.
    let span = tracing::info_span!("kitchen_flow");
    async {
        system
            .order_client
            .start_preparing(order_id)
            .await
            .map_err(|e| e.to_string())?;
        system
            .order_client
            .mark_ready(order_id)
            .await
            .map_err(|e| e.to_string())?;
        system
            .order_client
            .complete(order_id)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order = %order_id, "Order completed");

    // The parent checks what their child has been ordering.
    let history = system
        .child_orders(parent_id)
        .await
        .map_err(|e| e.to_string())?;
    for order in &history {
        info!(order = %order.id, status = %order.status, total = order.total, "Child order");
    }

    // Shutdown system gracefully. The session holds client clones, so it
    // must go first for the actor channels to close.
    drop(session);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
