//! # Canteen Ordering System
//!
//! An actor-based ordering and management system for a school canteen: a menu
//! catalog, per-account carts, an order lifecycle with kitchen status
//! tracking, accounts with role-gated capabilities, and parental monitoring
//! of student spending.
//!
//! Each resource type runs as its own [`actor_framework::ResourceActor`];
//! the [`lifecycle::CanteenSystem`] orchestrator spawns and wires them, and
//! [`session::Session`] holds the single authenticated identity.

pub mod account_actor;
pub mod cart_actor;
pub mod clients;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod session;
