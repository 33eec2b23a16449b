//! Type-safe client wrappers around the generic resource clients.
//!
//! Each wrapper adds the domain vocabulary (and the collection-level queries
//! the dashboards need) on top of `ResourceClient<T>`, and maps framework
//! errors back into the owning actor's error type.

pub mod account_client;
pub mod cart_client;
pub mod menu_client;
pub mod order_client;

pub use account_client::AccountClient;
pub use cart_client::CartClient;
pub use menu_client::MenuClient;
pub use order_client::OrderClient;
