//! # Menu Client
//!
//! High-level API for the menu actor. Exposes catalog edits for the manager
//! dashboard and the availability-filtered view the ordering screens use.
//! There is deliberately no delete method: dishes are retired via
//! [`MenuClient::mark_unavailable`].

use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::ActorCommunicationError(e.to_string())
    }
}

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn create_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(|e| MenuError::ActorCommunicationError(e.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(|e| MenuError::ActorCommunicationError(e.to_string()))
    }

    /// Retires a dish from the orderable menu without deleting it.
    #[instrument(skip(self))]
    pub async fn mark_unavailable(&self, id: MenuItemId) -> Result<MenuItem, MenuError> {
        self.update_item(
            id,
            MenuItemUpdate {
                available: Some(false),
                ..Default::default()
            },
        )
        .await
    }

    /// The dishes currently orderable.
    #[instrument(skip(self))]
    pub async fn available_items(&self) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        let items = self
            .inner
            .list()
            .await
            .map_err(|e| MenuError::ActorCommunicationError(e.to_string()))?;
        Ok(items.into_iter().filter(|i| i.available).collect())
    }
}
