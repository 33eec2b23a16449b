use actor_framework::{ActorEntity, ResourceActor};
use async_trait::async_trait;

// --- Test entity ---

#[derive(Clone, Debug, PartialEq)]
struct Device {
    id: u32,
    label: String,
    enabled: bool,
}

#[derive(Debug)]
struct DeviceCreate {
    label: String,
}

#[derive(Debug)]
struct DeviceUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum DeviceAction {
    Enable,
    #[allow(dead_code)]
    Relabel(String),
}

#[derive(Debug, thiserror::Error)]
#[error("Device error")]
struct DeviceError;

#[async_trait]
impl ActorEntity for Device {
    type Id = u32;
    type Create = DeviceCreate;
    type Update = DeviceUpdate;
    type Action = DeviceAction;
    type ActionResult = bool;
    type Context = ();
    type Error = DeviceError;

    fn from_create_params(id: u32, params: DeviceCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            enabled: false,
        })
    }

    async fn on_update(
        &mut self,
        update: DeviceUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DeviceAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            DeviceAction::Enable => {
                if self.enabled {
                    Ok(false)
                } else {
                    self.enabled = true;
                    Ok(true)
                }
            }
            DeviceAction::Relabel(label) => {
                self.label = label;
                Ok(true)
            }
        }
    }
}

#[tokio::test]
async fn full_lifecycle_through_a_real_actor() {
    let (actor, client) = ResourceActor::<Device>::new(10);
    tokio::spawn(actor.run(()));

    // Create: ids are minted sequentially starting at 1.
    let id: u32 = client
        .create(DeviceCreate {
            label: "till-1".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // Action mutates state exactly once.
    let changed: bool = client.perform_action(id, DeviceAction::Enable).await.unwrap();
    assert!(changed);
    let device = client.get(id).await.unwrap().unwrap();
    assert!(device.enabled);

    let changed_again: bool = client.perform_action(id, DeviceAction::Enable).await.unwrap();
    assert!(!changed_again);

    // Update through the on_update hook.
    let updated = client
        .update(
            id,
            DeviceUpdate {
                label: Some("till-2".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "till-2");

    // List sees every entity in the store.
    let second = client
        .create(DeviceCreate {
            label: "till-3".into(),
        })
        .await
        .unwrap();
    assert_eq!(second, 2);
    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 2);

    // Delete removes the entity; subsequent gets see nothing.
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert_eq!(client.list().await.unwrap().len(), 1);
}
