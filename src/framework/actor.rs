//! # Resource Actor
//!
//! The server half of the framework: owns the entities of one resource type and processes
//! requests one at a time.
//!
//! **Concurrency Model**: each actor runs in its own Tokio task and handles its mailbox
//! sequentially, so the store needs no `Mutex`. Two requests against the same order can never
//! interleave; different resource types run in parallel.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and a client connected to it. Nothing runs until [`run`](Self::run) is
    /// spawned.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is passed to every hook of every entity.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name ("Order" instead of "delivery_actors::domain::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Some(e) = self.find_conflict(&id, &item) {
                                warn!(entity_type, error = %e, "Create conflicts");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            // Ids are only consumed by successful creates.
                            self.next_id += 1;
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    // Hooks work on a copy so a failed update leaves the stored entity as it was.
                    if let Some(mut candidate) = self.store.get(&id).cloned() {
                        if let Err(e) = candidate.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        if let Some(e) = self.find_conflict(&id, &candidate) {
                            warn!(entity_type, %id, error = %e, "Update conflicts");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.insert(id.clone(), candidate.clone());
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(candidate));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(mut candidate) = self.store.get(&id).cloned() {
                        let result = match candidate.handle_action(action, &context).await {
                            Ok(value) => match self.find_conflict(&id, &candidate) {
                                Some(e) => Err(e),
                                None => Ok(value),
                            },
                            Err(e) => Err(e),
                        };
                        match result {
                            Ok(value) => {
                                self.store.insert(id.clone(), candidate);
                                info!(entity_type, %id, "Action ok");
                                let _ = respond_to.send(Ok(value));
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "Action failed");
                                let _ = respond_to
                                    .send(Err(FrameworkError::EntityError(Box::new(e))));
                            }
                        }
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// First conflict between `candidate` and any stored entity other than `id` itself.
    fn find_conflict(&self, id: &T::Id, candidate: &T) -> Option<T::Error> {
        self.store
            .iter()
            .filter(|(other_id, _)| *other_id != id)
            .find_map(|(_, other)| candidate.conflicts_with(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        start: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        /// Adds one, then fails if the result is odd.
        IncrementToEven,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter error: {0}")]
    struct CounterError(String);

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Update = u32;
        type Action = CounterAction;
        type ActionResult = u32;
        type Context = ();
        type Error = CounterError;

        fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Self::Error> {
            if params.start > 100 {
                return Err(CounterError("too big".into()));
            }
            Ok(Self {
                id,
                value: params.start,
            })
        }

        // Two counters never hold the same value.
        fn conflicts_with(&self, existing: &Self) -> Option<Self::Error> {
            (self.value == existing.value).then(|| CounterError(format!("{} is taken", self.value)))
        }

        async fn on_update(&mut self, update: u32, _ctx: &()) -> Result<(), Self::Error> {
            self.value = update;
            if update == 13 {
                return Err(CounterError("unlucky".into()));
            }
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CounterAction,
            _ctx: &(),
        ) -> Result<u32, Self::Error> {
            match action {
                CounterAction::IncrementToEven => {
                    self.value += 1;
                    if self.value % 2 == 1 {
                        return Err(CounterError("odd".into()));
                    }
                    Ok(self.value)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_crud_and_list() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        let handle = tokio::spawn(actor.run(()));

        let first = client.create(CounterCreate { start: 1 }).await.unwrap();
        let second = client.create(CounterCreate { start: 2 }).await.unwrap();
        assert_eq!((first, second), (1, 2));

        let all = client.list().await.unwrap();
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);

        let updated = client.update(first, 10).await.unwrap();
        assert_eq!(updated.value, 10);

        client.delete(second).await.unwrap();
        assert!(client.get(second).await.unwrap().is_none());
        assert!(matches!(
            client.delete(second).await,
            Err(FrameworkError::NotFound(_))
        ));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_create_does_not_consume_an_id() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));

        let err = client.create(CounterCreate { start: 500 }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));

        let id = client.create(CounterCreate { start: 0 }).await.unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_failed_update_and_action_leave_state_untouched() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));
        let id = client.create(CounterCreate { start: 2 }).await.unwrap();

        let err = client.update(id, 13).await.unwrap_err();
        assert_eq!(
            err.into_entity_error::<CounterError>().unwrap().to_string(),
            "counter error: unlucky"
        );
        assert_eq!(client.get(id).await.unwrap().unwrap().value, 2);

        // 2 -> 3 is odd and fails; the stored value must stay 2.
        assert!(client
            .perform_action(id, CounterAction::IncrementToEven)
            .await
            .is_err());
        assert_eq!(client.get(id).await.unwrap().unwrap().value, 2);

        client.update(id, 3).await.unwrap();
        let value = client
            .perform_action(id, CounterAction::IncrementToEven)
            .await
            .unwrap();
        assert_eq!(value, 4);
    }

    #[tokio::test]
    async fn test_conflicts_are_checked_inside_the_actor() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));

        let (a, b) = tokio::join!(
            client.create(CounterCreate { start: 7 }),
            client.create(CounterCreate { start: 7 })
        );
        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert_eq!(client.list().await.unwrap().len(), 1);

        let other = client.create(CounterCreate { start: 8 }).await.unwrap();
        assert_eq!(other, 2);
        let err = client.update(other, 7).await.unwrap_err();
        assert_eq!(
            err.into_entity_error::<CounterError>().unwrap().to_string(),
            "counter error: 7 is taken"
        );
        assert_eq!(client.get(other).await.unwrap().unwrap().value, 8);

        // Rewriting its own value is not a conflict.
        assert_eq!(client.update(other, 8).await.unwrap().value, 8);

        // Counter 1 would step from 7 onto 8.
        let err = client
            .perform_action(1, CounterAction::IncrementToEven)
            .await
            .unwrap_err();
        assert_eq!(
            err.into_entity_error::<CounterError>().unwrap().to_string(),
            "counter error: 8 is taken"
        );
        assert_eq!(client.get(1).await.unwrap().unwrap().value, 7);
    }

    #[tokio::test]
    async fn test_action_on_missing_entity() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));

        let result = client
            .perform_action(42, CounterAction::IncrementToEven)
            .await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
    }
}
