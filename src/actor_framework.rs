use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks, DTOs, and actions)
// =============================================================================

/// Errors produced by the actor plumbing itself, as opposed to the domain.
///
/// Domain error enums absorb these through their `From<FrameworkError>`
/// impl (conventionally into an `ActorCommunicationError` variant), so
/// client methods can surface a single typed error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("actor channel closed")]
    ChannelClosed,
    #[error("actor dropped the response channel")]
    ResponseDropped,
}

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Domain error type carried on every response for this entity.
    type Error: Clone + Send + Sync + Debug + Display + From<FrameworkError> + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Typed "no such entity" error for this domain.
    fn not_found(id: &Self::Id) -> Self::Error;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler ---

    /// Handle a custom domain-specific action.
    ///
    /// Runs inside the actor, so a single action observes and mutates the
    /// entity with no interleaving from other requests.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    // Creation order, so List is deterministic (HashMap iteration is not).
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let id = (self.next_id_fn)();
                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create() {
                                let _ = respond_to.send(Err(e));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            self.order.push(id.clone());
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(patch) {
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        let _ = respond_to.send(Err(T::not_found(&id)));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete() {
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                        self.store.remove(&id);
                        self.order.retain(|existing| existing != &id);
                        let _ = respond_to.send(Ok(()));
                    } else {
                        let _ = respond_to.send(Err(T::not_found(&id)));
                    }
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item.handle_action(action);
                        let _ = respond_to.send(result);
                    } else {
                        let _ = respond_to.send(Err(T::not_found(&id)));
                    }
                }
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ChannelClosed)?;
        response.await.map_err(|_| FrameworkError::ResponseDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ChannelClosed)?;
        response.await.map_err(|_| FrameworkError::ResponseDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ChannelClosed)?;
        response.await.map_err(|_| FrameworkError::ResponseDropped)?
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update { id, patch, respond_to })
            .await
            .map_err(|_| FrameworkError::ChannelClosed)?;
        response.await.map_err(|_| FrameworkError::ResponseDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ChannelClosed)?;
        response.await.map_err(|_| FrameworkError::ResponseDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { id, action, respond_to })
            .await
            .map_err(|_| FrameworkError::ChannelClosed)?;
        response.await.map_err(|_| FrameworkError::ResponseDropped)?
    }
}

// =============================================================================
// 5. TESTS
// =============================================================================
