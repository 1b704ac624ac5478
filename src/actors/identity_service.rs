use crate::actor_framework::FrameworkError;
use crate::domain::{Role, User};
use crate::messages::IdentityRequest;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IdentityError {
    #[error("user not found: {0}")]
    NotFound(String),
    #[error("username already taken: {0}")]
    AlreadyExists(String),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for IdentityError {
    fn from(e: FrameworkError) -> Self {
        IdentityError::ActorCommunicationError(e.to_string())
    }
}

/// Bootstrap credentials seeded when the user set is empty at startup.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

/// The user directory actor.
///
/// Authentication is a plain equality check on username and password;
/// nothing is hashed. Usernames are unique.
pub struct IdentityService {
    receiver: mpsc::Receiver<IdentityRequest>,
    users: HashMap<String, User>,
    next_id_fn: Box<dyn Fn() -> String + Send + Sync>,
}

impl IdentityService {
    pub fn new(
        buffer_size: usize,
        bootstrap: BootstrapAdmin,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> (Self, mpsc::Sender<IdentityRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let mut service = Self {
            receiver,
            users: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        if service.users.is_empty() {
            let id = (service.next_id_fn)();
            info!(username = %bootstrap.username, "Seeding bootstrap admin");
            service.users.insert(
                id.clone(),
                User {
                    id,
                    username: bootstrap.username,
                    password: bootstrap.password,
                    role: Role::Admin,
                },
            );
        }
        (service, sender)
    }

    #[instrument(name = "identity_service", skip(self))]
    pub async fn run(mut self) {
        info!("IdentityService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                IdentityRequest::Authenticate { username, password, respond_to } => {
                    let user = self.authenticate(&username, &password);
                    let _ = respond_to.send(Ok(user));
                }
                IdentityRequest::Register { username, password, role, respond_to } => {
                    let _ = respond_to.send(self.register(username, password, role));
                }
                IdentityRequest::GetUser { id, respond_to } => {
                    let user = self.users.get(&id).cloned();
                    let _ = respond_to.send(Ok(user));
                }
            }
        }
        info!("IdentityService stopped");
    }

    #[instrument(fields(username = %username), skip(self, password))]
    fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        debug!("Processing authenticate request");
        let user = self
            .users
            .values()
            .find(|u| u.username == username && u.password == password)
            .cloned();
        if user.is_none() {
            warn!("Authentication failed");
        }
        user
    }

    #[instrument(fields(username = %username, role = %role), skip(self, password))]
    fn register(
        &mut self,
        username: String,
        password: String,
        role: Role,
    ) -> Result<String, IdentityError> {
        if self.users.values().any(|u| u.username == username) {
            warn!("Username already taken");
            return Err(IdentityError::AlreadyExists(username));
        }
        let id = (self.next_id_fn)();
        self.users.insert(id.clone(), User { id: id.clone(), username, password, role });
        info!(user_id = %id, "User registered");
        Ok(id)
    }
}
