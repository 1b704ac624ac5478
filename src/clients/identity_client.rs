use crate::actors::IdentityError;
use crate::domain::{Role, User};
use crate::messages::IdentityRequest;
use tokio::sync::mpsc;

/// Client for the user directory actor.
#[derive(Clone)]
pub struct IdentityClient {
    sender: mpsc::Sender<IdentityRequest>,
}

impl IdentityClient {
    pub fn new(sender: mpsc::Sender<IdentityRequest>) -> Self {
        Self { sender }
    }
}

client_method!(IdentityClient => fn authenticate(username: String, password: String) -> Option<User> as IdentityRequest::Authenticate, Error = IdentityError);
client_method!(IdentityClient => fn register(username: String, password: String, role: Role) -> String as IdentityRequest::Register, Error = IdentityError);
client_method!(IdentityClient => fn get_user(id: String) -> Option<User> as IdentityRequest::GetUser, Error = IdentityError);
