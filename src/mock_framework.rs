//! # Mock Framework
//!
//! Utilities for testing clients and orchestrating services in
//! isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then use
//! helpers like [`expect_get`] or [`expect_action`] to assert behavior
//! and script the actor's responses deterministically, without spinning
//! up a real `ResourceActor`.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, oneshot::Sender<Result<T::Id, T::Error>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, T::Error>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, T::Error>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, T::Error>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Store, StoreCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Store>(10);

        let create_task = tokio::spawn(async move {
            client.create(StoreCreate { name: "Warung Tegal".to_string() }).await
        });

        let (params, responder) =
            expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Warung Tegal");
        responder.send(Ok("store_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("store_1".to_string()));
    }
}
