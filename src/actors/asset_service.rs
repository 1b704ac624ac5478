use crate::actor_framework::FrameworkError;
use crate::messages::AssetRequest;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AssetError {
    fn from(e: FrameworkError) -> Self {
        AssetError::ActorCommunicationError(e.to_string())
    }
}

/// In-memory store for uploaded menu images.
///
/// Hands back an opaque reference string; the menu record stores only
/// that reference.
pub struct AssetService {
    receiver: mpsc::Receiver<AssetRequest>,
    assets: HashMap<String, Vec<u8>>,
    next_seq: u64,
}

impl AssetService {
    pub fn new(buffer_size: usize) -> (Self, mpsc::Sender<AssetRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, assets: HashMap::new(), next_seq: 1 };
        (service, sender)
    }

    #[instrument(name = "asset_service", skip(self))]
    pub async fn run(mut self) {
        info!("AssetService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                AssetRequest::Store { filename, bytes, respond_to } => {
                    let reference = format!("images/{}_{}", self.next_seq, filename);
                    self.next_seq += 1;
                    debug!(reference = %reference, size = bytes.len(), "Stored asset");
                    self.assets.insert(reference.clone(), bytes);
                    let _ = respond_to.send(Ok(reference));
                }
                AssetRequest::Fetch { reference, respond_to } => {
                    let bytes = self.assets.get(&reference).cloned();
                    let _ = respond_to.send(Ok(bytes));
                }
            }
        }
        info!("AssetService stopped");
    }
}
