use crate::actors::AssetError;
use crate::messages::AssetRequest;
use tokio::sync::mpsc;

/// Client for the uploaded-image store.
#[derive(Clone)]
pub struct AssetClient {
    sender: mpsc::Sender<AssetRequest>,
}

impl AssetClient {
    pub fn new(sender: mpsc::Sender<AssetRequest>) -> Self {
        Self { sender }
    }
}

client_method!(AssetClient => fn store_asset(filename: String, bytes: Vec<u8>) -> String as AssetRequest::Store, Error = AssetError);
client_method!(AssetClient => fn fetch_asset(reference: String) -> Option<Vec<u8>> as AssetRequest::Fetch, Error = AssetError);
