use crate::actor_framework::ResourceClient;
use crate::domain::Store;
use crate::store_actor::StoreError;

/// Client for interacting with the Store actor.
#[derive(Clone)]
pub struct StoreClient {
    inner: ResourceClient<Store>,
}

impl_basic_client!(StoreClient, Store, StoreError, store);
