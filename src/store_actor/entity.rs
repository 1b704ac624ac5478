use super::error::StoreError;
use crate::actor_framework::Entity;
use crate::domain::{Store, StoreCreate, StorePatch};

impl Entity for Store {
    type Id = String;
    type CreateParams = StoreCreate;
    type Patch = StorePatch;
    type Action = ();
    type ActionResult = ();
    type Error = StoreError;

    fn id(&self) -> &String {
        &self.id
    }

    fn not_found(id: &String) -> StoreError {
        StoreError::NotFound(id.clone())
    }

    fn from_create_params(id: String, params: StoreCreate) -> Result<Self, StoreError> {
        if params.name.trim().is_empty() {
            return Err(StoreError::ValidationError("store name must not be empty".into()));
        }
        Ok(Self { id, name: params.name })
    }

    fn on_update(&mut self, patch: StorePatch) -> Result<(), StoreError> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(StoreError::ValidationError("store name must not be empty".into()));
            }
            self.name = name;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), StoreError> {
        Ok(())
    }
}
