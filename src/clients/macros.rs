/// Generate the `new` constructor for a client wrapping a
/// `ResourceClient`.
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

/// Generate the standard CRUD methods for a client wrapping a
/// `ResourceClient`. Method names are derived from the entity's snake
/// case name (get_menu, list_menus, ...).
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            #[allow(dead_code)]
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<create_ $entity_name_snake>](
                    &self,
                    params: <$entity as crate::actor_framework::Entity>::CreateParams,
                ) -> Result<String, $error> {
                    tracing::debug!("Sending request");
                    self.inner.create(params).await
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: String) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<list_ $entity_name_snake s>](&self) -> Result<Vec<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.list().await
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<update_ $entity_name_snake>](
                    &self,
                    id: String,
                    patch: <$entity as crate::actor_framework::Entity>::Patch,
                ) -> Result<$entity, $error> {
                    tracing::debug!("Sending request");
                    self.inner.update(id, patch).await
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $entity_name_snake>](&self, id: String) -> Result<(), $error> {
                    tracing::debug!("Sending request");
                    self.inner.delete(id).await
                }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity, $error, $entity_name_snake);
    };
}

/// Generate a client method for a hand-written service actor: oneshot
/// channel boilerplate, automatic tracing, and channel failures folded
/// into the domain error.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        #[allow(dead_code)]
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant { $($param,)* respond_to })
                    .await
                    .map_err(|_| <$error_type>::ActorCommunicationError("actor channel closed".to_string()))?;

                response
                    .await
                    .map_err(|_| <$error_type>::ActorCommunicationError("actor dropped the response channel".to_string()))?
            }
        }
    };
}
