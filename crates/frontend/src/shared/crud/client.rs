use contracts::domain::common::AggregateId;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;

use crate::shared::api_utils::{self, with_query, ApiError};

/// Read side of the remote data client
#[allow(async_fn_in_trait)]
pub trait EntityReader {
    type Id;
    type Entity;
    type Filter;

    async fn list(&self, filter: &Self::Filter) -> Result<Vec<Self::Entity>, ApiError>;

    async fn get(&self, id: &Self::Id) -> Result<Self::Entity, ApiError>;
}

/// Mutating side of the remote data client. `deactivate` is a soft delete.
#[allow(async_fn_in_trait)]
pub trait EntityWriter: EntityReader {
    type Payload;

    async fn create(&self, payload: &Self::Payload) -> Result<Self::Entity, ApiError>;

    async fn update(&self, id: &Self::Id, payload: &Self::Payload)
        -> Result<Self::Entity, ApiError>;

    async fn deactivate(&self, id: &Self::Id) -> Result<(), ApiError>;
}

/// REST collection exposed under `PATH`
pub trait RestResource {
    const PATH: &'static str;
    type Id: AggregateId;
    type Entity: DeserializeOwned;
    type Filter: Serialize;
}

pub trait WritableResource: RestResource {
    type Payload: Serialize;
}

/// `EntityReader`/`EntityWriter` over JSON endpoints:
/// `GET PATH?filter`, `GET PATH/{id}`, `POST PATH`, `PUT PATH/{id}`,
/// `DELETE PATH/{id}` (the backend deactivates instead of removing).
pub struct RestClient<R>(PhantomData<R>);

impl<R> RestClient<R> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for RestClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for RestClient<R> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<R> Copy for RestClient<R> {}

fn item_path<R: RestResource>(id: &R::Id) -> String {
    format!("{}/{}", R::PATH, id.as_string())
}

impl<R: RestResource> EntityReader for RestClient<R> {
    type Id = R::Id;
    type Entity = R::Entity;
    type Filter = R::Filter;

    async fn list(&self, filter: &R::Filter) -> Result<Vec<R::Entity>, ApiError> {
        api_utils::get_json(&with_query(R::PATH, filter)?).await
    }

    async fn get(&self, id: &R::Id) -> Result<R::Entity, ApiError> {
        api_utils::get_json(&item_path::<R>(id)).await
    }
}

impl<R: WritableResource> EntityWriter for RestClient<R> {
    type Payload = R::Payload;

    async fn create(&self, payload: &R::Payload) -> Result<R::Entity, ApiError> {
        api_utils::post_json(R::PATH, payload).await
    }

    async fn update(&self, id: &R::Id, payload: &R::Payload) -> Result<R::Entity, ApiError> {
        api_utils::put_json(&item_path::<R>(id), payload).await
    }

    async fn deactivate(&self, id: &R::Id) -> Result<(), ApiError> {
        api_utils::delete(&item_path::<R>(id)).await
    }
}
