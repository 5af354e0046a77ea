//! Client REST générique, un par type d'entité.
//!
//! Le service ne garde que le client HTTP et l'URL de la collection : pas de
//! cache, pas de retry, chaque appel est indépendant des autres.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApplicationConfig;
use crate::error::{ClientError, Result};
use crate::models::identity::{self, Identifiable};
use crate::models::{Authority, Joueur, Patchable, Region, Resource, Ville};
use crate::services::request_util::QueryOptions;

pub const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// Lecture / création / suppression
#[async_trait]
pub trait EntityRepository<E: Resource>: Send + Sync {
    /// POST sur la collection, renvoie l'entité avec son identité attribuée par le serveur
    async fn create(&self, draft: &E::Draft) -> Result<E>;

    /// `Ok(None)` quand le serveur répond avec un corps vide
    async fn find(&self, id: &E::Id) -> Result<Option<E>>;

    /// Ordre du serveur conservé
    async fn query(&self, options: &QueryOptions) -> Result<Vec<E>>;

    async fn delete(&self, id: &E::Id) -> Result<bool>;
}

/// Mise à jour complète (PUT) et partielle (PATCH)
#[async_trait]
pub trait MutableRepository<E: Patchable>: EntityRepository<E> {
    async fn update(&self, entity: &E) -> Result<E>;

    async fn partial_update(&self, patch: &E::Patch) -> Result<E>;
}

pub struct EntityService<E> {
    http: Client,
    resource_url: Url,
    _entity: PhantomData<fn() -> E>,
}

pub type RegionService = EntityService<Region>;
pub type VilleService = EntityService<Ville>;
pub type JoueurService = EntityService<Joueur>;
pub type AuthorityService = EntityService<Authority>;

impl<E> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            resource_url: self.resource_url.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Resource> EntityService<E> {
    pub fn new(config: &ApplicationConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Self::with_client(http, config)
    }

    /// Partage un client HTTP existant entre plusieurs services
    pub fn with_client(http: Client, config: &ApplicationConfig) -> Result<Self> {
        let resource_url = config.endpoint_for(E::RESOURCE_PATH)?;
        Ok(Self {
            http,
            resource_url,
            _entity: PhantomData,
        })
    }

    pub fn resource_url(&self) -> &Url {
        &self.resource_url
    }

    /// `{collection}/{id}`, l'identité est encodée comme un segment de chemin
    pub fn item_url(&self, id: &E::Id) -> Url {
        let mut url = self.resource_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }
        url
    }

    pub fn get_identifier<'a>(&self, entity: &'a E) -> &'a E::Id {
        entity.identifier()
    }

    pub fn compare<A, B>(&self, o1: Option<&A>, o2: Option<&B>) -> bool
    where
        A: Identifiable<Id = E::Id>,
        B: Identifiable<Id = E::Id>,
    {
        identity::compare(o1, o2)
    }

    pub fn add_to_collection_if_missing<T, I>(&self, collection: Vec<T>, candidates: I) -> Vec<T>
    where
        T: Identifiable<Id = E::Id>,
        I: IntoIterator<Item = Option<T>>,
    {
        identity::add_to_collection_if_missing(collection, candidates)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Corps obligatoire (POST / PUT / PATCH)
    async fn expect_entity(&self, method: &str, url: &Url, builder: RequestBuilder) -> Result<E> {
        let response = error_for_status(builder.send().await?).await?;
        read_json::<E>(response)
            .await?
            .ok_or_else(|| ClientError::EmptyBody {
                method: method.to_string(),
                url: url.to_string(),
            })
    }
}

#[async_trait]
impl<E: Resource> EntityRepository<E> for EntityService<E> {
    async fn create(&self, draft: &E::Draft) -> Result<E> {
        tracing::debug!(entity = E::ENTITY_NAME, "REST request to save {}", E::ENTITY_NAME);

        let url = self.resource_url.clone();
        let builder = self.request(Method::POST, url.clone()).json(draft);
        let created = self.expect_entity("POST", &url, builder).await?;

        tracing::debug!(entity = E::ENTITY_NAME, id = %created.identifier(), "created");
        Ok(created)
    }

    async fn find(&self, id: &E::Id) -> Result<Option<E>> {
        tracing::debug!(entity = E::ENTITY_NAME, %id, "REST request to get {}", E::ENTITY_NAME);

        let response = self.request(Method::GET, self.item_url(id)).send().await?;
        let response = error_for_status(response).await?;
        read_json::<E>(response).await
    }

    async fn query(&self, options: &QueryOptions) -> Result<Vec<E>> {
        tracing::debug!(
            entity = E::ENTITY_NAME,
            params = ?options.to_params(),
            "REST request to get all {}",
            E::ENTITY_NAME
        );

        let response = self
            .request(Method::GET, self.resource_url.clone())
            .query(&options.to_params())
            .send()
            .await?;
        let response = error_for_status(response).await?;

        Ok(read_json::<Vec<E>>(response).await?.unwrap_or_default())
    }

    async fn delete(&self, id: &E::Id) -> Result<bool> {
        tracing::debug!(entity = E::ENTITY_NAME, %id, "REST request to delete {}", E::ENTITY_NAME);

        let response = self.request(Method::DELETE, self.item_url(id)).send().await?;
        let response = error_for_status(response).await?;

        Ok(response.status().is_success())
    }
}

#[async_trait]
impl<E: Patchable> MutableRepository<E> for EntityService<E> {
    async fn update(&self, entity: &E) -> Result<E> {
        let id = entity.identifier();
        tracing::debug!(entity = E::ENTITY_NAME, %id, "REST request to update {}", E::ENTITY_NAME);

        let url = self.item_url(id);
        let builder = self.request(Method::PUT, url.clone()).json(entity);
        self.expect_entity("PUT", &url, builder).await
    }

    async fn partial_update(&self, patch: &E::Patch) -> Result<E> {
        let id = patch.identifier();
        tracing::debug!(
            entity = E::ENTITY_NAME,
            %id,
            "REST request to partial update {}",
            E::ENTITY_NAME
        );

        let url = self.item_url(id);
        let body = serde_json::to_vec(patch)?;
        let builder = self
            .request(Method::PATCH, url.clone())
            .header(CONTENT_TYPE, MERGE_PATCH_JSON)
            .body(body);
        self.expect_entity("PATCH", &url, builder).await
    }
}

/// 4xx / 5xx -> `ClientError::Status` avec le corps renvoyé par le serveur
async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, "REST request failed");
        return Err(ClientError::Status { status, body });
    }
    Ok(response)
}

/// Corps vide ou `null` -> `None`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice::<Option<T>>(&bytes)?)
}
