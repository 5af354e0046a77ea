//! Logique des écrans d'édition, sans rendu : indicateur de sauvegarde,
//! choix création / mise à jour, options des listes de sélection.

use futures::future::join_all;

use crate::error::Result;
use crate::models::identity::add_to_collection_if_missing;
use crate::models::{Edited, Patchable, Resource};
use crate::services::entity_service::{EntityRepository, MutableRepository};
use crate::services::request_util::QueryOptions;

/// `E` : entité éditée, `O` : entité proposée dans la liste de sélection
/// (la ville d'un joueur, la région d'une ville). `()` quand il n'y en a pas.
#[derive(Debug)]
pub struct EntityEditor<E, O = ()> {
    entity: Option<E>,
    is_saving: bool,
    shared_collection: Vec<O>,
}

impl<E, O> EntityEditor<E, O> {
    pub fn new(entity: Option<E>) -> Self {
        Self {
            entity,
            is_saving: false,
            shared_collection: Vec::new(),
        }
    }

    pub fn entity(&self) -> Option<&E> {
        self.entity.as_ref()
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn options(&self) -> &[O] {
        &self.shared_collection
    }
}

impl<E, O: Resource> EntityEditor<E, O> {
    /// Garantit que la valeur actuelle figure dans les options
    pub fn include_option(&mut self, current: Option<O>) {
        let options = std::mem::take(&mut self.shared_collection);
        self.shared_collection = add_to_collection_if_missing(options, [current]);
    }

    /// Charge les options puis y ajoute la valeur actuelle si le serveur ne l'a pas renvoyée
    pub async fn load_relationship_options<R>(&mut self, repository: &R, current: Option<O>) -> Result<&[O]>
    where
        R: EntityRepository<O> + ?Sized,
    {
        let fetched = repository.query(&QueryOptions::default()).await?;
        self.shared_collection = add_to_collection_if_missing(fetched, [current]);
        Ok(self.shared_collection.as_slice())
    }
}

impl<E: Resource, O> EntityEditor<E, O> {
    /// Création seule (entités jamais mises à jour, comme les authorities)
    pub async fn save_new<R>(&mut self, repository: &R, draft: &E::Draft) -> Result<E>
    where
        R: EntityRepository<E> + ?Sized,
    {
        self.is_saving = true;
        let result = repository.create(draft).await;
        self.finish(result)
    }

    fn finish(&mut self, result: Result<E>) -> Result<E> {
        self.is_saving = false;
        let saved = result?;
        self.entity = Some(saved.clone());
        Ok(saved)
    }
}

impl<E: Patchable, O> EntityEditor<E, O> {
    /// PUT si l'entité existe déjà, POST sinon. La réponse du serveur fait foi.
    pub async fn save<R>(&mut self, repository: &R, edited: Edited<E::Draft, E>) -> Result<E>
    where
        R: MutableRepository<E> + ?Sized,
    {
        self.is_saving = true;
        let result = match &edited {
            Edited::Existing(entity) => repository.update(entity).await,
            Edited::New(draft) => repository.create(draft).await,
        };
        self.finish(result)
    }
}

/// Suppression confirmée depuis la boîte de dialogue
pub async fn confirm_delete<E, R>(repository: &R, id: &E::Id) -> Result<bool>
where
    E: Resource,
    R: EntityRepository<E> + ?Sized,
{
    let deleted = repository.delete(id).await?;
    tracing::debug!(entity = E::ENTITY_NAME, %id, deleted, "delete confirmed");
    Ok(deleted)
}

/// Suppressions indépendantes lancées en parallèle : un échec n'annule pas
/// les autres. Un résultat par identifiant, dans l'ordre de `ids`.
pub async fn delete_all<E, R>(repository: &R, ids: &[E::Id]) -> Vec<Result<bool>>
where
    E: Resource,
    R: EntityRepository<E> + ?Sized,
{
    let results = join_all(ids.iter().map(|id| repository.delete(id))).await;

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::debug!(entity = E::ENTITY_NAME, failed, total = ids.len(), "some deletes failed");
    }
    results
}
