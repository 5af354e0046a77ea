use serde::Serialize;
use serde::de::DeserializeOwned;

use super::identity::Identifiable;

/// Lie une entité persistée à sa collection REST.
pub trait Resource: Identifiable + Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Chemin relatif de la collection, ex. "api/villes"
    const RESOURCE_PATH: &'static str;

    /// Nom utilisé dans les logs
    const ENTITY_NAME: &'static str;

    /// Corps envoyé en POST
    type Draft: Serialize + Send + Sync;

    /// Lit une identité depuis un segment d'URL ("/ville/12/edit")
    fn parse_id(raw: &str) -> Option<Self::Id>;
}

/// Entités modifiables en PUT / PATCH
pub trait Patchable: Resource {
    type Patch: Identifiable<Id = Self::Id> + Serialize + Send + Sync;
}

pub(crate) fn parse_numeric_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
