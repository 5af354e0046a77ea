//! Résolution d'une entité avant l'ouverture d'un écran de détail / édition.

use reqwest::StatusCode;

use crate::error::{ClientError, Result};
use crate::models::Resource;
use crate::services::entity_service::EntityRepository;

/// Route de repli quand l'entité demandée n'existe pas
pub const NOT_FOUND_ROUTE: &str = "404";

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<E> {
    /// Pas d'identifiant dans la route : écran de création
    Blank,
    Found(E),
    /// L'appelant doit naviguer vers `NOT_FOUND_ROUTE`
    NotFound,
}

impl<E> Resolution<E> {
    pub fn into_option(self) -> Option<E> {
        match self {
            Resolution::Found(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Resolution::NotFound => Some(NOT_FOUND_ROUTE),
            _ => None,
        }
    }
}

pub async fn resolve<E, R>(repository: &R, raw_id: Option<&str>) -> Result<Resolution<E>>
where
    E: Resource,
    R: EntityRepository<E> + ?Sized,
{
    let raw_id = match raw_id.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(Resolution::Blank),
    };

    let Some(id) = E::parse_id(raw_id) else {
        tracing::debug!(entity = E::ENTITY_NAME, raw_id, "unparsable id, redirecting to not found");
        return Ok(Resolution::NotFound);
    };

    match repository.find(&id).await {
        Ok(Some(entity)) => Ok(Resolution::Found(entity)),
        Ok(None) => {
            tracing::debug!(entity = E::ENTITY_NAME, %id, "empty body, redirecting to not found");
            Ok(Resolution::NotFound)
        }
        Err(ClientError::Status { status: StatusCode::NOT_FOUND, .. }) => {
            tracing::debug!(entity = E::ENTITY_NAME, %id, "404 from server, redirecting to not found");
            Ok(Resolution::NotFound)
        }
        Err(e) => Err(e),
    }
}
