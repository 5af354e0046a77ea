use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Erreurs remontées par le client REST.
///
/// Aucune n'est rattrapée localement : c'est l'appelant qui décide quoi
/// faire (réinitialiser un indicateur de sauvegarde, afficher un message...).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Échec réseau, timeout, requête impossible à construire
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Réponse 4xx / 5xx
    #[error("server answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Corps vide là où l'API doit renvoyer l'entité
    #[error("empty response body for {method} {url}")]
    EmptyBody { method: String, url: String },
}

impl ClientError {
    /// Statut HTTP associé, s'il y en a un
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }
}
