// ============================================================================
// VILLES ADMIN - CLIENT DE L'API REST
// ============================================================================
//
// Description:
//   Client typé pour l'API d'administration (régions, villes, joueurs,
//   authorities). Chaque entité expose les mêmes opérations CRUD ainsi que
//   la comparaison par identité et la fusion de collections.
//
// Liste des modules:
//   - config : URL de base de l'API (variables d'environnement / .env)
//   - error : erreurs du client
//   - models : entités, brouillons, patchs et identité
//   - services : client REST, options de requête, résolveur, formulaires
//   - utils : format des dates (fil / formulaire)
//
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::ApplicationConfig;
pub use error::{ClientError, Result};
pub use models::identity::{add_to_collection_if_missing, compare, Identifiable};
pub use services::entity_service::{EntityRepository, EntityService, MutableRepository};
pub use services::request_util::{Direction, QueryOptions, Sort};
