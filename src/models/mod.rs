// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles exposés par l'API REST.
//   Chaque entité existe sous trois formes :
//     - l'entité persistée (identité obligatoire)
//     - le brouillon "New..." (pas encore d'identité, envoyé en POST)
//     - le patch "PartialUpdate..." (identité + champs à modifier, PATCH)
//
// Liste des modules:
//   - identity : identité, comparaison, fusion de collections
//   - resource : liaison entité <-> collection REST
//   - region : Régions
//   - ville : Villes (embarque sa région)
//   - joueur : Joueurs (embarque sa ville, date d'inscription)
//   - authority : Rôles (identité = name, pas de mise à jour)
//   - test_samples : jeux de données figés pour les tests
//
// Points d'attention:
//   - Les champs JSON sont en camelCase (codePostal, dateInscription...)
//   - Les relations sont des copies au moment du chargement, pas un graphe vivant
//
// ============================================================================

pub mod identity;
pub mod resource;
pub mod region;
pub mod ville;
pub mod joueur;
pub mod authority;

#[cfg(any(test, feature = "test-samples"))]
#[doc(hidden)]
pub mod test_samples;

use serde::{Serialize, Serializer};

pub use authority::Authority;
pub use identity::Identifiable;
pub use joueur::{Joueur, NewJoueur, PartialUpdateJoueur};
pub use region::{NewRegion, PartialUpdateRegion, Region};
pub use resource::{Patchable, Resource};
pub use ville::{NewVille, PartialUpdateVille, Ville};

/// Identité d'un brouillon : toujours `null` sur le fil
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullId;

impl Serialize for NullId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_none()
    }
}

/// Formulaire / écran d'édition : soit un brouillon, soit une entité existante
#[derive(Debug, Clone, PartialEq)]
pub enum Edited<N, E> {
    New(N),
    Existing(E),
}

impl<N, E> Edited<N, E> {
    pub fn is_new(&self) -> bool {
        matches!(self, Edited::New(_))
    }
}
