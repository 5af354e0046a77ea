//! Identité des entités.
//!
//! Deux entités sont la même entité logique si et seulement si leurs
//! identifiants sont égaux ; les autres champs ne comptent pas.

use std::fmt;

/// Tout ce qui expose un champ d'identité
pub trait Identifiable {
    type Id: PartialEq + Clone + fmt::Display + fmt::Debug + Send + Sync;

    fn identifier(&self) -> &Self::Id;
}

/// Vrai si les deux sont absents, ou si les deux sont présents avec la même identité.
/// Faux si un seul des deux est absent.
pub fn compare<A, B>(o1: Option<&A>, o2: Option<&B>) -> bool
where
    A: Identifiable,
    B: Identifiable<Id = A::Id>,
{
    match (o1, o2) {
        (Some(a), Some(b)) => a.identifier() == b.identifier(),
        (None, None) => true,
        _ => false,
    }
}

/// Ajoute en tête de `collection` les candidats dont l'identité n'y figure pas encore.
///
/// Les candidats `None` sont ignorés, un doublon entre candidats n'est ajouté
/// qu'une fois (le premier gagne) et l'ordre de `collection` est conservé.
/// Si aucun candidat n'est retenu, `collection` est rendue telle quelle.
pub fn add_to_collection_if_missing<T, I>(collection: Vec<T>, candidates: I) -> Vec<T>
where
    T: Identifiable,
    I: IntoIterator<Item = Option<T>>,
{
    let candidates: Vec<T> = candidates.into_iter().flatten().collect();
    if candidates.is_empty() {
        return collection;
    }

    let mut identifiers: Vec<T::Id> = collection
        .iter()
        .map(|item| item.identifier().clone())
        .collect();

    let mut to_add = Vec::with_capacity(candidates.len() + collection.len());
    for candidate in candidates {
        if identifiers.contains(candidate.identifier()) {
            continue;
        }
        identifiers.push(candidate.identifier().clone());
        to_add.push(candidate);
    }

    if to_add.is_empty() {
        return collection;
    }

    to_add.extend(collection);
    to_add
}
