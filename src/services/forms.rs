//! Adaptateurs de formulaires : valeurs brutes éditables <-> entités.
//!
//! Un formulaire vide (pas d'identité) produit un brouillon, un formulaire
//! chargé depuis une entité produit l'entité modifiée. Les dates sont
//! éditées au format `DATE_TIME_FORMAT` (à la minute).

use chrono::{DateTime, Utc};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{
    Authority, Edited, Joueur, NewJoueur, NewRegion, NewVille, NullId, Region, Resource, Ville,
};
use crate::utils::date_format;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("invalid date-time '{value}' for field {field} (expected YYYY-MM-DDTHH:mm)")]
    InvalidDate { field: &'static str, value: String },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

pub trait EntityForm: Sized {
    type Entity: Resource;

    /// Formulaire de création, valeurs par défaut appliquées
    fn blank() -> Self;

    fn from_entity(entity: &Self::Entity) -> Self;

    fn into_edited(self) -> Result<Edited<<Self::Entity as Resource>::Draft, Self::Entity>, FormError>;

    fn reset(&mut self, entity: &Self::Entity) {
        *self = Self::from_entity(entity);
    }
}

// ----------------------------------------------------------------------------
// Region
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionFormValue {
    pub id: Option<i64>,
    pub nom: Option<String>,
}

impl EntityForm for RegionFormValue {
    type Entity = Region;

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(region: &Region) -> Self {
        Self {
            id: Some(region.id),
            nom: region.nom.clone(),
        }
    }

    fn into_edited(self) -> Result<Edited<NewRegion, Region>, FormError> {
        Ok(match self.id {
            Some(id) => Edited::Existing(Region { id, nom: self.nom }),
            None => Edited::New(NewRegion { id: NullId, nom: self.nom }),
        })
    }
}

// ----------------------------------------------------------------------------
// Ville
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VilleFormValue {
    pub id: Option<i64>,
    pub nom: Option<String>,
    pub code_postal: Option<String>,
    pub nb_habitants: Option<i32>,
    pub region: Option<Region>,
}

impl EntityForm for VilleFormValue {
    type Entity = Ville;

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(ville: &Ville) -> Self {
        Self {
            id: Some(ville.id),
            nom: ville.nom.clone(),
            code_postal: ville.code_postal.clone(),
            nb_habitants: ville.nb_habitants,
            region: ville.region.clone(),
        }
    }

    fn into_edited(self) -> Result<Edited<NewVille, Ville>, FormError> {
        Ok(match self.id {
            Some(id) => Edited::Existing(Ville {
                id,
                nom: self.nom,
                code_postal: self.code_postal,
                nb_habitants: self.nb_habitants,
                region: self.region,
            }),
            None => Edited::New(NewVille {
                id: NullId,
                nom: self.nom,
                code_postal: self.code_postal,
                nb_habitants: self.nb_habitants,
                region: self.region,
            }),
        })
    }
}

// ----------------------------------------------------------------------------
// Joueur
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoueurFormValue {
    pub id: Option<i64>,
    pub pseudo: Option<String>,
    pub mot_de_passe: Option<String>,
    /// Texte au format `DATE_TIME_FORMAT`
    pub date_inscription: Option<String>,
    pub est_administrateur: Option<bool>,
    pub ville: Option<Ville>,
}

impl JoueurFormValue {
    /// Valeurs par défaut d'un nouveau joueur, inscrit à `now`
    pub fn blank_at(now: DateTime<Utc>) -> Self {
        Self {
            date_inscription: Some(date_format::to_form(&now)),
            est_administrateur: Some(false),
            ..Self::default()
        }
    }

    fn parse_date_inscription(&self) -> Result<Option<DateTime<Utc>>, FormError> {
        match self.date_inscription.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => date_format::from_form(value)
                .map(Some)
                .map_err(|_| FormError::InvalidDate {
                    field: "dateInscription",
                    value: value.to_string(),
                }),
        }
    }
}

impl EntityForm for JoueurFormValue {
    type Entity = Joueur;

    fn blank() -> Self {
        Self::blank_at(Utc::now())
    }

    fn from_entity(joueur: &Joueur) -> Self {
        Self {
            id: Some(joueur.id),
            pseudo: joueur.pseudo.clone(),
            mot_de_passe: joueur.mot_de_passe.clone(),
            date_inscription: joueur.date_inscription.as_ref().map(date_format::to_form),
            est_administrateur: joueur.est_administrateur,
            ville: joueur.ville.clone(),
        }
    }

    fn into_edited(self) -> Result<Edited<NewJoueur, Joueur>, FormError> {
        let date_inscription = self.parse_date_inscription()?;

        Ok(match self.id {
            Some(id) => Edited::Existing(Joueur {
                id,
                pseudo: self.pseudo,
                mot_de_passe: self.mot_de_passe,
                date_inscription,
                est_administrateur: self.est_administrateur,
                ville: self.ville,
            }),
            None => Edited::New(NewJoueur {
                id: NullId,
                pseudo: self.pseudo,
                mot_de_passe: self.mot_de_passe,
                date_inscription,
                est_administrateur: self.est_administrateur,
                ville: self.ville,
            }),
        })
    }
}

// ----------------------------------------------------------------------------
// Authority
// ----------------------------------------------------------------------------

/// Une authority n'est jamais mise à jour : le formulaire produit toujours une création.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorityFormValue {
    pub name: Option<String>,
}

impl EntityForm for AuthorityFormValue {
    type Entity = Authority;

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(authority: &Authority) -> Self {
        Self {
            name: Some(authority.name.clone()),
        }
    }

    fn into_edited(self) -> Result<Edited<Authority, Authority>, FormError> {
        let authority = Authority::new(self.name.unwrap_or_default().trim());
        authority.validate()?;
        Ok(Edited::New(authority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_samples;
    use chrono::TimeZone;

    #[test]
    fn test_blank_joueur_defaults() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 12).unwrap();

        let form = JoueurFormValue::blank_at(now);

        assert_eq!(form.id, None);
        assert_eq!(form.date_inscription.as_deref(), Some("2025-03-01T09:30"));
        assert_eq!(form.est_administrateur, Some(false));
    }

    #[test]
    fn test_blank_form_gives_new_joueur() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();

        let edited = JoueurFormValue::blank_at(now).into_edited().unwrap();

        let Edited::New(draft) = edited else {
            panic!("expected a new joueur");
        };
        assert_eq!(draft.date_inscription, Some(now));
        assert_eq!(draft.est_administrateur, Some(false));
    }

    #[test]
    fn test_existing_joueur_round_trip() {
        let joueur = test_samples::joueur::SAMPLE_WITH_FULL_DATA.clone();

        let edited = JoueurFormValue::from_entity(&joueur).into_edited().unwrap();

        assert_eq!(edited, Edited::Existing(joueur));
    }

    #[test]
    fn test_existing_joueur_without_date_keeps_none() {
        let joueur = test_samples::joueur::SAMPLE_WITH_REQUIRED_DATA.clone();

        let form = JoueurFormValue::from_entity(&joueur);

        assert_eq!(form.date_inscription, None);
        assert_eq!(form.into_edited().unwrap(), Edited::Existing(joueur));
    }

    #[test]
    fn test_invalid_date_text() {
        let form = JoueurFormValue {
            date_inscription: Some("demain".to_string()),
            ..Default::default()
        };

        assert!(matches!(form.into_edited(), Err(FormError::InvalidDate { .. })));
    }

    #[test]
    fn test_reset_replaces_values() {
        let mut form = VilleFormValue {
            nom: Some("brouillon".to_string()),
            ..Default::default()
        };
        let ville = test_samples::ville::SAMPLE_WITH_FULL_DATA.clone();

        form.reset(&ville);

        assert_eq!(form, VilleFormValue::from_entity(&ville));
        assert_eq!(form.into_edited().unwrap(), Edited::Existing(ville));
    }

    #[test]
    fn test_blank_region_is_new() {
        let edited = RegionFormValue::blank().into_edited().unwrap();
        assert_eq!(edited, Edited::New(test_samples::region::SAMPLE_WITH_NEW_DATA.clone()));
    }

    #[test]
    fn test_authority_form_is_validated() {
        let empty = AuthorityFormValue::blank();
        assert!(matches!(empty.into_edited(), Err(FormError::Validation(_))));

        let form = AuthorityFormValue {
            name: Some(" ROLE_ADMIN ".to_string()),
        };
        assert_eq!(form.into_edited().unwrap(), Edited::New(Authority::new("ROLE_ADMIN")));
    }
}
