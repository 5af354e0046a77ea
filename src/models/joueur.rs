use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identifiable;
use super::resource::{parse_numeric_id, Patchable, Resource};
use super::ville::Ville;
use super::NullId;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Joueur {
    pub id: i64,
    #[serde(default)]
    pub pseudo: Option<String>,
    #[serde(default)]
    pub mot_de_passe: Option<String>,
    // null -> None en entrée, None -> null en sortie
    #[serde(default, with = "crate::utils::date_format::option")]
    pub date_inscription: Option<DateTime<Utc>>,
    #[serde(default)]
    pub est_administrateur: Option<bool>,
    #[serde(default)]
    pub ville: Option<Ville>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJoueur {
    pub id: NullId,
    pub pseudo: Option<String>,
    pub mot_de_passe: Option<String>,
    #[serde(with = "crate::utils::date_format::option")]
    pub date_inscription: Option<DateTime<Utc>>,
    pub est_administrateur: Option<bool>,
    pub ville: Option<Ville>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUpdateJoueur {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mot_de_passe: Option<String>,
    // toujours écrit, même absent
    #[serde(with = "crate::utils::date_format::option")]
    pub date_inscription: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_administrateur: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ville: Option<Ville>,
}

impl PartialUpdateJoueur {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            pseudo: None,
            mot_de_passe: None,
            date_inscription: None,
            est_administrateur: None,
            ville: None,
        }
    }
}

impl Identifiable for Joueur {
    type Id = i64;

    fn identifier(&self) -> &i64 {
        &self.id
    }
}

impl Identifiable for PartialUpdateJoueur {
    type Id = i64;

    fn identifier(&self) -> &i64 {
        &self.id
    }
}

impl Resource for Joueur {
    const RESOURCE_PATH: &'static str = "api/joueurs";
    const ENTITY_NAME: &'static str = "joueur";

    type Draft = NewJoueur;

    fn parse_id(raw: &str) -> Option<i64> {
        parse_numeric_id(raw)
    }
}

impl Patchable for Joueur {
    type Patch = PartialUpdateJoueur;
}
