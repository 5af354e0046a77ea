use serde::{Deserialize, Serialize};

use super::identity::Identifiable;
use super::region::Region;
use super::resource::{parse_numeric_id, Patchable, Resource};
use super::NullId;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ville {
    pub id: i64,
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub code_postal: Option<String>,
    #[serde(default)]
    pub nb_habitants: Option<i32>,
    /// Région embarquée par valeur (copie au moment du chargement)
    #[serde(default)]
    pub region: Option<Region>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVille {
    pub id: NullId,
    pub nom: Option<String>,
    pub code_postal: Option<String>,
    pub nb_habitants: Option<i32>,
    pub region: Option<Region>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUpdateVille {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_postal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nb_habitants: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

impl PartialUpdateVille {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            nom: None,
            code_postal: None,
            nb_habitants: None,
            region: None,
        }
    }
}

impl Identifiable for Ville {
    type Id = i64;

    fn identifier(&self) -> &i64 {
        &self.id
    }
}

impl Identifiable for PartialUpdateVille {
    type Id = i64;

    fn identifier(&self) -> &i64 {
        &self.id
    }
}

impl Resource for Ville {
    const RESOURCE_PATH: &'static str = "api/villes";
    const ENTITY_NAME: &'static str = "ville";

    type Draft = NewVille;

    fn parse_id(raw: &str) -> Option<i64> {
        parse_numeric_id(raw)
    }
}

impl Patchable for Ville {
    type Patch = PartialUpdateVille;
}
