use serde::{Deserialize, Serialize};

use super::identity::Identifiable;
use super::resource::{parse_numeric_id, Patchable, Resource};
use super::NullId;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: i64,
    #[serde(default)]
    pub nom: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegion {
    pub id: NullId,
    pub nom: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUpdateRegion {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
}

impl PartialUpdateRegion {
    pub fn new(id: i64) -> Self {
        Self { id, nom: None }
    }
}

impl Identifiable for Region {
    type Id = i64;

    fn identifier(&self) -> &i64 {
        &self.id
    }
}

impl Identifiable for PartialUpdateRegion {
    type Id = i64;

    fn identifier(&self) -> &i64 {
        &self.id
    }
}

impl Resource for Region {
    const RESOURCE_PATH: &'static str = "api/regions";
    const ENTITY_NAME: &'static str = "region";

    type Draft = NewRegion;

    fn parse_id(raw: &str) -> Option<i64> {
        parse_numeric_id(raw)
    }
}

impl Patchable for Region {
    type Patch = PartialUpdateRegion;
}
