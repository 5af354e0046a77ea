use serde::{Deserialize, Serialize};
use validator::Validate;

use super::identity::Identifiable;
use super::resource::Resource;

/// Rôle applicatif. Le nom sert d'identité, il n'y a pas d'id numérique.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Authority {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

impl Authority {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Identifiable for Authority {
    type Id = String;

    fn identifier(&self) -> &String {
        &self.name
    }
}

impl Resource for Authority {
    const RESOURCE_PATH: &'static str = "api/authorities";
    const ENTITY_NAME: &'static str = "authority";

    // Le nom est choisi à la création : le brouillon est l'entité elle-même
    type Draft = Authority;

    fn parse_id(raw: &str) -> Option<String> {
        let name = raw.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}
