//! Conversion des dates entre le fil (JSON), le domaine et les formulaires.
//!
//! Sur le fil une date est une chaîne RFC 3339 en UTC avec millisecondes
//! (`2024-11-25T03:03:00.000Z`). Une date absente part en `null` ; un `null`
//! (ou un champ manquant) qui revient du serveur devient `None`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Format des champs date-heure dans les formulaires (précision à la minute)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn to_wire(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn from_wire(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|d| d.with_timezone(&Utc))
}

pub fn to_form(date: &DateTime<Utc>) -> String {
    date.format(DATE_TIME_FORMAT).to_string()
}

pub fn from_form(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).map(|d| d.and_utc())
}

/// Module serde pour `Option<DateTime<Utc>>`, à utiliser avec
/// `#[serde(default, with = "crate::utils::date_format::option")]`.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&super::to_wire(d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(value) => super::from_wire(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
