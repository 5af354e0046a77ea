//! Options de requête pour les listes (tri, pagination, filtres libres).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self { field: field.into(), direction: Direction::Asc }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self { field: field.into(), direction: Direction::Desc }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction.as_str())
    }
}

/// "nom,desc" ou "nom" (asc par défaut)
impl FromStr for Sort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            Some((field, dir)) => (field.trim(), dir.trim()),
            None => (s.trim(), "asc"),
        };

        if field.is_empty() {
            return Err(format!("Invalid sort '{}': missing field", s));
        }

        let direction = match direction.to_ascii_lowercase().as_str() {
            "asc" => Direction::Asc,
            "desc" => Direction::Desc,
            other => return Err(format!("Invalid sort direction '{}' (expected asc or desc)", other)),
        };

        Ok(Sort { field: field.to_string(), direction })
    }
}

/// Options reconnues + filtres arbitraires.
/// Les paramètres sont produits dans un ordre stable : page, size, filtres
/// (ordre des clés), puis un `sort` par critère.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<Sort>,
    pub filters: BTreeMap<String, Vec<String>>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }

    /// Une même clé peut être répétée (`nom.in=a&nom.in=b`)
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.entry(key.into()).or_default().push(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.size.is_none() && self.sort.is_empty() && self.filters.is_empty()
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.size {
            params.push(("size".to_string(), size.to_string()));
        }

        for (key, values) in &self.filters {
            for value in values {
                params.push((key.clone(), value.clone()));
            }
        }

        for sort in &self.sort {
            params.push(("sort".to_string(), sort.to_string()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(options: &QueryOptions) -> Vec<(String, String)> {
        options.to_params()
    }

    fn p(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_empty_options() {
        let options = QueryOptions::new();
        assert!(options.is_empty());
        assert!(pairs(&options).is_empty());
    }

    #[test]
    fn test_stable_order() {
        let options = QueryOptions::new()
            .sort(Sort::desc("nom"))
            .filter("region.id", "3")
            .size(20)
            .filter("codePostal.contains", "35")
            .page(2)
            .sort(Sort::asc("id"));

        assert_eq!(
            pairs(&options),
            vec![
                p("page", "2"),
                p("size", "20"),
                p("codePostal.contains", "35"),
                p("region.id", "3"),
                p("sort", "nom,desc"),
                p("sort", "id,asc"),
            ]
        );
    }

    #[test]
    fn test_repeated_filter_values() {
        let options = QueryOptions::new().filter("id.in", "1").filter("id.in", "2");
        assert_eq!(pairs(&options), vec![p("id.in", "1"), p("id.in", "2")]);
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!("nom,desc".parse::<Sort>().unwrap(), Sort::desc("nom"));
        assert_eq!("nom".parse::<Sort>().unwrap(), Sort::asc("nom"));
        assert_eq!("pseudo, ASC".parse::<Sort>().unwrap(), Sort::asc("pseudo"));
        assert!(",asc".parse::<Sort>().is_err());
        assert!("nom,up".parse::<Sort>().is_err());
    }
}
