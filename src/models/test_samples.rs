//! Jeux de données figés, construits une seule fois par exécution des tests.

pub mod region {
    use std::sync::LazyLock;

    use crate::models::{NewRegion, Region};

    pub static SAMPLE_WITH_REQUIRED_DATA: LazyLock<Region> = LazyLock::new(|| Region {
        id: 10723,
        nom: None,
    });

    pub static SAMPLE_WITH_PARTIAL_DATA: LazyLock<Region> = LazyLock::new(|| Region {
        id: 339,
        nom: Some("soggy tightly bid".to_string()),
    });

    pub static SAMPLE_WITH_FULL_DATA: LazyLock<Region> = LazyLock::new(|| Region {
        id: 1669,
        nom: Some("rationale".to_string()),
    });

    pub static SAMPLE_WITH_NEW_DATA: LazyLock<NewRegion> = LazyLock::new(NewRegion::default);
}

pub mod ville {
    use std::sync::LazyLock;

    use crate::models::{NewVille, Ville};

    pub static SAMPLE_WITH_REQUIRED_DATA: LazyLock<Ville> = LazyLock::new(|| Ville {
        id: 13250,
        ..Default::default()
    });

    pub static SAMPLE_WITH_PARTIAL_DATA: LazyLock<Ville> = LazyLock::new(|| Ville {
        id: 1397,
        nb_habitants: Some(1322),
        ..Default::default()
    });

    pub static SAMPLE_WITH_FULL_DATA: LazyLock<Ville> = LazyLock::new(|| Ville {
        id: 18108,
        nom: Some("whenever hypothesise".to_string()),
        code_postal: Some("which".to_string()),
        nb_habitants: Some(6612),
        region: None,
    });

    pub static SAMPLE_WITH_NEW_DATA: LazyLock<NewVille> = LazyLock::new(NewVille::default);
}

pub mod joueur {
    use std::sync::LazyLock;

    use chrono::{TimeZone, Utc};

    use crate::models::{Joueur, NewJoueur};

    pub static SAMPLE_WITH_REQUIRED_DATA: LazyLock<Joueur> = LazyLock::new(|| Joueur {
        id: 23441,
        ..Default::default()
    });

    pub static SAMPLE_WITH_PARTIAL_DATA: LazyLock<Joueur> = LazyLock::new(|| Joueur {
        id: 16938,
        pseudo: Some("obediently".to_string()),
        est_administrateur: Some(false),
        ..Default::default()
    });

    pub static SAMPLE_WITH_FULL_DATA: LazyLock<Joueur> = LazyLock::new(|| Joueur {
        id: 14738,
        pseudo: Some("functional inside painfully".to_string()),
        mot_de_passe: Some("tensely".to_string()),
        date_inscription: Utc.with_ymd_and_hms(2024, 11, 25, 3, 3, 0).single(),
        est_administrateur: Some(false),
        ville: None,
    });

    pub static SAMPLE_WITH_NEW_DATA: LazyLock<NewJoueur> = LazyLock::new(NewJoueur::default);
}

pub mod authority {
    use std::sync::LazyLock;

    use crate::models::Authority;

    pub static SAMPLE_WITH_REQUIRED_DATA: LazyLock<Authority> =
        LazyLock::new(|| Authority::new("23b72bf2-a02b-4853-b7ca-4e91a86228ba"));

    pub static SAMPLE_WITH_PARTIAL_DATA: LazyLock<Authority> =
        LazyLock::new(|| Authority::new("6546b5f4-2420-4d3d-90f8-0f67471be815"));

    pub static SAMPLE_WITH_FULL_DATA: LazyLock<Authority> =
        LazyLock::new(|| Authority::new("fd6be0ed-664b-4a50-8d82-bdeb7b99f04d"));

    // Brouillon vide : le nom reste à saisir
    pub static SAMPLE_WITH_NEW_DATA: LazyLock<Authority> = LazyLock::new(Authority::default);
}
