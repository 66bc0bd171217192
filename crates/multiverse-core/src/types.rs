//! Character records as returned by the Rick and Morty API.
//!
//! Records are immutable snapshots of one fetch response. Nothing in the
//! application mutates a [`Character`] after it is decoded.

use serde::{Deserialize, Serialize};

/// A named place reference (origin or current location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// API resource URL; empty or absent for unknown places
    #[serde(default)]
    pub url: Option<String>,
}

impl Place {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

/// One fetched character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    /// Portrait URL
    pub image: String,
    pub species: String,
    pub gender: String,
    /// Life status. Open-ended: "Alive", "Dead", "unknown" are the common values.
    pub status: String,
    /// Episode resource URLs this character appears in
    #[serde(default)]
    pub episode: Vec<String>,
    pub origin: Place,
    pub location: Place,
    /// Sub-type; the API sends an empty string when there is none
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// ISO 8601 creation timestamp
    pub created: String,
}

impl Character {
    /// Sub-type for display, `None` when absent or blank.
    pub fn sub_type(&self) -> Option<&str> {
        self.kind
            .as_deref()
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
    }

    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

/// Paging metadata sent alongside every result page.
///
/// Parsed for logging only; later pages are never requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub pages: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Response envelope of the character endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: PageInfo,
    pub results: Vec<Character>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RICK: &str = r#"{
        "id": 1,
        "name": "Rick Sanchez",
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
        "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
        "episode": [
            "https://rickandmortyapi.com/api/episode/1",
            "https://rickandmortyapi.com/api/episode/2"
        ],
        "url": "https://rickandmortyapi.com/api/character/1",
        "created": "2017-11-04T18:48:46.250Z"
    }"#;

    #[test]
    fn decodes_api_character() {
        let rick: Character = serde_json::from_str(RICK).unwrap();
        assert_eq!(rick.id, 1);
        assert_eq!(rick.name, "Rick Sanchez");
        assert_eq!(rick.origin.name, "Earth (C-137)");
        assert_eq!(rick.location.name, "Citadel of Ricks");
        assert_eq!(rick.episode_count(), 2);
        assert_eq!(rick.created, "2017-11-04T18:48:46.250Z");
    }

    #[test]
    fn blank_type_is_no_sub_type() {
        let rick: Character = serde_json::from_str(RICK).unwrap();
        assert_eq!(rick.kind.as_deref(), Some(""));
        assert_eq!(rick.sub_type(), None);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "id": 7, "name": "Abradolf Lincler", "status": "unknown",
            "species": "Human", "gender": "Male",
            "origin": { "name": "Earth (Replacement Dimension)" },
            "location": { "name": "Testicle Monster Dimension" },
            "image": "https://rickandmortyapi.com/api/character/avatar/7.jpeg",
            "created": "2017-11-04T19:59:20.523Z"
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert!(c.episode.is_empty());
        assert_eq!(c.kind, None);
        assert_eq!(c.origin.url, None);
    }

    #[test]
    fn sub_type_is_trimmed() {
        let mut c: Character = serde_json::from_str(RICK).unwrap();
        c.kind = Some("  Genetic experiment ".to_string());
        assert_eq!(c.sub_type(), Some("Genetic experiment"));
    }

    #[test]
    fn page_without_info_decodes() {
        let json = format!(r#"{{ "results": [{}] }}"#, RICK);
        let page: CharacterPage = serde_json::from_str(&json).unwrap();
        assert_eq!(page.info, PageInfo::default());
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn page_without_results_is_rejected() {
        let json = r#"{ "info": { "count": 0, "pages": 0, "next": null, "prev": null } }"#;
        assert!(serde_json::from_str::<CharacterPage>(json).is_err());
    }
}
