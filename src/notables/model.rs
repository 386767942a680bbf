use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Display language for personality content and UI labels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Fr,
    Ar,
}

/// Text direction of a language, for front-ends that lay out RTL scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            "ar" => Ok(Language::Ar),
            other => Err(format!("Unknown language: {}", other)),
        }
    }
}

/// Field of notability. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Music,
    Arts,
    Humor,
    Poetry,
    Literature,
    Business,
    Tech,
    Politics,
    Diplomacy,
    Military,
    Academics,
    History,
}

impl Domain {
    pub const ALL: [Domain; 12] = [
        Domain::Music,
        Domain::Arts,
        Domain::Humor,
        Domain::Poetry,
        Domain::Literature,
        Domain::Business,
        Domain::Tech,
        Domain::Politics,
        Domain::Diplomacy,
        Domain::Military,
        Domain::Academics,
        Domain::History,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Music => "Music",
            Domain::Arts => "Arts",
            Domain::Humor => "Humor",
            Domain::Poetry => "Poetry",
            Domain::Literature => "Literature",
            Domain::Business => "Business",
            Domain::Tech => "Tech",
            Domain::Politics => "Politics",
            Domain::Diplomacy => "Diplomacy",
            Domain::Military => "Military",
            Domain::Academics => "Academics",
            Domain::History => "History",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown domain: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("Unknown gender: {}", other)),
        }
    }
}

/// Per-language strings. Entries may be missing; see [`crate::i18n::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Language, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three languages present, each empty. This is what a fresh admin form holds.
    pub fn blank() -> Self {
        Self(Language::ALL.iter().map(|l| (*l, String::new())).collect())
    }

    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.0.insert(language, text.into());
        self
    }

    pub fn get(&self, language: Language) -> Option<&str> {
        self.0.get(&language).map(String::as_str)
    }

    pub fn set(&mut self, language: Language, text: impl Into<String>) {
        self.0.insert(language, text.into());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub caption: String,
}

/// Weak, typed reference to another personality. The target may not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub person_id: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotableWork {
    /// Older records list works by year alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedText>,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub id: u32,
    pub name: LocalizedText,
    pub domain: Domain,
    pub bio: LocalizedText,
    pub birth_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
    pub birth_place: LocalizedText,
    pub gender: Gender,
    pub main_image_url: String,
    pub rating: f64,
    #[serde(default)]
    pub rating_votes: u32,
    #[serde(default)]
    pub media_gallery: Vec<Media>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub notable_works: Vec<NotableWork>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub external_links: Vec<ExternalLink>,
}

impl Personality {
    /// Absence of a death year means alive for filtering purposes.
    pub fn is_alive(&self) -> bool {
        self.death_year.is_none()
    }

    pub fn from_draft(id: u32, draft: PersonalityDraft) -> Self {
        Self {
            id,
            name: draft.name,
            domain: draft.domain,
            bio: draft.bio,
            birth_year: draft.birth_year,
            death_year: draft.death_year,
            birth_place: draft.birth_place,
            gender: draft.gender,
            main_image_url: draft.main_image_url,
            rating: draft.rating,
            rating_votes: draft.rating_votes,
            media_gallery: draft.media_gallery,
            relations: draft.relations,
            notable_works: draft.notable_works,
            awards: draft.awards,
            external_links: draft.external_links,
        }
    }
}

/// A personality as submitted through the admin form, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityDraft {
    pub name: LocalizedText,
    pub domain: Domain,
    pub bio: LocalizedText,
    pub birth_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
    pub birth_place: LocalizedText,
    pub gender: Gender,
    pub main_image_url: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_votes: u32,
    #[serde(default)]
    pub media_gallery: Vec<Media>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub notable_works: Vec<NotableWork>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub external_links: Vec<ExternalLink>,
}

pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/seed/new-person/400/500";

impl PersonalityDraft {
    pub fn blank(current_year: i32) -> Self {
        Self {
            name: LocalizedText::blank(),
            domain: Domain::Music,
            bio: LocalizedText::blank(),
            birth_year: current_year,
            death_year: None,
            birth_place: LocalizedText::blank(),
            gender: Gender::Male,
            main_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            rating: 0.0,
            rating_votes: 0,
            media_gallery: Vec::new(),
            relations: Vec::new(),
            notable_works: Vec::new(),
            awards: Vec::new(),
            external_links: Vec::new(),
        }
    }
}

impl From<Personality> for PersonalityDraft {
    fn from(p: Personality) -> Self {
        Self {
            name: p.name,
            domain: p.domain,
            bio: p.bio,
            birth_year: p.birth_year,
            death_year: p.death_year,
            birth_place: p.birth_place,
            gender: p.gender,
            main_image_url: p.main_image_url,
            rating: p.rating,
            rating_votes: p.rating_votes,
            media_gallery: p.media_gallery,
            relations: p.relations,
            notable_works: p.notable_works,
            awards: p.awards,
            external_links: p.external_links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_source_json_shape() {
        let json = r#"{
            "id": 7,
            "name": {"en": "Ada", "fr": "Ada", "ar": "آدا"},
            "domain": "Tech",
            "bio": {"en": "Bio", "fr": "Bio", "ar": ""},
            "birthYear": 1815,
            "deathYear": 1852,
            "birthPlace": {"en": "London", "fr": "Londres", "ar": "لندن"},
            "gender": "female",
            "mainImageUrl": "https://example.com/ada.jpg",
            "rating": 4.5,
            "mediaGallery": [{"type": "image", "url": "https://example.com/a.jpg", "caption": "Portrait"}],
            "relations": [{"personId": 3, "type": "Mentor"}],
            "notableWorks": [{"title": {"en": "Notes"}, "year": 1843}, {"year": 1844}],
            "awards": [],
            "externalLinks": [{"name": "Wiki", "url": "https://example.com"}]
        }"#;

        let p: Personality = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.domain, Domain::Tech);
        assert_eq!(p.death_year, Some(1852));
        assert_eq!(p.rating_votes, 0);
        assert_eq!(p.relations[0].person_id, 3);
        assert_eq!(p.relations[0].kind, "Mentor");
        assert_eq!(p.media_gallery[0].kind, MediaKind::Image);
        let title = p.notable_works[0].title.as_ref().unwrap();
        assert_eq!(title.get(Language::Fr), None);
        assert_eq!(p.notable_works[1].title, None);
        assert!(!p.is_alive());
    }

    #[test]
    fn parses_domains_case_insensitively() {
        assert_eq!("music".parse::<Domain>().unwrap(), Domain::Music);
        assert_eq!("History".parse::<Domain>().unwrap(), Domain::History);
        assert!("Sports".parse::<Domain>().is_err());
        assert_eq!(Domain::ALL.len(), 12);
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Language::Fr.direction(), TextDirection::Ltr);
        assert_eq!(Language::default(), Language::Fr);
    }

    #[test]
    fn blank_draft_has_all_language_keys() {
        let draft = PersonalityDraft::blank(2024);
        for lang in Language::ALL {
            assert_eq!(draft.name.get(lang), Some(""));
        }
        assert_eq!(draft.birth_year, 2024);
        assert_eq!(draft.domain, Domain::Music);
    }
}
