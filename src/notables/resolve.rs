//! Selection and detail resolution.
//!
//! Lookups run against the full, unfiltered collection and return `Option`:
//! a miss is a normal outcome that the caller renders with a placeholder.

use crate::i18n::{resolve, resolve_opt, Labels};
use crate::model::{Domain, ExternalLink, Language, Media, Personality};

pub fn resolve_by_id(collection: &[Personality], id: u32) -> Option<&Personality> {
    collection.iter().find(|p| p.id == id)
}

/// Target of a relation, if it still exists.
pub fn resolve_relation_target(collection: &[Personality], person_id: u32) -> Option<&Personality> {
    resolve_by_id(collection, person_id)
}

/// Name shown for a relation whose target could not be found.
pub fn missing_person_label(person_id: u32) -> String {
    format!("Person ID: {}", person_id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationView<'a> {
    pub person_id: u32,
    pub relation_label: String,
    pub target_name: String,
    pub target: Option<&'a Personality>,
}

impl RelationView<'_> {
    pub fn is_dangling(&self) -> bool {
        self.target.is_none()
    }
}

pub fn resolve_relations<'a>(
    collection: &'a [Personality],
    person: &Personality,
    language: Language,
    labels: &Labels,
) -> Vec<RelationView<'a>> {
    person
        .relations
        .iter()
        .map(|relation| {
            let target = resolve_relation_target(collection, relation.person_id);
            let target_name = match target {
                Some(t) => resolve(&t.name, language).to_string(),
                None => missing_person_label(relation.person_id),
            };
            RelationView {
                person_id: relation.person_id,
                relation_label: labels.relation_label(&relation.kind, language),
                target_name,
                target,
            }
        })
        .collect()
}

/// New average after one more vote: `(rating * votes + vote) / (votes + 1)`.
///
/// Votes are anonymous and cannot be revised; every call counts.
pub fn apply_rating(person: &Personality, vote: f64) -> Personality {
    let votes = person.rating_votes;
    let rating = (person.rating * f64::from(votes) + vote) / f64::from(votes + 1);
    Personality {
        rating,
        rating_votes: votes + 1,
        ..person.clone()
    }
}

/// Returns a new collection with record `id` re-rated. An unknown id leaves it unchanged.
pub fn apply_rating_in(collection: &[Personality], id: u32, vote: f64) -> Vec<Personality> {
    collection
        .iter()
        .map(|p| {
            if p.id == id {
                apply_rating(p, vote)
            } else {
                p.clone()
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkView {
    pub title: String,
    pub year: i32,
}

/// Everything the detail page shows, resolved for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    pub id: u32,
    pub name: String,
    pub domain: Domain,
    pub bio: String,
    pub birth_year: i32,
    pub birth_place: String,
    pub death_year: Option<i32>,
    pub main_image_url: &'a str,
    pub rating: f64,
    pub rating_votes: u32,
    pub notable_works: Vec<WorkView>,
    pub awards: &'a [String],
    pub relations: Vec<RelationView<'a>>,
    pub media: &'a [Media],
    pub links: &'a [ExternalLink],
}

impl<'a> DetailView<'a> {
    pub fn build(
        collection: &'a [Personality],
        person: &'a Personality,
        language: Language,
        labels: &Labels,
    ) -> Self {
        Self {
            id: person.id,
            name: resolve(&person.name, language).to_string(),
            domain: person.domain,
            bio: resolve(&person.bio, language).to_string(),
            birth_year: person.birth_year,
            birth_place: resolve(&person.birth_place, language).to_string(),
            death_year: person.death_year,
            main_image_url: &person.main_image_url,
            rating: person.rating,
            rating_votes: person.rating_votes,
            notable_works: person
                .notable_works
                .iter()
                .map(|w| WorkView {
                    title: resolve_opt(w.title.as_ref(), language).to_string(),
                    year: w.year,
                })
                .collect(),
            awards: &person.awards,
            relations: resolve_relations(collection, person, language, labels),
            media: &person.media_gallery,
            links: &person.external_links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LocalizedText, NotableWork, Relation};
    use crate::store::memory::fixtures::person;

    fn collection() -> Vec<Personality> {
        let mut a = person(1, "Ada");
        a.relations = vec![
            Relation {
                person_id: 2,
                kind: "Mentor".into(),
            },
            Relation {
                person_id: 99999,
                kind: "Spouse".into(),
            },
        ];
        let b = person(2, "Charles");
        vec![a, b]
    }

    #[test]
    fn resolves_by_id_or_none() {
        let people = collection();
        assert_eq!(resolve_by_id(&people, 2).map(|p| p.id), Some(2));
        assert!(resolve_by_id(&people, 3).is_none());
    }

    #[test]
    fn dangling_relation_is_not_found() {
        let people = collection();
        assert!(resolve_relation_target(&people, 99999).is_none());
    }

    #[test]
    fn dangling_relation_renders_fallback_label() {
        let people = collection();
        let views = resolve_relations(&people, &people[0], Language::En, Labels::builtin());
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].target_name, "Charles");
        assert_eq!(views[0].relation_label, "Mentor");
        assert!(!views[0].is_dangling());
        assert_eq!(views[1].target_name, "Person ID: 99999");
        assert_eq!(views[1].relation_label, "Spouse");
        assert!(views[1].is_dangling());
    }

    #[test]
    fn rating_is_a_running_average() {
        let mut p = person(1, "Ada");
        p.rating = 4.0;
        p.rating_votes = 10;
        let rated = apply_rating(&p, 5.0);
        assert!((rated.rating - 45.0 / 11.0).abs() < 1e-9);
        assert!((rated.rating - 4.0909).abs() < 1e-4);
        assert_eq!(rated.rating_votes, 11);
    }

    #[test]
    fn first_vote_sets_the_rating() {
        let p = person(1, "Ada");
        let rated = apply_rating(&p, 3.0);
        assert_eq!(rated.rating, 3.0);
        assert_eq!(rated.rating_votes, 1);
    }

    #[test]
    fn repeated_votes_all_count() {
        let p = person(1, "Ada");
        let rated = apply_rating(&apply_rating(&p, 5.0), 5.0);
        assert_eq!(rated.rating_votes, 2);
    }

    #[test]
    fn rating_in_collection_touches_only_the_target() {
        let people = collection();
        let updated = apply_rating_in(&people, 2, 4.0);
        assert_eq!(updated[0], people[0]);
        assert_eq!(updated[1].rating_votes, people[1].rating_votes + 1);

        assert_eq!(apply_rating_in(&people, 42, 4.0), people);
    }

    #[test]
    fn detail_view_resolves_without_fallback() {
        let mut people = collection();
        people[0].notable_works = vec![
            NotableWork {
                title: Some(LocalizedText::new().with(Language::En, "Notes")),
                year: 1843,
            },
            NotableWork {
                title: None,
                year: 1844,
            },
        ];
        let view = DetailView::build(&people, &people[0], Language::Ar, Labels::builtin());
        assert_eq!(view.name, "");
        assert_eq!(view.notable_works[0].title, "");
        assert_eq!(view.notable_works[0].year, 1843);
        assert_eq!(view.notable_works[1].title, "");

        let view = DetailView::build(&people, &people[0], Language::En, Labels::builtin());
        assert_eq!(view.notable_works[0].title, "Notes");
        assert_eq!(view.notable_works[1].title, "");
        assert_eq!(view.relations[1].target_name, "Person ID: 99999");
    }
}
