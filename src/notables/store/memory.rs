use super::DataStore;
use crate::error::{NotablesError, Result};
use crate::model::{Personality, PersonalityDraft};
use tracing::debug;

/// Session store. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    people: Vec<Personality>,
    high_water: u32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: Vec<Personality>) -> Self {
        let high_water = max_id(&people);
        Self { people, high_water }
    }

    fn next_id(&self) -> Result<u32> {
        self.high_water
            .max(max_id(&self.people))
            .checked_add(1)
            .ok_or_else(|| NotablesError::Store("id space exhausted".into()))
    }
}

fn max_id(people: &[Personality]) -> u32 {
    people.iter().map(|p| p.id).max().unwrap_or(0)
}

impl DataStore for InMemoryStore {
    fn all(&self) -> &[Personality] {
        &self.people
    }

    fn insert(&mut self, draft: PersonalityDraft) -> Result<Personality> {
        let id = self.next_id()?;
        let person = Personality::from_draft(id, draft);
        self.people.push(person.clone());
        self.high_water = id;
        debug!(id, "inserted personality");
        Ok(person)
    }

    fn update(&mut self, person: Personality) -> Result<()> {
        let slot = self
            .people
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or(NotablesError::NotFound(person.id))?;
        *slot = person;
        Ok(())
    }

    fn delete(&mut self, id: u32) -> Result<Personality> {
        let pos = self
            .people
            .iter()
            .position(|p| p.id == id)
            .ok_or(NotablesError::NotFound(id))?;
        Ok(self.people.remove(pos))
    }

    fn replace_all(&mut self, people: Vec<Personality>) -> Result<()> {
        self.high_water = self.high_water.max(max_id(&people));
        self.people = people;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Domain, Gender, Language, LocalizedText};

    /// A minimal living personality with `name` in English and French.
    pub fn person(id: u32, name: &str) -> Personality {
        let text = LocalizedText::new()
            .with(Language::En, name)
            .with(Language::Fr, name);
        Personality {
            id,
            name: text.clone(),
            domain: Domain::History,
            bio: LocalizedText::new().with(Language::En, format!("Biography of {}", name)),
            birth_year: 1950,
            death_year: None,
            birth_place: LocalizedText::new(),
            gender: Gender::Male,
            main_image_url: format!("https://example.com/{}.jpg", id),
            rating: 0.0,
            rating_votes: 0,
            media_gallery: Vec::new(),
            relations: Vec::new(),
            notable_works: Vec::new(),
            awards: Vec::new(),
            external_links: Vec::new(),
        }
    }

    pub fn draft(name: &str) -> PersonalityDraft {
        let mut draft = PersonalityDraft::blank(1950);
        draft.name.set(Language::Fr, name);
        draft.name.set(Language::En, name);
        draft
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_people(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .insert(draft(&format!("Person {}", i + 1)))
                    .unwrap();
            }
            self
        }

        pub fn with_person(mut self, person: Personality) -> Self {
            let mut people = self.store.all().to_vec();
            people.push(person);
            self.store.replace_all(people).unwrap();
            self
        }

        pub fn with_deceased(mut self, name: &str, birth: i32, death: i32) -> Self {
            let mut d = draft(name);
            d.birth_year = birth;
            d.death_year = Some(death);
            self.store.insert(d).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{draft, person, StoreFixture};
    use super::*;

    #[test]
    fn first_id_is_one() {
        let mut store = InMemoryStore::new();
        let p = store.insert(draft("Ada")).unwrap();
        assert_eq!(p.id, 1);
    }

    #[test]
    fn ids_follow_the_maximum() {
        let mut store = InMemoryStore::with_people(vec![person(4, "A"), person(9, "B")]);
        assert_eq!(store.insert(draft("C")).unwrap().id, 10);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut store = StoreFixture::new().with_people(3).store;
        store.delete(3).unwrap();
        assert_eq!(store.insert(draft("D")).unwrap().id, 4);
    }

    #[test]
    fn insert_fails_once_ids_run_out() {
        let mut store = InMemoryStore::with_people(vec![person(u32::MAX, "Max")]);
        match store.insert(draft("Next")) {
            Err(NotablesError::Store(msg)) => assert_eq!(msg, "id space exhausted"),
            other => panic!("Expected Store error, got {:?}", other),
        }
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn update_and_delete_report_missing_ids() {
        let mut store = InMemoryStore::new();
        match store.delete(5) {
            Err(NotablesError::NotFound(id)) => assert_eq!(id, 5),
            _ => panic!("Expected NotFound"),
        }
        assert!(matches!(
            store.update(person(5, "X")),
            Err(NotablesError::NotFound(5))
        ));
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = StoreFixture::new().with_people(3).store;
        let mut second = store.all()[1].clone();
        second.birth_year = 1234;
        store.update(second).unwrap();
        assert_eq!(store.all()[1].birth_year, 1234);
        assert_eq!(store.all()[1].id, 2);
    }

    #[test]
    fn fixtures_coverage() {
        let fixture = StoreFixture::default()
            .with_people(2)
            .with_person(person(10, "Ten"))
            .with_deceased("Gone", 1900, 1980);
        let ids: Vec<u32> = fixture.store.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 10, 11]);
        assert_eq!(fixture.store.all()[3].death_year, Some(1980));
    }
}
