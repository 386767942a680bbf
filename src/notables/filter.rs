//! # Filtering
//!
//! [`matches`] is the per-record predicate; [`filter`] applies it over a
//! collection. Both are pure: the same collection and spec always produce the
//! same sequence, in source order.
//!
//! Year filters are **unanchored substring** matches on the decimal form of the
//! year, so `"19"` matches 1975, 1990 and 1819 alike. A person without a death
//! year never matches a non-empty death-year filter.

use crate::error::{FieldError, NotablesError, Result};
use crate::model::{Domain, Gender, Personality};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainFilter {
    #[default]
    All,
    Only(Domain),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Alive,
    Deceased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Only(Gender),
}

impl FromStr for DomainFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(DomainFilter::All);
        }
        s.parse().map(DomainFilter::Only)
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "alive" => Ok(StatusFilter::Alive),
            "deceased" => Ok(StatusFilter::Deceased),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

impl FromStr for GenderFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(GenderFilter::All);
        }
        s.parse().map(GenderFilter::Only)
    }
}

/// One of the five user-editable filter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Domain,
    BirthYear,
    DeathYear,
    Status,
    Gender,
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterField::Domain => "domain",
            FilterField::BirthYear => "birthYear",
            FilterField::DeathYear => "deathYear",
            FilterField::Status => "status",
            FilterField::Gender => "gender",
        };
        f.write_str(name)
    }
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "domain" => Ok(FilterField::Domain),
            "birthyear" | "birth" => Ok(FilterField::BirthYear),
            "deathyear" | "death" => Ok(FilterField::DeathYear),
            "status" => Ok(FilterField::Status),
            "gender" => Ok(FilterField::Gender),
            other => Err(format!("Unknown filter field: {}", other)),
        }
    }
}

/// Active filter criteria. The default value matches every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub domain: DomainFilter,
    pub birth_year: String,
    pub death_year: String,
    pub status: StatusFilter,
    pub gender: GenderFilter,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Updates one field from its user-facing form (`"all"`, `"alive"`, `"Music"`, `"19"`).
    ///
    /// Year inputs are stored as typed, including non-digits; they simply match nothing.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<()> {
        let reject = |_: String| {
            NotablesError::Validation(vec![FieldError::new(
                field.to_string(),
                "filter_invalid_value",
            )])
        };
        match field {
            FilterField::Domain => self.domain = value.parse().map_err(reject)?,
            FilterField::BirthYear => self.birth_year = value.to_string(),
            FilterField::DeathYear => self.death_year = value.to_string(),
            FilterField::Status => self.status = value.parse().map_err(reject)?,
            FilterField::Gender => self.gender = value.parse().map_err(reject)?,
        }
        Ok(())
    }
}

/// True when `person` satisfies every clause of `spec`.
pub fn matches(person: &Personality, spec: &FilterSpec) -> bool {
    let domain_match = match spec.domain {
        DomainFilter::All => true,
        DomainFilter::Only(domain) => person.domain == domain,
    };

    let birth_year_match =
        spec.birth_year.is_empty() || person.birth_year.to_string().contains(&spec.birth_year);

    let death_year_match = spec.death_year.is_empty()
        || person
            .death_year
            .is_some_and(|year| year.to_string().contains(&spec.death_year));

    let status_match = match spec.status {
        StatusFilter::All => true,
        StatusFilter::Alive => person.death_year.is_none(),
        StatusFilter::Deceased => person.death_year.is_some(),
    };

    let gender_match = match spec.gender {
        GenderFilter::All => true,
        GenderFilter::Only(gender) => person.gender == gender,
    };

    domain_match && birth_year_match && death_year_match && status_match && gender_match
}

/// Stable filter: matching records in their original order.
pub fn filter<'a>(collection: &'a [Personality], spec: &FilterSpec) -> Vec<&'a Personality> {
    let filtered: Vec<&Personality> = collection.iter().filter(|p| matches(p, spec)).collect();
    debug!(
        total = collection.len(),
        matched = filtered.len(),
        "filtered personalities"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::person;

    fn born(id: u32, year: i32) -> Personality {
        let mut p = person(id, "Someone");
        p.birth_year = year;
        p
    }

    fn spec_with(field: FilterField, value: &str) -> FilterSpec {
        let mut spec = FilterSpec::new();
        spec.set(field, value).unwrap();
        spec
    }

    #[test]
    fn default_spec_matches_everything() {
        let people = vec![born(1, 1900), born(2, 2000)];
        assert_eq!(filter(&people, &FilterSpec::new()).len(), 2);
    }

    #[test]
    fn birth_year_is_an_unanchored_substring() {
        let p = born(1, 1987);
        for hit in ["87", "1987", "198", "9"] {
            assert!(matches(&p, &spec_with(FilterField::BirthYear, hit)), "{}", hit);
        }
        assert!(!matches(&p, &spec_with(FilterField::BirthYear, "88")));

        let people = vec![born(1, 1975), born(2, 1990), born(3, 1819), born(4, 2001)];
        let ids: Vec<u32> = filter(&people, &spec_with(FilterField::BirthYear, "19"))
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn missing_death_year_never_matches_death_year_filter() {
        let alive = born(1, 1950);
        assert!(!matches(&alive, &spec_with(FilterField::DeathYear, "1")));
        assert!(matches(&alive, &spec_with(FilterField::DeathYear, "")));

        let mut dead = born(2, 1900);
        dead.death_year = Some(1975);
        assert!(matches(&dead, &spec_with(FilterField::DeathYear, "97")));
        assert!(!matches(&dead, &spec_with(FilterField::DeathYear, "98")));
    }

    #[test]
    fn status_follows_death_year_presence() {
        let alive = born(1, 1960);
        let mut dead = born(2, 1930);
        dead.death_year = Some(2020);

        let alive_spec = spec_with(FilterField::Status, "alive");
        let deceased_spec = spec_with(FilterField::Status, "deceased");

        assert!(matches(&alive, &alive_spec));
        assert!(!matches(&alive, &deceased_spec));
        assert!(matches(&dead, &deceased_spec));
        assert!(!matches(&dead, &alive_spec));
    }

    #[test]
    fn domain_and_gender_are_exact() {
        let mut p = born(1, 1950);
        p.domain = Domain::Poetry;
        p.gender = Gender::Female;

        assert!(matches(&p, &spec_with(FilterField::Domain, "Poetry")));
        assert!(!matches(&p, &spec_with(FilterField::Domain, "Music")));
        assert!(matches(&p, &spec_with(FilterField::Gender, "female")));
        assert!(!matches(&p, &spec_with(FilterField::Gender, "male")));
    }

    #[test]
    fn clauses_combine_with_and() {
        let mut p = born(1, 1950);
        p.domain = Domain::Music;
        let mut spec = spec_with(FilterField::Domain, "Music");
        spec.set(FilterField::BirthYear, "1960").unwrap();
        assert!(!matches(&p, &spec));
    }

    #[test]
    fn filter_preserves_order_and_is_idempotent() {
        let mut people: Vec<Personality> = (1..=30).map(|i| born(i, 1900 + i as i32)).collect();
        people.reverse();
        let spec = spec_with(FilterField::BirthYear, "191");

        let once: Vec<Personality> = filter(&people, &spec).into_iter().cloned().collect();
        let twice: Vec<Personality> = filter(&once, &spec).into_iter().cloned().collect();
        assert_eq!(once, twice);
        assert_eq!(once.len(), 10);

        let positions: Vec<usize> = once
            .iter()
            .map(|p| people.iter().position(|q| q.id == p.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        for excluded in people.iter().filter(|p| !once.iter().any(|q| q.id == p.id)) {
            assert!(!matches(excluded, &spec));
        }
    }

    #[test]
    fn set_rejects_unknown_enum_values() {
        let mut spec = FilterSpec::new();
        assert!(matches!(
            spec.set(FilterField::Status, "zombie"),
            Err(NotablesError::Validation(_))
        ));
        assert!(spec.set(FilterField::Domain, "Sports").is_err());
        assert!(spec.is_default());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut spec = spec_with(FilterField::Gender, "male");
        spec.set(FilterField::BirthYear, "19").unwrap();
        assert!(!spec.is_default());
        spec.reset();
        assert!(spec.is_default());
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("birth-year".parse::<FilterField>().unwrap(), FilterField::BirthYear);
        assert_eq!("deathYear".parse::<FilterField>().unwrap(), FilterField::DeathYear);
        assert!("age".parse::<FilterField>().is_err());
    }
}
