//! # Storage Layer
//!
//! The directory keeps its personalities in a single session store. The
//! [`DataStore`] trait is what the command layer talks to; the only
//! implementation is [`memory::InMemoryStore`], which lives as long as the
//! process does. Collections are seeded from JSON through [`seed`]; nothing is
//! written back.
//!
//! ## Identifiers
//!
//! New records get `max(existing ids) + 1`, or 1 in an empty store. An id that
//! was deleted during the session is never handed out again, even when it was
//! the highest one.

use crate::error::Result;
use crate::model::{Personality, PersonalityDraft};

pub mod memory;
pub mod seed;

pub trait DataStore {
    /// Every record, in collection order.
    fn all(&self) -> &[Personality];

    fn get(&self, id: u32) -> Option<&Personality> {
        self.all().iter().find(|p| p.id == id)
    }

    /// Store a draft under a freshly assigned id.
    fn insert(&mut self, draft: PersonalityDraft) -> Result<Personality>;

    /// Replace the record with the same id. Fails with `NotFound` when absent.
    fn update(&mut self, person: Personality) -> Result<()>;

    /// Remove a record, returning it. Fails with `NotFound` when absent.
    fn delete(&mut self, id: u32) -> Result<Personality>;

    /// Swap in a whole new collection (used for derived updates such as ratings).
    fn replace_all(&mut self, people: Vec<Personality>) -> Result<()>;
}
