use crate::error::{NotablesError, Result};
use crate::model::Personality;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Sample collection compiled into the binary, used when no data file is configured.
const BUILTIN_COLLECTION: &str = include_str!("../../../data/personalities.json");

pub fn builtin_collection() -> Result<Vec<Personality>> {
    parse_collection(BUILTIN_COLLECTION)
}

/// Reads a JSON array of personalities.
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<Vec<Personality>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(NotablesError::Io)?;
    let people = parse_collection(&content)?;
    info!(path = %path.display(), count = people.len(), "loaded collection");
    Ok(people)
}

pub fn parse_collection(content: &str) -> Result<Vec<Personality>> {
    let people: Vec<Personality> =
        serde_json::from_str(content).map_err(NotablesError::Serialization)?;

    let mut seen = HashSet::new();
    for p in &people {
        if p.id == 0 {
            return Err(NotablesError::Store(
                "Personality ids must be positive".to_string(),
            ));
        }
        if !seen.insert(p.id) {
            return Err(NotablesError::Store(format!(
                "Duplicate personality id: {}",
                p.id
            )));
        }
    }
    Ok(people)
}
