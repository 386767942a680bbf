use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FieldError, NotablesError, Result};
use crate::i18n::Labels;
use crate::model::Language;
use crate::resolve::{apply_rating_in, resolve_by_id};
use crate::store::DataStore;
use tracing::debug;

pub const MIN_VOTE: u8 = 1;
pub const MAX_VOTE: u8 = 5;

/// Records one anonymous star vote for `id`.
///
/// There is no voter identity: the same caller may vote any number of times
/// and earlier votes cannot be changed.
pub fn run<S: DataStore>(
    store: &mut S,
    id: u32,
    vote: u8,
    language: Language,
    labels: &Labels,
) -> Result<CmdResult> {
    if !(MIN_VOTE..=MAX_VOTE).contains(&vote) {
        return Err(NotablesError::Validation(vec![FieldError::new(
            "rating",
            "rating_invalid",
        )]));
    }

    if resolve_by_id(store.all(), id).is_none() {
        let warning = CmdMessage::warning(labels.t("not_found", language));
        return Ok(CmdResult::default().with_message(warning));
    }

    let updated = apply_rating_in(store.all(), id, f64::from(vote));
    let rated = resolve_by_id(&updated, id).cloned();
    store.replace_all(updated)?;

    let mut result = CmdResult::default();
    if let Some(person) = rated {
        debug!(
            id,
            vote,
            rating = person.rating,
            votes = person.rating_votes,
            "rated"
        );
        result.affected.push(person);
    }
    result.add_message(CmdMessage::success(labels.t("rating_thanks", language)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::{person, StoreFixture};

    #[test]
    fn updates_the_running_average() {
        let mut p = person(1, "Ada");
        p.rating = 4.0;
        p.rating_votes = 10;
        let mut store = StoreFixture::new().with_person(p).store;

        let result = run(&mut store, 1, 5, Language::En, Labels::builtin()).unwrap();
        let stored = &store.all()[0];
        assert_eq!(stored.rating_votes, 11);
        assert!((stored.rating - 45.0 / 11.0).abs() < 1e-9);
        assert_eq!(result.affected[0].rating_votes, 11);
    }

    #[test]
    fn leaves_other_records_untouched() {
        let mut store = StoreFixture::new().with_people(3).store;
        let before = store.all().to_vec();
        run(&mut store, 2, 3, Language::En, Labels::builtin()).unwrap();
        assert_eq!(store.all()[0], before[0]);
        assert_eq!(store.all()[2], before[2]);
        assert_eq!(store.all()[1].rating_votes, 1);
    }

    #[test]
    fn unknown_id_warns_without_failing() {
        let mut store = StoreFixture::new().with_people(1).store;
        let result = run(&mut store, 9, 4, Language::En, Labels::builtin()).unwrap();
        assert!(result.affected.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn rejects_votes_outside_the_star_range() {
        let mut store = StoreFixture::new().with_people(1).store;
        for vote in [0, 6] {
            assert!(matches!(
                run(&mut store, 1, vote, Language::En, Labels::builtin()),
                Err(NotablesError::Validation(_))
            ));
        }
        assert_eq!(store.all()[0].rating_votes, 0);
    }
}
