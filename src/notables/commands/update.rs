use crate::commands::{require_admin, validate, CmdMessage, CmdResult};
use crate::error::Result;
use crate::i18n::Labels;
use crate::model::{Personality, PersonalityDraft};
use crate::session::Session;
use crate::store::DataStore;
use tracing::info;

/// Replaces the record with `person.id`; the id itself never changes.
pub fn run<S: DataStore>(
    store: &mut S,
    session: &Session,
    person: Personality,
    current_year: i32,
    labels: &Labels,
) -> Result<CmdResult> {
    require_admin(session)?;
    let id = person.id;
    let draft = PersonalityDraft::from(person);
    validate::check(&draft, current_year)?;

    let updated = Personality::from_draft(id, draft);
    store.update(updated.clone())?;
    info!(session = %session.id(), id, "personality updated");

    Ok(CmdResult::default()
        .with_affected(vec![updated])
        .with_message(CmdMessage::success(
            labels.t("admin_updated", session.language),
        )))
}
