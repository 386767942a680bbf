use crate::commands::{require_admin, validate, CmdMessage, CmdResult};
use crate::error::Result;
use crate::i18n::Labels;
use crate::model::PersonalityDraft;
use crate::session::Session;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(
    store: &mut S,
    session: &Session,
    draft: PersonalityDraft,
    current_year: i32,
    labels: &Labels,
) -> Result<CmdResult> {
    require_admin(session)?;
    validate::check(&draft, current_year)?;

    let person = store.insert(draft)?;
    info!(session = %session.id(), id = person.id, "personality added");

    Ok(CmdResult::default()
        .with_affected(vec![person])
        .with_message(CmdMessage::success(
            labels.t("admin_added", session.language),
        )))
}
