use crate::commands::{require_admin, CmdMessage, CmdResult};
use crate::error::Result;
use crate::i18n::Labels;
use crate::session::Session;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(
    store: &mut S,
    session: &Session,
    id: u32,
    labels: &Labels,
) -> Result<CmdResult> {
    require_admin(session)?;
    let removed = store.delete(id)?;
    info!(session = %session.id(), id, "personality deleted");

    Ok(CmdResult::default()
        .with_affected(vec![removed])
        .with_message(CmdMessage::success(
            labels.t("admin_deleted", session.language),
        )))
}
