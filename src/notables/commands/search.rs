use crate::commands::{require_admin, CmdResult};
use crate::error::Result;
use crate::i18n::resolve;
use crate::model::Personality;
use crate::session::Session;
use crate::store::DataStore;

/// Admin list: names containing `term` (case-insensitive) in the session language, sorted by name.
pub fn run<S: DataStore>(store: &S, session: &Session, term: &str) -> Result<CmdResult> {
    require_admin(session)?;
    let language = session.language;
    let term_lower = term.to_lowercase();

    let mut matches: Vec<(String, &Personality)> = store
        .all()
        .iter()
        .filter_map(|p| {
            let name = resolve(&p.name, language).to_lowercase();
            name.contains(&term_lower).then_some((name, p))
        })
        .collect();

    matches.sort_by(|(a, _), (b, _)| a.cmp(b));

    let listed = matches.into_iter().map(|(_, p)| p.clone()).collect();
    Ok(CmdResult::default().with_listed(listed))
}
