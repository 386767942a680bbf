use crate::i18n::Labels;
use crate::model::Language;
use crate::resolve::{resolve_by_id, DetailView};
use crate::store::DataStore;

/// Detail for `id`, looked up in the whole collection regardless of any active filter.
pub fn run<'a, S: DataStore>(
    store: &'a S,
    id: u32,
    language: Language,
    labels: &Labels,
) -> Option<DetailView<'a>> {
    let people = store.all();
    resolve_by_id(people, id).map(|person| DetailView::build(people, person, language, labels))
}
