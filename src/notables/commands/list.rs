use crate::commands::{CmdResult, PageInfo};
use crate::error::Result;
use crate::filter::{filter, FilterSpec};
use crate::paginate::{paginate, PAGE_SIZE};
use crate::store::DataStore;

/// One grid page of the personalities matching `spec`.
pub fn run<S: DataStore>(store: &S, spec: &FilterSpec, page: usize) -> Result<CmdResult> {
    let matching = filter(store.all(), spec);
    let slice = paginate(&matching, PAGE_SIZE, page);

    let listed = slice.items.iter().map(|p| (*p).clone()).collect();
    let info = PageInfo {
        page,
        total_pages: slice.total_pages,
        total_matches: matching.len(),
    };

    Ok(CmdResult::default().with_listed(listed).with_page(info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterField;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_first_page_in_collection_order() {
        let store = StoreFixture::new().with_people(45).store;
        let result = run(&store, &FilterSpec::new(), 1).unwrap();

        assert_eq!(result.listed.len(), 20);
        assert_eq!(result.listed[0].id, 1);
        assert_eq!(result.listed[19].id, 20);
        let info = result.page.unwrap();
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total_matches, 45);
        assert!(!info.has_previous());
        assert!(info.has_next());
    }

    #[test]
    fn pages_walk_the_filtered_sequence() {
        let store = StoreFixture::new()
            .with_people(3)
            .with_deceased("Gone", 1900, 1980)
            .with_deceased("Also gone", 1910, 1990)
            .store;
        let mut spec = FilterSpec::new();
        spec.set(FilterField::Status, "deceased").unwrap();

        let result = run(&store, &spec, 1).unwrap();
        let ids: Vec<u32> = result.listed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 5]);
        assert_eq!(result.page.unwrap().total_pages, 1);
    }

    #[test]
    fn no_matches_means_no_pages() {
        let store = StoreFixture::new().with_people(5).store;
        let mut spec = FilterSpec::new();
        spec.set(FilterField::DeathYear, "19").unwrap();

        let result = run(&store, &spec, 1).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.page.unwrap().total_pages, 0);
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let store = StoreFixture::new().with_people(5).store;
        let result = run(&store, &FilterSpec::new(), 4).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.page.unwrap().total_pages, 1);
    }
}
