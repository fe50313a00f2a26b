use bikestats::core::pager::{PAGE_SIZE, Pager};
use bikestats::models::trip::Trip;

mod common;
use common::numbered_trips;

/// Drain the pager and return every page plus the concatenation.
fn drain(trips: &[Trip]) -> (Vec<usize>, Vec<Trip>) {
    let mut pager = Pager::new();
    let mut sizes = Vec::new();
    let mut all = Vec::new();

    loop {
        let page = pager.next_page(trips);
        if page.is_empty() {
            break;
        }
        sizes.push(page.len());
        all.extend_from_slice(page);
    }

    (sizes, all)
}

#[test]
fn test_pages_reconstruct_the_table_exactly() {
    // boundaries around the page size of 5
    for n in [0usize, 1, 4, 5, 6, 12] {
        let trips = numbered_trips(n);
        let (sizes, all) = drain(&trips);

        assert_eq!(all, trips, "size {}", n);
        assert!(sizes.iter().all(|&s| s <= PAGE_SIZE), "size {}", n);
        // only the last page may be short
        if let Some((_, rest)) = sizes.split_last() {
            assert!(rest.iter().all(|&s| s == PAGE_SIZE), "size {}", n);
        }
    }
}

#[test]
fn test_exhausted_pager_keeps_returning_empty_pages() {
    let trips = numbered_trips(4);
    let mut pager = Pager::new();

    assert_eq!(pager.next_page(&trips).len(), 4);
    assert!(pager.next_page(&trips).is_empty());
    assert!(pager.next_page(&trips).is_empty());
}

#[test]
fn test_offset_advances_by_page_size() {
    let trips = numbered_trips(12);
    let mut pager = Pager::new();

    assert_eq!(pager.offset(), 0);
    let first = pager.next_page(&trips);
    assert_eq!(first.len(), 5);
    assert_eq!(first[0].start_station, "Station 0");
    assert_eq!(pager.offset(), 5);

    let second = pager.next_page(&trips);
    assert_eq!(second[0].start_station, "Station 5");
    assert_eq!(pager.offset(), 10);
}
