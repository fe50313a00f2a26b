//! Fixed-size pagination over the filtered snapshot.

use crate::models::trip::Trip;

pub const PAGE_SIZE: usize = 5;

/// Cursor for the raw-row viewer. Each [`Pager::next_page`] call returns up
/// to [`PAGE_SIZE`] records and advances the offset unconditionally; an
/// exhausted table keeps returning empty pages rather than erroring.
#[derive(Debug, Default)]
pub struct Pager {
    offset: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn next_page<'a>(&mut self, trips: &'a [Trip]) -> &'a [Trip] {
        let start = self.offset.min(trips.len());
        let end = (self.offset + PAGE_SIZE).min(trips.len());
        self.offset += PAGE_SIZE;
        &trips[start..end]
    }
}
