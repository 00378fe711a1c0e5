//! Lazy, page-at-a-time rendering of an address book.

use crate::models::Record;
use std::iter::FusedIterator;

/// Iterator over pages of rendered listing lines.
///
/// Created by [`AddressBook::iterator`](super::AddressBook::iterator). It
/// borrows the book's records as they were when it was created; the book
/// cannot be modified while it is alive. Each page is rendered only when it
/// is requested. Single pass: once exhausted it keeps returning `None`.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: &'a [Record],
    page_size: usize,
    cursor: usize,
}

impl<'a> Pages<'a> {
    /// A `page_size` of 0 is treated as 1.
    pub(crate) fn new(records: &'a [Record], page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
            cursor: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Iterator for Pages<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.records.len() {
            return None;
        }

        let end = (self.cursor + self.page_size).min(self.records.len());
        let page = self.records[self.cursor..end]
            .iter()
            .map(Record::to_string)
            .collect();
        self.cursor = end;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.records.len() - self.cursor).div_ceil(self.page_size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
