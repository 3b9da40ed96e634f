//! Lazy paginated listing.

use super::total_line;
use crate::models::Record;
use indexmap::map::Values;

/// Iterator over page-sized listing blocks.
///
/// Yields one block per `page_size` records, then a final
/// `"Total: N contacts."` block, then ends.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: Values<'a, String, Record>,
    total: usize,
    page_size: usize,
    finished: bool,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: Values<'a, String, Record>, page_size: usize) -> Self {
        Self {
            total: records.len(),
            records,
            page_size: page_size.max(1),
            finished: false,
        }
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let page: String = self
            .records
            .by_ref()
            .take(self.page_size)
            .map(Record::to_string)
            .collect();

        if page.is_empty() {
            self.finished = true;
            return Some(total_line(self.total));
        }
        Some(page)
    }
}
