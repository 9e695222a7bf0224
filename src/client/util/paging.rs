use crate::model::launch::LaunchDto;

pub const PAGE_SIZE: usize = 10;

/// Search term and current page of the launches table.
///
/// Pages are 1-based. Changing the term always snaps back to the first page
/// so a narrowed result set is never opened on an empty page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListControls {
    term: String,
    page: usize,
}

impl Default for ListControls {
    fn default() -> Self {
        Self {
            term: String::new(),
            page: 1,
        }
    }
}

impl ListControls {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_term(&mut self, term: String) {
        self.term = term;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// Case-insensitive substring filter over launch names.
///
/// An empty term matches everything, preserving catalog order.
pub fn filter_launches<'a>(launches: &'a [LaunchDto], term: &str) -> Vec<&'a LaunchDto> {
    let needle = term.to_lowercase();
    launches
        .iter()
        .filter(|launch| launch.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn page_count(filtered: usize, page_size: usize) -> usize {
    filtered.div_ceil(page_size)
}

/// Returns the items visible on `page`, clamping out-of-range pages to the
/// last populated one.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if items.is_empty() {
        return &[];
    }

    let page = page.clamp(1, page_count(items.len(), page_size));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());

    &items[start..end]
}
