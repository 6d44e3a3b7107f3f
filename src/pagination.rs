/// Slice of an ordered result set starting at some offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_more: false,
        }
    }
}

/// Drops the first `offset` items and returns the whole remainder.
///
/// `capped` tells whether the input was cut short by a scan limit. An offset
/// past the end always yields an empty page with `has_more == false`.
pub fn paginate<T>(mut items: Vec<T>, offset: usize, capped: bool) -> Page<T> {
    if offset >= items.len() {
        return Page::empty();
    }

    items.drain(..offset);

    Page {
        items,
        has_more: capped,
    }
}
