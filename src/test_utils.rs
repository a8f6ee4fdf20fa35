use crate::{PageWindow, WindowConfig};

/// `[0, 1, ..., len - 1]`, so every item equals its index in the source.
pub fn numbers(len: usize) -> Vec<usize> {
    (0..len).collect()
}

pub fn numbers_window(len: usize, items_per_page: usize, window_width: usize) -> PageWindow<Vec<usize>> {
    PageWindow::new(numbers(len), WindowConfig::new(items_per_page, window_width)).unwrap()
}

/// Asserts the visible items are exactly the source items in `expected`.
#[track_caller]
pub fn assert_shows(window: &PageWindow<Vec<usize>>, expected: std::ops::Range<usize>) {
    let expected: Vec<_> = expected.collect();
    assert_eq!(window.data(), expected.as_slice());
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub title: String,
}

pub fn records(len: u32) -> Vec<Record> {
    (1..=len)
        .map(|id| Record {
            id,
            title: format!("record #{id}"),
        })
        .collect()
}
