//! Category paging state
//!
//! The viewer walks an ordered category list with wrap-around previous and
//! next moves. [`CategoryPager`] is that navigation state as a pure value
//! type: transitions are modular arithmetic over the category count, and an
//! empty list is representable without any move panicking.

/// Wrap-around pager over an ordered category list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPager {
    categories: Vec<String>,
    index: usize,
}

impl CategoryPager {
    /// Create a pager positioned on the first category
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            index: 0,
        }
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether there are no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The current category, if any
    pub fn current(&self) -> Option<&str> {
        self.categories.get(self.index).map(String::as_str)
    }

    /// Zero-based index of the current category
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based position and total count, for "Category i of n" labels
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.categories.len())
    }

    /// Jump to a zero-based index, wrapping modulo the category count
    pub fn set_index(&mut self, index: usize) {
        if !self.categories.is_empty() {
            self.index = index % self.categories.len();
        }
    }

    /// Jump to the named category; returns false if it is not present
    pub fn select(&mut self, category: &str) -> bool {
        match self.categories.iter().position(|c| c == category) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Advance to the next category, wrapping past the end
    pub fn next(&mut self) -> Option<&str> {
        if self.categories.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.categories.len();
        self.current()
    }

    /// Step back to the previous category, wrapping past the start
    pub fn prev(&mut self) -> Option<&str> {
        if self.categories.is_empty() {
            return None;
        }
        self.index = (self.index + self.categories.len() - 1) % self.categories.len();
        self.current()
    }

    /// Apply a signed offset, wrapping in either direction
    pub fn step(&mut self, offset: i64) -> Option<&str> {
        if self.categories.is_empty() {
            return None;
        }
        let len = self.categories.len() as i64;
        let shifted = (self.index as i64 + offset).rem_euclid(len);
        self.index = shifted as usize;
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager() -> CategoryPager {
        CategoryPager::new(vec![
            "Buybacks".to_string(),
            "Filings".to_string(),
            "Production".to_string(),
        ])
    }

    #[test]
    fn starts_on_the_first_category() {
        let pager = pager();
        assert_eq!(pager.current(), Some("Buybacks"));
        assert_eq!(pager.position(), (1, 3));
    }

    #[test]
    fn next_wraps_past_the_end() {
        let mut pager = pager();
        assert_eq!(pager.next(), Some("Filings"));
        assert_eq!(pager.next(), Some("Production"));
        assert_eq!(pager.next(), Some("Buybacks"));
    }

    #[test]
    fn prev_wraps_past_the_start() {
        let mut pager = pager();
        assert_eq!(pager.prev(), Some("Production"));
        assert_eq!(pager.prev(), Some("Filings"));
    }

    #[test]
    fn step_handles_signed_offsets() {
        let mut pager = pager();
        assert_eq!(pager.step(-1), Some("Production"));
        assert_eq!(pager.step(4), Some("Buybacks"));
        assert_eq!(pager.step(0), Some("Buybacks"));
    }

    #[test]
    fn select_by_name() {
        let mut pager = pager();
        assert!(pager.select("Production"));
        assert_eq!(pager.position(), (3, 3));
        assert!(!pager.select("Absent"));
        assert_eq!(pager.current(), Some("Production"));
    }

    #[test]
    fn set_index_wraps() {
        let mut pager = pager();
        pager.set_index(4);
        assert_eq!(pager.current(), Some("Filings"));
    }

    #[test]
    fn empty_pager_is_inert() {
        let mut pager = CategoryPager::new(Vec::new());
        assert!(pager.is_empty());
        assert_eq!(pager.current(), None);
        assert_eq!(pager.next(), None);
        assert_eq!(pager.prev(), None);
        assert_eq!(pager.step(-2), None);
        pager.set_index(5);
        assert_eq!(pager.index(), 0);
    }
}
