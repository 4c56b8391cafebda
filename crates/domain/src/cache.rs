use std::cell::RefCell;

/// Catalog cache that is filled at most once.
///
/// The cache is owned by a single writer. Once it holds entries, they are never replaced.
#[derive(Debug)]
pub struct Cache<T> {
    entries: RefCell<Vec<T>>,
}

impl<T: Clone> Cache<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn get(&self) -> Option<Vec<T>> {
        let entries = self.entries.borrow();
        if entries.is_empty() {
            None
        } else {
            Some(entries.clone())
        }
    }

    /// Commit the entries unless the cache is already filled and return the cached entries.
    pub fn fill(&self, entries: Vec<T>) -> Vec<T> {
        let mut cached = self.entries.borrow_mut();
        if cached.is_empty() {
            *cached = entries;
        }
        cached.clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<T: Clone> Default for Cache<T> {
    fn default() -> Self {
        Self::new()
    }
}
