//! Page - 1-based offset pagination over an in-memory result list

/// A page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    number: usize,
    /// Items per page (at least 1)
    size: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self { number: 1, size: 10 }
    }
}

impl Page {
    pub fn new(number: usize, size: usize) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }

    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        self.number.saturating_sub(1).saturating_mul(self.size)
    }

    /// Number of pages needed for `total` items
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.size)
    }

    /// Slice out this page; pages past the end are empty
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset();
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.size).min(items.len());
        &items[start..end]
    }
}
