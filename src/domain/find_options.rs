// src/domain/find_options.rs

/// Paging and ordering applied by list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub limit: Option<usize>,
    pub offset: usize,
    pub sort_by: Option<SortKey>,
    pub descending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    CreatedAt,
}

impl FindOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn sorted_by(mut self, key: SortKey, descending: bool) -> Self {
        self.sort_by = Some(key);
        self.descending = descending;
        self
    }

    /// Applies offset and limit to an already ordered list.
    pub fn page<T>(&self, items: Vec<T>) -> Vec<T> {
        let rest = items.into_iter().skip(self.offset);
        match self.limit {
            Some(limit) => rest.take(limit).collect(),
            None => rest.collect(),
        }
    }
}
