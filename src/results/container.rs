//! Query container for collecting and deduplicating generated queries

use std::collections::HashSet;
use tracing::debug;

/// Insertion-ordered set of queries.
///
/// The first occurrence of each distinct query wins; later duplicates are
/// dropped without changing the relative order of the survivors.
#[derive(Debug, Clone, Default)]
pub struct QueryContainer {
    /// Membership index
    seen: HashSet<String>,
    /// Queries in first-seen order
    queries: Vec<String>,
    /// Number of rejected duplicates
    duplicates: usize,
}

impl QueryContainer {
    /// Create a new empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query; returns false if it was already present
    pub fn add_query(&mut self, query: String) -> bool {
        if self.seen.contains(&query) {
            debug!("Dropping duplicate query: {}", query);
            self.duplicates += 1;
            return false;
        }

        self.seen.insert(query.clone());
        self.queries.push(query);
        true
    }

    /// Add multiple queries
    pub fn extend_queries<I>(&mut self, queries: I)
    where
        I: IntoIterator<Item = String>,
    {
        for query in queries {
            self.add_query(query);
        }
    }

    /// Consume the container, returning the surviving queries
    pub fn into_queries(self) -> Vec<String> {
        self.queries
    }

    /// Number of distinct queries
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Number of duplicates dropped so far
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }
}

/// Order-preserving deduplication of a sequence of strings
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut container = QueryContainer::new();
    container.extend_queries(items);
    container.into_queries()
}
