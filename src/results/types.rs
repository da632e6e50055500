//! Result type definitions

/// A resolved query paired with its search URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// The query string
    pub query: String,
    /// Search URL, or the bare query for engines without a URL shape
    pub url: String,
}

impl ResultRecord {
    pub fn new(query: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            url: url.into(),
        }
    }
}
