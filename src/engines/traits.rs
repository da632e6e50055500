//! Engine traits and types

/// A search provider whose result page can be addressed by a URL.
///
/// Engines only build URLs; nothing here performs a request.
pub trait Engine: Send + Sync {
    /// Canonical engine name, as accepted on the command line
    fn name(&self) -> &str;

    /// Search endpoint, without query string
    fn base_url(&self) -> &str;

    /// Name of the query-string parameter carrying the search terms
    fn query_param(&self) -> &str {
        "q"
    }

    /// Label printed in front of each query on the console
    fn label(&self) -> String {
        self.name().to_uppercase()
    }

    /// Build the result-page URL for a query
    fn search_url(&self, query: &str) -> String {
        format!(
            "{}?{}={}",
            self.base_url(),
            self.query_param(),
            urlencoding::encode(query)
        )
    }
}

