//! Google search engine implementation

use super::traits::*;

/// Google web search engine
pub struct Google {
    base_url: String,
}

impl Google {
    pub fn new() -> Self {
        Self {
            base_url: "https://www.google.com/search".to_string(),
        }
    }
}

impl Default for Google {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Google {
    fn name(&self) -> &str {
        "google"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_url() {
        let google = Google::new();
        let url = google.search_url("foo bar");

        assert!(url.starts_with("https://www.google.com/search?"));
        assert_eq!(url, "https://www.google.com/search?q=foo%20bar");
    }

    #[test]
    fn test_google_encodes_operators() {
        let url = Google::new().search_url("\"Acme\" site:acme.com");
        assert_eq!(
            url,
            "https://www.google.com/search?q=%22Acme%22%20site%3Aacme.com"
        );
    }
}
