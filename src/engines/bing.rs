//! Bing search engine implementation

use super::traits::*;

/// Bing web search engine
pub struct Bing {
    base_url: String,
}

impl Bing {
    pub fn new() -> Self {
        Self {
            base_url: "https://www.bing.com/search".to_string(),
        }
    }
}

impl Default for Bing {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Bing {
    fn name(&self) -> &str {
        "bing"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bing_url() {
        let url = Bing::new().search_url("site:*.acme.com");
        assert_eq!(url, "https://www.bing.com/search?q=site%3A%2A.acme.com");
    }
}
