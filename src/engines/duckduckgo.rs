//! DuckDuckGo search engine implementation

use super::traits::*;

/// DuckDuckGo web search engine
pub struct DuckDuckGo {
    base_url: String,
}

impl DuckDuckGo {
    pub fn new() -> Self {
        Self {
            base_url: "https://duckduckgo.com/".to_string(),
        }
    }
}

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for DuckDuckGo {
    fn name(&self) -> &str {
        "ddg"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duckduckgo_url() {
        let ddg = DuckDuckGo::new();
        assert_eq!(ddg.search_url("a b"), "https://duckduckgo.com/?q=a%20b");
        assert_eq!(ddg.label(), "DDG");
    }
}
