//! URL fragment extraction.
//!
//! The fragment is used verbatim as a modal id, exactly as `location.hash`
//! reports it minus the `#`. No percent-decoding happens here.

use std::fmt;

use url::Url;

use crate::error::{ModalError, Result};

/// Fragment identifier of the page URL, without the leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Build from a `location.hash` style value (`""` or `"#..."`).
    pub fn from_hash(hash: &str) -> Self {
        Self(hash.strip_prefix('#').unwrap_or(hash).to_string())
    }

    /// Take the fragment of a full URL. No `#`, or a bare `#`, gives an
    /// empty fragment.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|e| ModalError::InvalidUrl { url: url.to_string(), message: e.to_string() })?;
        Ok(Self(parsed.fragment().unwrap_or_default().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hash() {
        assert_eq!(Fragment::from_hash("#settings").as_str(), "settings");
        assert!(Fragment::from_hash("").is_empty());
        assert!(Fragment::from_hash("#").is_empty());
    }

    #[test]
    fn test_from_hash_strips_one_marker() {
        assert_eq!(Fragment::from_hash("##x").as_str(), "#x");
        assert_eq!(Fragment::from_hash("plain").as_str(), "plain");
    }

    #[test]
    fn test_from_url() {
        let fragment = Fragment::from_url("https://brew.example/recipes#new-recipe").expect("url");
        assert_eq!(fragment.as_str(), "new-recipe");
    }

    #[test]
    fn test_from_url_without_fragment() {
        assert!(Fragment::from_url("https://brew.example/recipes").expect("url").is_empty());
        assert!(Fragment::from_url("https://brew.example/recipes#").expect("url").is_empty());
    }

    #[test]
    fn test_from_url_keeps_query_out() {
        let fragment = Fragment::from_url("https://brew.example/?lang=fr#login").expect("url");
        assert_eq!(fragment.to_string(), "login");
    }

    #[test]
    fn test_from_url_invalid() {
        let err = Fragment::from_url("not a url").unwrap_err();
        assert!(matches!(err, ModalError::InvalidUrl { .. }));
    }
}
