//! Query string decoding.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::collections::HashMap;
use std::convert::Infallible;

/// Decoded query parameters of one request.
///
/// When a name appears more than once, the first occurrence is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    /// Decode an `application/x-www-form-urlencoded` query string.
    pub fn parse(query: &str) -> Self {
        let mut values = HashMap::new();
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            values.entry(name.into_owned()).or_insert_with(|| value.into_owned());
        }
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::parse(parts.uri.query().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_decodes_percent_and_plus() {
        let params = QueryParams::parse("texto=Hola+que%20tal&n=%C3%B1");
        assert_eq!(params.get("texto"), Some("Hola que tal"));
        assert_eq!(params.get("n"), Some("ñ"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = QueryParams::parse("code=1&code=2");
        assert_eq!(params.get("code"), Some("1"));
    }

    #[test]
    fn test_bare_key_is_empty_value() {
        let params = QueryParams::parse("flag");
        assert_eq!(params.get("flag"), Some(""));
    }

    #[tokio::test]
    async fn test_extractor_without_query() {
        let (mut parts, _) = Request::builder()
            .uri("/params/string")
            .body(())
            .unwrap()
            .into_parts();
        let params = QueryParams::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(params.is_empty());
    }
}
