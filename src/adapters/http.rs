use crate::core::{
    CatalogProvider, RecipeDetails, RecipeDetailsProvider, RecipeRequirement, Result,
    SubstituteItem, SubstituteProvider,
};
use crate::utils::error::PantryError;
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Remote document store exposing `GET {endpoint}/recipes` and
/// `GET {endpoint}/substitutes`, each returning a JSON array, plus
/// `GET {endpoint}/recipes/{id}` for a single recipe page.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    endpoint: String,
    client: Client,
    headers: HeaderMap,
}

impl HttpCatalog {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_options(endpoint, None, &HashMap::new())
    }

    pub fn with_options(
        endpoint: &str,
        timeout_seconds: Option<u64>,
        headers: &HashMap<String, String>,
    ) -> Result<Self> {
        validate_url("source.endpoint", endpoint)?;

        let mut builder = Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let mut header_map = HeaderMap::new();
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                PantryError::InvalidConfigValueError {
                    field: "source.headers".to_string(),
                    value: key.clone(),
                    reason: e.to_string(),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                PantryError::InvalidConfigValueError {
                    field: format!("source.headers.{}", key),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            header_map.insert(name, value);
        }

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: builder.build()?,
            headers: header_map,
        })
    }

    /// `{endpoint}/{segments...}`，每段都會做路徑編碼
    fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let invalid = |reason: String| PantryError::InvalidConfigValueError {
            field: "source.endpoint".to_string(),
            value: self.endpoint.clone(),
            reason,
        };

        let mut url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot have path segments".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, url: Url, query: &[(&str, &str)]) -> Result<Response> {
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(url)
            .query(query)
            .headers(self.headers.clone())
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        Ok(response)
    }

    fn ensure_success(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            return Err(PantryError::UpstreamStatusError {
                url: response.url().to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, collection: &str) -> Result<T> {
        let response = self.send(self.url_for(&[collection])?, &[]).await?;
        Ok(Self::ensure_success(response)?.json().await?)
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
    async fn fetch_all(&self) -> Result<Vec<RecipeRequirement>> {
        let recipes: Vec<RecipeRequirement> = self.get_json("recipes").await?;
        tracing::debug!("Document store returned {} recipes", recipes.len());
        Ok(recipes)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

#[async_trait]
impl SubstituteProvider for HttpCatalog {
    async fn fetch_substitutes(&self) -> Result<Vec<SubstituteItem>> {
        let items: Vec<SubstituteItem> = self.get_json("substitutes").await?;
        tracing::debug!("Fetched {} substitutes", items.len());
        Ok(items)
    }
}

#[async_trait]
impl RecipeDetailsProvider for HttpCatalog {
    async fn find_by_id(&self, id: &str) -> Result<Option<RecipeDetails>> {
        let response = self.send(self.url_for(&["recipes", id])?, &[]).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::ensure_success(response)?.json().await?))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<RecipeDetails>> {
        let response = self.send(self.url_for(&["recipes"])?, &[("name", name)]).await?;
        let candidates: Vec<RecipeDetails> = Self::ensure_success(response)?.json().await?;
        // 伺服器可能忽略查詢參數，名稱再比對一次
        Ok(candidates.into_iter().find(|r| r.name == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_recipes() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/recipes");
            then.status(200).json_body(serde_json::json!([
                {"id": "recipe_2", "name": "Haleem", "category": "Dinner",
                 "imageUrl": "https://i.imgur.com/wEBHkJT.jpeg",
                 "requiredIngredients": ["cracked wheat", "beef"]}
            ]));
        });

        let catalog = HttpCatalog::new(&server.url("/")).unwrap();
        let recipes = catalog.fetch_all().await.unwrap();

        mock.assert();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Haleem");
        assert_eq!(recipes[0].required_ingredients, vec!["cracked wheat", "beef"]);
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/recipes");
            then.status(500);
        });

        let catalog = HttpCatalog::new(&server.base_url()).unwrap();
        let err = catalog.fetch_all().await.unwrap_err();

        mock.assert();
        assert!(matches!(err, PantryError::UpstreamStatusError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_sends_configured_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/substitutes")
                .header("authorization", "Bearer secret-token");
            then.status(200).json_body(serde_json::json!([
                {"name": "Egg", "amount": "1", "substitute": ["1/4 cup applesauce"]}
            ]));
        });

        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), "Bearer secret-token".to_string());
        let catalog = HttpCatalog::with_options(&server.base_url(), Some(5), &headers).unwrap();
        let items = catalog.fetch_substitutes().await.unwrap();

        mock.assert();
        assert_eq!(items[0].substitutes, vec!["1/4 cup applesauce"]);
    }

    #[tokio::test]
    async fn test_find_details_by_id() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/recipes/recipe_2");
            then.status(200).json_body(serde_json::json!({
                "name": "Haleem",
                "imageUrl": "https://i.imgur.com/wEBHkJT.jpeg",
                "ingredients": ["1 cup cracked wheat", "500 g beef"],
                "instructions": ["Soak the wheat overnight", "Simmer with the beef"]
            }));
        });
        let missing = server.mock(|when, then| {
            when.method(GET).path("/v1/recipes/absent");
            then.status(404);
        });

        let catalog = HttpCatalog::new(&server.url("/v1")).unwrap();
        let details = catalog.find_by_id("recipe_2").await.unwrap().unwrap();
        assert_eq!(details.name, "Haleem");
        assert_eq!(details.instructions.len(), 2);
        assert!(catalog.find_by_id("absent").await.unwrap().is_none());

        mock.assert();
        missing.assert();
    }

    #[tokio::test]
    async fn test_find_details_by_exact_name() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/recipes").query_param("name", "Haleem");
            then.status(200).json_body(serde_json::json!([
                {"id": "recipe_9", "name": "haleem"},
                {"id": "recipe_2", "name": "Haleem", "instructions": ["Simmer"]}
            ]));
        });

        let catalog = HttpCatalog::new(&server.base_url()).unwrap();
        let details = catalog.find_by_name("Haleem").await.unwrap().unwrap();

        mock.assert();
        assert_eq!(details.id, "recipe_2");
        assert_eq!(details.instructions, vec!["Simmer"]);
    }

    #[tokio::test]
    async fn test_details_server_error_is_not_a_miss() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/recipes/recipe_1");
            then.status(503);
        });

        let catalog = HttpCatalog::new(&server.base_url()).unwrap();
        let err = catalog.find_by_id("recipe_1").await.unwrap_err();
        assert!(matches!(err, PantryError::UpstreamStatusError { status: 503, .. }));
    }

    #[test]
    fn test_url_for_encodes_segments() {
        let catalog = HttpCatalog::new("https://catalog.example.com/v1/").unwrap();
        let url = catalog.url_for(&["recipes", "a/b"]).unwrap();
        assert_eq!(url.as_str(), "https://catalog.example.com/v1/recipes/a%2Fb");
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        assert!(HttpCatalog::new("ftp://example.com").is_err());
        assert!(HttpCatalog::new("not a url").is_err());
    }
}
