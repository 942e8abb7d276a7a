use std::time::Duration;

use kaizen_model::Product;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Product not found")]
    NotFound,

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound)
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Read-only client for the catalog API
#[derive(Clone, Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client for `base_url`. A missing scheme defaults to
    /// `http://` and trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let base_url = Url::parse(&normalize_base_url(base_url.into()))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        info!("[CatalogClient] Using catalog API at {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Build an endpoint URL from path segments. Segments are
    /// percent-encoded, so slugs cannot escape their position.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                url::ParseError::RelativeUrlWithCannotBeABaseBase
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        debug!("[CatalogClient] GET {}", url);
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            status => {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ErrorEnvelope>(&body)
                    .map(|envelope| envelope.error.message)
                    .unwrap_or(body);
                Err(ClientError::Status {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// `GET /products`: active products, newest first.
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let url = self.endpoint(&["products"])?;
        self.get_json(url).await
    }

    /// `GET /products/slug/{slug}`
    pub async fn product_by_slug(&self, slug: &str) -> ClientResult<Product> {
        let url = self.endpoint(&["products", "slug", slug])?;
        self.get_json(url).await
    }
}

fn normalize_base_url(raw: String) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme = if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
    {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    if with_scheme != raw {
        warn!(
            "[CatalogClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    with_scheme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_scheme_and_loses_trailing_slash() {
        assert_eq!(
            normalize_base_url("localhost:3000/".to_string()),
            "http://localhost:3000"
        );
        assert_eq!(
            normalize_base_url(" https://shop.example/api// ".to_string()),
            "https://shop.example/api"
        );
    }

    #[test]
    fn endpoints_encode_slug() {
        let client = CatalogClient::new("shop.example/api/").unwrap();
        assert_eq!(client.base_url(), "http://shop.example/api");
        assert_eq!(
            client.endpoint(&["products"]).unwrap().as_str(),
            "http://shop.example/api/products"
        );
        assert_eq!(
            client
                .endpoint(&["products", "slug", "a/b c"])
                .unwrap()
                .as_str(),
            "http://shop.example/api/products/slug/a%2Fb%20c"
        );
    }

    #[test]
    fn root_base_url_has_no_double_slash() {
        let client = CatalogClient::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(
            client.endpoint(&["products"]).unwrap().as_str(),
            "http://127.0.0.1:3000/products"
        );
    }
}
