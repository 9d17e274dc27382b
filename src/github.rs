use crate::error::{GistStarsError, Result};
use crate::types::{GraphqlError, GraphqlRequest};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Authenticated GraphQL transport.
///
/// Implementations own token handling, headers and HTTP-level error
/// translation, and return the raw JSON body.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn post_graphql(&self, request: &GraphqlRequest) -> Result<serde_json::Value>;
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    token: String,
    endpoint: Url,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        let endpoint = Url::parse(GRAPHQL_URL)
            .map_err(|e| GistStarsError::EnvError(format!("Invalid GraphQL URL: {}", e)))?;
        Self::with_endpoint(token, endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_endpoint(token: String, endpoint: Url, timeout: Duration) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(GistStarsError::EnvError("GitHub token is empty".to_string()));
        }

        let client = Client::builder()
            .user_agent(concat!("gist-stars/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(GitHubClient { client, token, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for GitHubClient {
    async fn post_graphql(&self, request: &GraphqlRequest) -> Result<serde_json::Value> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Accept", "application/vnd.github.v4+json")
            .header("Authorization", format!("bearer {}", self.token))
            .json(request)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|e| {
                    GistStarsError::InvalidResponse(format!("Response body is not JSON: {}", e))
                })
            }
            StatusCode::UNAUTHORIZED => {
                Err(GistStarsError::AuthError("GitHub rejected the token".to_string()))
            }
            StatusCode::NOT_FOUND => Err(GistStarsError::NotFound("not found".to_string())),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                warn!("GraphQL request failed with status {}", status);
                Err(GistStarsError::Inaccessible(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

/// Send a query and validate the response body against `T`.
///
/// A non-empty `errors` array wins over `data` and its first entry decides the
/// kind: `NOT_FOUND` becomes [`GistStarsError::NotFound`], anything else
/// [`GistStarsError::InvalidResponse`].
pub async fn request_graphql<T: DeserializeOwned>(
    transport: &dyn GraphqlTransport,
    query: &str,
    variables: serde_json::Value,
) -> Result<T> {
    let request = GraphqlRequest {
        query: query.to_string(),
        variables,
    };

    let body = transport.post_graphql(&request).await?;
    check_graphql_errors(&body)?;

    serde_json::from_value(body).map_err(|e| GistStarsError::SchemaValidation(e.to_string()))
}

fn check_graphql_errors(body: &serde_json::Value) -> Result<()> {
    let errors: Vec<GraphqlError> = match body.get("errors") {
        Some(value) if !value.is_null() => serde_json::from_value(value.clone())
            .map_err(|e| GistStarsError::InvalidResponse(format!("Malformed errors array: {}", e)))?,
        _ => return Ok(()),
    };

    let Some(first) = errors.first() else {
        return Ok(());
    };

    if first.error_type.as_deref() == Some("NOT_FOUND") {
        return Err(GistStarsError::NotFound(first.message.clone()));
    }

    warn!("GraphQL returned {} error(s): {}", errors.len(), first.message);
    Err(GistStarsError::InvalidResponse(first.message.clone()))
}
