use crate::badge::RenderedBadge;
use crate::error::{GistStarsError, Result};
use crate::github::{request_graphql, GraphqlTransport};
use crate::text::metric;
use crate::types::GistStarsResponse;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

pub const GIST_STARS_QUERY: &str = r#"
query ($gistId: String!) {
  viewer {
    gist(name: $gistId) {
      stargazerCount
      url
      name
      owner {
        login
      }
    }
  }
}
"#;

pub const GIST_NOT_FOUND: &str = "gist not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GistStarsParams {
    pub gist_id: String,
}

/// Fields pulled out of a resolved gist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistStars {
    pub stargazer_count: u64,
    pub url: String,
    pub stargazers: String,
}

/// Stargazer badge for a gist owned by the authenticated viewer.
pub struct GistStarsHandler {
    transport: Arc<dyn GraphqlTransport>,
}

impl GistStarsHandler {
    pub fn new(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self { transport }
    }

    pub async fn fetch(&self, gist_id: &str) -> Result<GistStarsResponse> {
        debug!("Fetching stargazers for gist {}", gist_id);
        request_graphql(
            self.transport.as_ref(),
            GIST_STARS_QUERY,
            json!({ "gistId": gist_id }),
        )
        .await
    }

    pub fn transform(response: GistStarsResponse) -> Result<GistStars> {
        let gist = response
            .data
            .viewer
            .gist
            .ok_or_else(|| GistStarsError::NotFound(GIST_NOT_FOUND.to_string()))?;

        let stargazers = format!(
            "https://gist.github.com/{}/{}/stargazers",
            gist.owner.login, gist.name
        );

        Ok(GistStars {
            stargazer_count: gist.stargazer_count,
            url: gist.url,
            stargazers,
        })
    }

    pub fn render(stargazer_count: u64, url: &str, stargazers: &str) -> RenderedBadge {
        let count = i64::try_from(stargazer_count).unwrap_or(i64::MAX);
        RenderedBadge {
            message: metric(count),
            link: [url.to_string(), stargazers.to_string()],
        }
    }

    pub async fn handle(&self, params: &GistStarsParams) -> Result<RenderedBadge> {
        let response = self.fetch(&params.gist_id).await?;
        let stars = Self::transform(response)?;
        info!("Gist {} has {} stargazers", params.gist_id, stars.stargazer_count);
        Ok(Self::render(stars.stargazer_count, &stars.url, &stars.stargazers))
    }
}
