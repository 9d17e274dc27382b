use serde::{Deserialize, Serialize};

// GraphQL request/response envelopes
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

// viewer.gist query shape; `gist` is the only nullable level
#[derive(Debug, Deserialize)]
pub struct GistStarsResponse {
    pub data: GistStarsData,
}

#[derive(Debug, Deserialize)]
pub struct GistStarsData {
    pub viewer: Viewer,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub gist: Option<Gist>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gist {
    pub stargazer_count: u64,
    pub url: String,
    pub name: String,
    pub owner: GistOwner,
}

#[derive(Debug, Deserialize)]
pub struct GistOwner {
    pub login: String,
}
