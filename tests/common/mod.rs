#![allow(dead_code)]

use async_trait::async_trait;
use gist_stars::error::Result;
use gist_stars::github::GraphqlTransport;
use gist_stars::types::GraphqlRequest;
use serde_json::{json, Value};
use std::sync::Mutex;

type Reply = Box<dyn Fn() -> Result<Value> + Send + Sync>;

/// Transport that answers every request with the same canned reply and
/// remembers what it was asked.
pub struct CannedTransport {
    reply: Reply,
    pub requests: Mutex<Vec<GraphqlRequest>>,
}

impl CannedTransport {
    pub fn json(body: Value) -> Self {
        Self::with(move || Ok(body.clone()))
    }

    pub fn with<F>(reply: F) -> Self
    where
        F: Fn() -> Result<Value> + Send + Sync + 'static,
    {
        CannedTransport {
            reply: Box::new(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GraphqlTransport for CannedTransport {
    async fn post_graphql(&self, request: &GraphqlRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());
        (self.reply)()
    }
}

pub fn gist_body(stargazer_count: u64, url: &str, name: &str, login: &str) -> Value {
    json!({
        "data": {
            "viewer": {
                "gist": {
                    "stargazerCount": stargazer_count,
                    "url": url,
                    "name": name,
                    "owner": { "login": login }
                }
            }
        }
    })
}

pub fn null_gist_body() -> Value {
    json!({ "data": { "viewer": { "gist": null } } })
}
