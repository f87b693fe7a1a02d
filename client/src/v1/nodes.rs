use crate::error::{self, Error};
use crate::http::HttpClient;
use crate::models::Node;
use snafu::ensure;

/// Client for the `/v1/nodes` resource. Nodes are registered out of band,
/// the API only reads them.
#[derive(Debug, Clone)]
pub struct NodesClient {
    http: HttpClient,
}

impl NodesClient {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Node>, Error> {
        self.http.get_json("/v1/nodes").await
    }

    pub async fn get(&self, id: &str) -> Result<Node, Error> {
        ensure!(!id.is_empty(), error::EmptyIdSnafu { resource: "node" });
        self.http.get_json(&format!("/v1/nodes/{id}")).await
    }
}
