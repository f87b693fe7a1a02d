use crate::error::{self, Error};
use crate::http::HttpClient;
use crate::models::Rack;
use snafu::ensure;

/// Client for the `/v1/racks` resource.
#[derive(Debug, Clone)]
pub struct RacksClient {
    http: HttpClient,
}

impl RacksClient {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn single(id: &str) -> Result<String, Error> {
        ensure!(!id.is_empty(), error::EmptyIdSnafu { resource: "rack" });
        Ok(format!("/v1/racks/{id}"))
    }

    pub async fn list(&self) -> Result<Vec<Rack>, Error> {
        self.http.get_json("/v1/racks").await
    }

    pub async fn get(&self, id: &str) -> Result<Rack, Error> {
        self.http.get_json(&Self::single(id)?).await
    }

    pub async fn create(&self, attributes: &serde_json::Value) -> Result<Rack, Error> {
        self.http.post_json("/v1/racks", attributes).await
    }

    pub async fn update(&self, id: &str, attributes: &serde_json::Value) -> Result<Rack, Error> {
        self.http.put_json(&Self::single(id)?, attributes).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.http.delete(&Self::single(id)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn racks(server: &MockServer) -> RacksClient {
        RacksClient::new(
            HttpClient::new(&server.base_url(), None, Duration::from_secs(5), false).unwrap(),
        )
    }

    #[tokio::test]
    async fn crud_paths_match_the_api() {
        let server = MockServer::start_async().await;
        let rack = json!({ "id": 1, "name": "compute-rack" });
        let list = server.mock(|when, then| {
            when.method(GET).path("/v1/racks");
            then.status(200).json_body(json!([rack.clone()]));
        });
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/racks")
                .json_body(json!({ "name": "compute-rack", "slots": 30 }));
            then.status(201).json_body(rack.clone());
        });
        let update = server.mock(|when, then| {
            when.method(PUT)
                .path("/v1/racks/1")
                .json_body(json!({ "slots": 40 }));
            then.status(200).json_body(rack.clone());
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE).path("/v1/racks/1");
            then.status(204);
        });

        let client = racks(&server);
        assert_eq!(client.list().await.unwrap().len(), 1);
        client
            .create(&json!({ "name": "compute-rack", "slots": 30 }))
            .await
            .unwrap();
        client.update("1", &json!({ "slots": 40 })).await.unwrap();
        client.delete("1").await.unwrap();
        list.assert();
        create.assert();
        update.assert();
        delete.assert();
    }

    #[tokio::test]
    async fn empty_id_is_rejected() {
        let server = MockServer::start_async().await;
        let error = racks(&server).delete("").await.unwrap_err();
        assert!(matches!(error, Error::EmptyId { resource: "rack" }));
    }
}
