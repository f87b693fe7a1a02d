use crate::error::{self, Error};
use crate::http::HttpClient;
use crate::models::Overcloud;
use snafu::ensure;

/// Client for the `/v1/overclouds` resource. Overclouds are addressed by
/// name rather than numeric id.
#[derive(Debug, Clone)]
pub struct OvercloudsClient {
    http: HttpClient,
}

impl OvercloudsClient {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn single(name: &str) -> Result<String, Error> {
        ensure!(
            !name.is_empty(),
            error::EmptyIdSnafu {
                resource: "overcloud"
            }
        );
        Ok(format!("/v1/overclouds/{name}"))
    }

    pub async fn list(&self) -> Result<Vec<Overcloud>, Error> {
        self.http.get_json("/v1/overclouds").await
    }

    pub async fn get(&self, name: &str) -> Result<Overcloud, Error> {
        self.http.get_json(&Self::single(name)?).await
    }

    pub async fn create(&self, attributes: &serde_json::Value) -> Result<Overcloud, Error> {
        self.http.post_json("/v1/overclouds", attributes).await
    }

    pub async fn update(
        &self,
        name: &str,
        attributes: &serde_json::Value,
    ) -> Result<Overcloud, Error> {
        self.http.put_json(&Self::single(name)?, attributes).await
    }

    pub async fn delete(&self, name: &str) -> Result<(), Error> {
        self.http.delete(&Self::single(name)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn create_carries_attributes_and_counts() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/v1/overclouds").json_body(json!({
                "name": "overcloud-1",
                "attributes": { "AdminPassword": "secret" },
                "counts": [{ "overcloud_role_id": 1, "num_nodes": 3 }]
            }));
            then.status(201).json_body(json!({
                "id": 1,
                "name": "overcloud-1",
                "counts": [{ "overcloud_role_id": 1, "num_nodes": 3 }]
            }));
        });

        let overcloud = OvercloudsClient::new(
            HttpClient::new(&server.base_url(), None, Duration::from_secs(5), false).unwrap(),
        )
        .create(&json!({
            "name": "overcloud-1",
            "attributes": { "AdminPassword": "secret" },
            "counts": [{ "overcloud_role_id": 1, "num_nodes": 3 }]
        }))
        .await
        .unwrap();
        assert_eq!(overcloud.counts[0].num_nodes, 3);
        mock.assert();
    }
}
