use crate::error::{self, Error};
use crate::http::HttpClient;
use crate::models::ResourceClass;
use snafu::ensure;

/// Client for the `/v1/resource_classes` resource.
#[derive(Debug, Clone)]
pub struct ResourceClassesClient {
    http: HttpClient,
}

impl ResourceClassesClient {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn single(id: &str) -> Result<String, Error> {
        ensure!(
            !id.is_empty(),
            error::EmptyIdSnafu {
                resource: "resource class"
            }
        );
        Ok(format!("/v1/resource_classes/{id}"))
    }

    pub async fn list(&self) -> Result<Vec<ResourceClass>, Error> {
        self.http.get_json("/v1/resource_classes").await
    }

    pub async fn get(&self, id: &str) -> Result<ResourceClass, Error> {
        self.http.get_json(&Self::single(id)?).await
    }

    pub async fn create(&self, attributes: &serde_json::Value) -> Result<ResourceClass, Error> {
        self.http.post_json("/v1/resource_classes", attributes).await
    }

    pub async fn update(
        &self,
        id: &str,
        attributes: &serde_json::Value,
    ) -> Result<ResourceClass, Error> {
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

    #[tokio::test]
    async fn get_decodes_rack_references() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v1/resource_classes/7");
            then.status(200).json_body(json!({
                "id": 7,
                "name": "m1",
                "service_type": "compute",
                "racks": [{ "id": 1 }, { "id": 2 }]
            }));
        });

        let class = ResourceClassesClient::new(
            HttpClient::new(&server.base_url(), None, Duration::from_secs(5), false).unwrap(),
        )
        .get("7")
        .await
        .unwrap();
        assert_eq!(class.racks.iter().map(|r| r.id).collect::<Vec<_>>(), [1, 2]);
    }
}
