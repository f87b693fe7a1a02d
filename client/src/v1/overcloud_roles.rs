use crate::error::{self, Error};
use crate::http::HttpClient;
use crate::models::OvercloudRole;
use snafu::ensure;

/// Client for the `/v1/overcloud_roles` resource.
#[derive(Debug, Clone)]
pub struct OvercloudRolesClient {
    http: HttpClient,
}

impl OvercloudRolesClient {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn single(id: &str) -> Result<String, Error> {
        ensure!(
            !id.is_empty(),
            error::EmptyIdSnafu {
                resource: "overcloud role"
            }
        );
        Ok(format!("/v1/overcloud_roles/{id}"))
    }

    pub async fn list(&self) -> Result<Vec<OvercloudRole>, Error> {
        self.http.get_json("/v1/overcloud_roles").await
    }

    pub async fn get(&self, id: &str) -> Result<OvercloudRole, Error> {
        self.http.get_json(&Self::single(id)?).await
    }

    pub async fn create(&self, attributes: &serde_json::Value) -> Result<OvercloudRole, Error> {
        self.http.post_json("/v1/overcloud_roles", attributes).await
    }

    pub async fn update(
        &self,
        id: &str,
        attributes: &serde_json::Value,
    ) -> Result<OvercloudRole, Error> {
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
    async fn update_puts_to_the_single_resource_path() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v1/overcloud_roles/4")
                .json_body(json!({ "image_name": "overcloud-compute" }));
            then.status(200)
                .json_body(json!({ "id": 4, "name": "Compute" }));
        });

        OvercloudRolesClient::new(
            HttpClient::new(&server.base_url(), None, Duration::from_secs(5), false).unwrap(),
        )
        .update("4", &json!({ "image_name": "overcloud-compute" }))
        .await
        .unwrap();
        mock.assert();
    }
}
