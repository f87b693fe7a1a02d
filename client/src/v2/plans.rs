use crate::error::{self, Error};
use crate::http::HttpClient;
use crate::models::{CreatePlanBody, ParameterValue, Plan};
use snafu::ensure;
use std::collections::HashMap;

/// Client for the `/v2/plans` resource.
#[derive(Debug, Clone)]
pub struct PlansClient {
    http: HttpClient,
}

impl PlansClient {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn single(uuid: &str) -> Result<String, Error> {
        ensure!(!uuid.is_empty(), error::EmptyIdSnafu { resource: "plan" });
        Ok(format!("/v2/plans/{uuid}"))
    }

    /// List all plans.
    pub async fn list(&self) -> Result<Vec<Plan>, Error> {
        self.http.get_json("/v2/plans").await
    }

    /// Fetch a single plan by uuid.
    pub async fn get(&self, uuid: &str) -> Result<Plan, Error> {
        self.http.get_json(&Self::single(uuid)?).await
    }

    /// Create a new plan.
    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<Plan, Error> {
        let body = CreatePlanBody {
            name: name.to_string(),
            description: description.map(str::to_string),
        };
        self.http.post_json("/v2/plans", &body).await
    }

    /// Change parameter values of a plan.
    pub async fn patch(&self, uuid: &str, parameters: &[ParameterValue]) -> Result<Plan, Error> {
        self.http.patch_json(&Self::single(uuid)?, parameters).await
    }

    /// Delete a plan.
    pub async fn delete(&self, uuid: &str) -> Result<(), Error> {
        self.http.delete(&Self::single(uuid)?).await
    }

    /// Associate a role with a plan.
    pub async fn add_role(&self, plan_uuid: &str, role_uuid: &str) -> Result<Plan, Error> {
        let path = format!("{}/roles", Self::single(plan_uuid)?);
        self.http
            .post_json(&path, &serde_json::json!({ "uuid": role_uuid }))
            .await
    }

    /// Remove a role association from a plan.
    pub async fn remove_role(&self, plan_uuid: &str, role_uuid: &str) -> Result<Plan, Error> {
        ensure!(
            !role_uuid.is_empty(),
            error::EmptyIdSnafu { resource: "role" }
        );
        let path = format!("{}/roles/{role_uuid}", Self::single(plan_uuid)?);
        self.http.delete_json(&path).await
    }

    /// Fetch the deployment templates of a plan, keyed by file name.
    pub async fn templates(&self, plan_uuid: &str) -> Result<HashMap<String, String>, Error> {
        let path = format!("{}/templates", Self::single(plan_uuid)?);
        self.http.get_json(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn plans(server: &MockServer) -> PlansClient {
        PlansClient::new(
            HttpClient::new(&server.base_url(), None, Duration::from_secs(5), false).unwrap(),
        )
    }

    #[tokio::test]
    async fn create_posts_name_and_description() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v2/plans")
                .json_body(json!({ "name": "overcloud", "description": "prod" }));
            then.status(201)
                .json_body(json!({ "uuid": "p1", "name": "overcloud" }));
        });

        let plan = plans(&server)
            .create("overcloud", Some("prod"))
            .await
            .unwrap();
        assert_eq!(plan.uuid, "p1");
        mock.assert();
    }

    #[tokio::test]
    async fn patch_sends_parameter_list() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::PATCH)
                .path("/v2/plans/p1")
                .json_body(json!([{ "name": "compute-1::count", "value": "3" }]));
            then.status(200)
                .json_body(json!({ "uuid": "p1", "name": "overcloud" }));
        });

        plans(&server)
            .patch(
                "p1",
                &[ParameterValue {
                    name: "compute-1::count".to_string(),
                    value: "3".to_string(),
                }],
            )
            .await
            .unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn role_association_endpoints() {
        let server = MockServer::start_async().await;
        let add = server.mock(|when, then| {
            when.method(POST)
                .path("/v2/plans/p1/roles")
                .json_body(json!({ "uuid": "r1" }));
            then.status(201)
                .json_body(json!({ "uuid": "p1", "name": "overcloud" }));
        });
        let remove = server.mock(|when, then| {
            when.method(DELETE).path("/v2/plans/p1/roles/r1");
            then.status(200)
                .json_body(json!({ "uuid": "p1", "name": "overcloud" }));
        });

        let client = plans(&server);
        client.add_role("p1", "r1").await.unwrap();
        client.remove_role("p1", "r1").await.unwrap();
        add.assert();
        remove.assert();
    }

    #[tokio::test]
    async fn remove_role_tolerates_a_bodyless_response() {
        let server = MockServer::start_async().await;
        let remove = server.mock(|when, then| {
            when.method(DELETE).path("/v2/plans/p1/roles/r1");
            then.status(204);
        });

        let plan = plans(&server).remove_role("p1", "r1").await.unwrap();
        assert!(plan.uuid.is_empty());
        remove.assert();
    }

    #[tokio::test]
    async fn templates_decode_into_a_map() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v2/plans/p1/templates");
            then.status(200).json_body(json!({
                "plan.yaml": "heat_template_version: 2014-10-16\n",
                "environment.yaml": "parameters: {}\n"
            }));
        });

        let templates = plans(&server).templates("p1").await.unwrap();
        assert_eq!(templates.len(), 2);
        assert!(templates["plan.yaml"].starts_with("heat_template_version"));
    }

    #[tokio::test]
    async fn empty_uuid_is_rejected_before_any_request() {
        let server = MockServer::start_async().await;
        let error = plans(&server).get("").await.unwrap_err();
        assert!(matches!(error, Error::EmptyId { resource: "plan" }));
        let error = plans(&server).delete("").await.unwrap_err();
        assert!(matches!(error, Error::EmptyId { resource: "plan" }));
    }
}
