use crate::error::{self, Error};
use crate::http::HttpClient;
use crate::models::Flavor;
use snafu::ensure;

/// Client for the flavors nested under a resource class,
/// `/v1/resource_classes/{rc}/flavors`.
#[derive(Debug, Clone)]
pub struct FlavorsClient {
    http: HttpClient,
}

impl FlavorsClient {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn collection(resource_class: &str) -> Result<String, Error> {
        ensure!(
            !resource_class.is_empty(),
            error::EmptyIdSnafu {
                resource: "resource class"
            }
        );
        Ok(format!("/v1/resource_classes/{resource_class}/flavors"))
    }

    fn single(resource_class: &str, id: &str) -> Result<String, Error> {
        ensure!(!id.is_empty(), error::EmptyIdSnafu { resource: "flavor" });
        Ok(format!("{}/{id}", Self::collection(resource_class)?))
    }

    pub async fn list(&self, resource_class: &str) -> Result<Vec<Flavor>, Error> {
        self.http.get_json(&Self::collection(resource_class)?).await
    }

    pub async fn get(&self, resource_class: &str, id: &str) -> Result<Flavor, Error> {
        self.http.get_json(&Self::single(resource_class, id)?).await
    }

    pub async fn create(
        &self,
        resource_class: &str,
        attributes: &serde_json::Value,
    ) -> Result<Flavor, Error> {
        self.http
            .post_json(&Self::collection(resource_class)?, attributes)
            .await
    }

    pub async fn update(
        &self,
        resource_class: &str,
        id: &str,
        attributes: &serde_json::Value,
    ) -> Result<Flavor, Error> {
        self.http
            .put_json(&Self::single(resource_class, id)?, attributes)
            .await
    }

    pub async fn delete(&self, resource_class: &str, id: &str) -> Result<(), Error> {
        self.http.delete(&Self::single(resource_class, id)?).await
    }
}
