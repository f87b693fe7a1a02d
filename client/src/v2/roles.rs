use crate::error::Error;
use crate::http::HttpClient;
use crate::models::Role;

/// Client for the `/v2/roles` resource. Roles are server-defined, the API
/// only exposes listing them.
#[derive(Debug, Clone)]
pub struct RolesClient {
    http: HttpClient,
}

impl RolesClient {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List all available roles.
    pub async fn list(&self) -> Result<Vec<Role>, Error> {
        self.http.get_json("/v2/roles").await
    }
}
