//! Identity service integration: credential exchange and endpoint discovery.
//!
//! The management service itself performs no authentication; callers either
//! hand it a pre-existing token and endpoint, or the credentials needed to
//! obtain them from the identity service's `POST /tokens` exchange.

use crate::error::{self, Error};
use crate::http::HttpClient;
use serde::Deserialize;
use snafu::ensure;
use std::time::Duration;

/// Service type looked up in the catalog when none is specified.
pub const DEFAULT_SERVICE_TYPE: &str = "management";
/// Endpoint interface looked up in the catalog when none is specified.
pub const DEFAULT_ENDPOINT_TYPE: &str = "publicURL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Authentication parameters accepted by [`crate::get_client`].
///
/// Either `os_auth_token` plus `tuskar_url`, or a complete credential set
/// (`os_username`, `os_password`, `os_auth_url` and one of
/// `os_tenant_id`/`os_tenant_name`) must be present.
#[derive(Debug, Clone)]
pub struct AuthParams {
    /// Pre-existing token to re-use.
    pub os_auth_token: Option<String>,
    /// Management API endpoint, skips catalog discovery when set.
    pub tuskar_url: Option<String>,
    pub os_username: Option<String>,
    pub os_password: Option<String>,
    pub os_tenant_id: Option<String>,
    pub os_tenant_name: Option<String>,
    /// Identity endpoint to authenticate against.
    pub os_auth_url: Option<String>,
    /// Catalog service type override.
    pub os_service_type: Option<String>,
    /// Catalog endpoint interface override.
    pub os_endpoint_type: Option<String>,
    /// Allow insecure TLS (no certificate verification).
    pub insecure: bool,
    /// Timeout applied to identity and management requests.
    pub timeout: Duration,
}

impl Default for AuthParams {
    fn default() -> Self {
        Self {
            os_auth_token: None,
            tuskar_url: None,
            os_username: None,
            os_password: None,
            os_tenant_id: None,
            os_tenant_name: None,
            os_auth_url: None,
            os_service_type: None,
            os_endpoint_type: None,
            insecure: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AuthParams {
    /// Whether the parameters carry a complete credential set for the
    /// identity exchange.
    pub fn has_credentials(&self) -> bool {
        self.os_username.is_some()
            && self.os_password.is_some()
            && self.os_auth_url.is_some()
            && (self.os_tenant_id.is_some() || self.os_tenant_name.is_some())
    }

    /// Whether the parameters carry a token and endpoint pair.
    pub fn has_token_and_endpoint(&self) -> bool {
        self.os_auth_token.is_some() && self.tuskar_url.is_some()
    }
}

#[derive(Debug, Default, Deserialize)]
struct AuthResponse {
    access: AccessInfo,
}

/// Token and service catalog returned by the identity service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessInfo {
    pub token: Token,
    #[serde(rename = "serviceCatalog", default)]
    pub service_catalog: Vec<CatalogEntry>,
}

/// The issued token.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Token {
    pub id: String,
}

/// One service advertised in the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub endpoints: Vec<CatalogEndpoint>,
}

/// Endpoint interfaces of a catalog entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogEndpoint {
    #[serde(rename = "publicURL")]
    pub public_url: Option<String>,
    #[serde(rename = "internalURL")]
    pub internal_url: Option<String>,
    #[serde(rename = "adminURL")]
    pub admin_url: Option<String>,
}

impl AccessInfo {
    /// Resolve a service endpoint from the catalog.
    pub fn endpoint_for(&self, service_type: &str, endpoint_type: &str) -> Result<String, Error> {
        for entry in &self.service_catalog {
            if entry.service_type != service_type {
                continue;
            }
            for endpoint in &entry.endpoints {
                let url = match endpoint_type {
                    "publicURL" => endpoint.public_url.as_ref(),
                    "internalURL" => endpoint.internal_url.as_ref(),
                    "adminURL" => endpoint.admin_url.as_ref(),
                    _ => None,
                };
                if let Some(url) = url {
                    return Ok(url.clone());
                }
            }
        }
        error::EndpointNotFoundSnafu {
            service_type,
            endpoint_type,
        }
        .fail()
    }
}

/// Minimal identity (v2) client used for the credential exchange.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: HttpClient,
}

impl IdentityClient {
    /// Create an identity client for the given auth endpoint.
    pub fn new(auth_url: &str, timeout: Duration, insecure: bool) -> Result<Self, Error> {
        Ok(Self {
            http: HttpClient::new(auth_url, None, timeout, insecure)?,
        })
    }

    /// Exchange password credentials for a token and service catalog.
    ///
    /// The tenant id takes precedence when both tenant id and name are given.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
        tenant_id: Option<&str>,
        tenant_name: Option<&str>,
    ) -> Result<AccessInfo, Error> {
        let mut auth = serde_json::json!({
            "passwordCredentials": {
                "username": username,
                "password": password,
            }
        });
        if let Some(id) = tenant_id {
            auth["tenantId"] = serde_json::Value::from(id);
        } else if let Some(name) = tenant_name {
            auth["tenantName"] = serde_json::Value::from(name);
        }
        let response: AuthResponse = self
            .http
            .post_json("/tokens", &serde_json::json!({ "auth": auth }))
            .await?;
        Ok(response.access)
    }
}

/// Resolve a `(token, endpoint)` pair from the given parameters.
///
/// The identity service is contacted only when the token or the endpoint is
/// missing; a supplied token or endpoint always wins over the exchanged one.
pub async fn token_and_endpoint(params: &AuthParams) -> Result<(String, String), Error> {
    if let (Some(token), Some(endpoint)) = (&params.os_auth_token, &params.tuskar_url) {
        return Ok((token.clone(), endpoint.clone()));
    }

    ensure!(
        params.os_username.is_some() && params.os_password.is_some(),
        error::MissingParametersSnafu
    );
    let auth_url = params
        .os_auth_url
        .as_deref()
        .ok_or(Error::MissingParameters)?;

    let identity = IdentityClient::new(auth_url, params.timeout, params.insecure)?;
    let access = identity
        .authenticate(
            params.os_username.as_deref().unwrap_or_default(),
            params.os_password.as_deref().unwrap_or_default(),
            params.os_tenant_id.as_deref(),
            params.os_tenant_name.as_deref(),
        )
        .await?;

    let token = match &params.os_auth_token {
        Some(token) => token.clone(),
        None => access.token.id.clone(),
    };
    let endpoint = match &params.tuskar_url {
        Some(endpoint) => endpoint.clone(),
        None => access.endpoint_for(
            params
                .os_service_type
                .as_deref()
                .unwrap_or(DEFAULT_SERVICE_TYPE),
            params
                .os_endpoint_type
                .as_deref()
                .unwrap_or(DEFAULT_ENDPOINT_TYPE),
        )?,
    };
    Ok((token, endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn catalog_response() -> serde_json::Value {
        json!({
            "access": {
                "token": { "id": "issued-token" },
                "serviceCatalog": [
                    {
                        "type": "identity",
                        "endpoints": [{ "publicURL": "http://keystone:5000/v2.0" }]
                    },
                    {
                        "type": "management",
                        "endpoints": [{
                            "publicURL": "http://tuskar:8585",
                            "adminURL": "http://tuskar-admin:8585"
                        }]
                    }
                ]
            }
        })
    }

    #[test]
    fn endpoint_resolution_honours_service_and_interface() {
        let access: AuthResponse = serde_json::from_value(catalog_response()).unwrap();
        let access = access.access;
        assert_eq!(
            access.endpoint_for("management", "publicURL").unwrap(),
            "http://tuskar:8585"
        );
        assert_eq!(
            access.endpoint_for("management", "adminURL").unwrap(),
            "http://tuskar-admin:8585"
        );
        assert!(matches!(
            access.endpoint_for("management", "internalURL"),
            Err(Error::EndpointNotFound { .. })
        ));
        assert!(matches!(
            access.endpoint_for("compute", "publicURL"),
            Err(Error::EndpointNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn authenticate_posts_password_credentials() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/tokens").json_body(json!({
                "auth": {
                    "passwordCredentials": { "username": "admin", "password": "devpass" },
                    "tenantName": "demo"
                }
            }));
            then.status(200).json_body(catalog_response());
        });

        let identity =
            IdentityClient::new(&server.base_url(), Duration::from_secs(5), false).unwrap();
        let access = identity
            .authenticate("admin", "devpass", None, Some("demo"))
            .await
            .unwrap();
        assert_eq!(access.token.id, "issued-token");
        mock.assert();
    }

    #[tokio::test]
    async fn token_and_endpoint_skips_identity_when_both_supplied() {
        // No server is running at the auth URL; the call must not hit it.
        let params = AuthParams {
            os_auth_token: Some("cached".to_string()),
            tuskar_url: Some("http://tuskar:8585".to_string()),
            os_auth_url: Some("http://unreachable:5000".to_string()),
            ..Default::default()
        };
        let (token, endpoint) = token_and_endpoint(&params).await.unwrap();
        assert_eq!(token, "cached");
        assert_eq!(endpoint, "http://tuskar:8585");
    }

    #[tokio::test]
    async fn token_and_endpoint_resolves_missing_endpoint_from_catalog() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/tokens");
            then.status(200).json_body(catalog_response());
        });

        let params = AuthParams {
            os_username: Some("admin".to_string()),
            os_password: Some("devpass".to_string()),
            os_tenant_name: Some("demo".to_string()),
            os_auth_url: Some(server.base_url()),
            ..Default::default()
        };
        let (token, endpoint) = token_and_endpoint(&params).await.unwrap();
        assert_eq!(token, "issued-token");
        assert_eq!(endpoint, "http://tuskar:8585");
    }

    #[tokio::test]
    async fn supplied_token_wins_over_issued_one() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/tokens");
            then.status(200).json_body(catalog_response());
        });

        let params = AuthParams {
            os_auth_token: Some("cached".to_string()),
            os_username: Some("admin".to_string()),
            os_password: Some("devpass".to_string()),
            os_tenant_name: Some("demo".to_string()),
            os_auth_url: Some(server.base_url()),
            ..Default::default()
        };
        let (token, endpoint) = token_and_endpoint(&params).await.unwrap();
        assert_eq!(token, "cached");
        assert_eq!(endpoint, "http://tuskar:8585");
    }
}
