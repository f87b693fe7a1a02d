//! Client construction: API version parsing and the authentication
//! fallback chain.

use crate::auth::{self, AuthParams};
use crate::error::{self, Error};
use crate::http::HttpClient;
use crate::v1::V1Client;
use crate::v2::V2Client;
use std::fmt;
use std::str::FromStr;

/// Supported generations of the management API.
///
/// `1.0` is an alias kept for compatibility with older tooling that spelled
/// the first generation that way; it serves the same resource surface as `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(version: &str) -> Result<Self, Self::Err> {
        match version {
            "1" | "1.0" => Ok(Self::V1),
            "2" => Ok(Self::V2),
            _ => error::UnknownVersionSnafu { version }.fail(),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "1"),
            Self::V2 => write!(f, "2"),
        }
    }
}

/// A versioned handle to the management API.
#[derive(Debug, Clone)]
pub enum Client {
    V1(V1Client),
    V2(V2Client),
}

impl Client {
    /// Build a client directly from a token and endpoint.
    pub fn new(
        version: ApiVersion,
        endpoint: &str,
        token: &str,
        params: &AuthParams,
    ) -> Result<Self, Error> {
        let http = HttpClient::new(
            endpoint,
            Some(token.to_string()),
            params.timeout,
            params.insecure,
        )?;
        Ok(match version {
            ApiVersion::V1 => Self::V1(V1Client::new(http)),
            ApiVersion::V2 => Self::V2(V2Client::new(http)),
        })
    }

    /// The generation this client speaks.
    pub fn version(&self) -> ApiVersion {
        match self {
            Self::V1(_) => ApiVersion::V1,
            Self::V2(_) => ApiVersion::V2,
        }
    }

    /// Access the v1 resource surface.
    pub fn v1(&self) -> Result<&V1Client, Error> {
        match self {
            Self::V1(client) => Ok(client),
            Self::V2(_) => error::UnsupportedVersionSnafu {
                required: "1",
                actual: "2",
            }
            .fail(),
        }
    }

    /// Access the v2 resource surface.
    pub fn v2(&self) -> Result<&V2Client, Error> {
        match self {
            Self::V2(client) => Ok(client),
            Self::V1(_) => error::UnsupportedVersionSnafu {
                required: "2",
                actual: "1",
            }
            .fail(),
        }
    }
}

/// Build a client from whatever authentication parameters are at hand.
///
/// A token plus endpoint is used as-is; otherwise a complete credential set
/// is exchanged at the identity service and the endpoint resolved from the
/// catalog; anything less fails with [`Error::MissingParameters`].
pub async fn get_client(version: ApiVersion, params: &AuthParams) -> Result<Client, Error> {
    if params.has_token_and_endpoint() || params.has_credentials() {
        let (token, endpoint) = auth::token_and_endpoint(params).await?;
        Client::new(version, &endpoint, &token, params)
    } else {
        error::MissingParametersSnafu.fail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn version_strings_parse() {
        assert_eq!("1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("1.0".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert!(matches!(
            "3".parse::<ApiVersion>(),
            Err(Error::UnknownVersion { .. })
        ));
    }

    #[test]
    fn version_accessors_reject_the_other_generation() {
        let params = AuthParams::default();
        let client = Client::new(ApiVersion::V2, "http://tuskar:8585", "token", &params).unwrap();
        assert!(client.v2().is_ok());
        assert!(matches!(
            client.v1(),
            Err(Error::UnsupportedVersion { .. })
        ));
    }

    #[tokio::test]
    async fn token_and_endpoint_build_a_client_without_identity() {
        let params = AuthParams {
            os_auth_token: Some("token".to_string()),
            tuskar_url: Some("http://tuskar:8585".to_string()),
            ..Default::default()
        };
        let client = get_client(ApiVersion::V2, &params).await.unwrap();
        assert_eq!(client.version(), ApiVersion::V2);
    }

    #[tokio::test]
    async fn credentials_fall_back_to_the_identity_exchange() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/tokens");
            then.status(200).json_body(json!({
                "access": {
                    "token": { "id": "issued" },
                    "serviceCatalog": [{
                        "type": "management",
                        "endpoints": [{ "publicURL": "http://tuskar:8585" }]
                    }]
                }
            }));
        });

        let params = AuthParams {
            os_username: Some("admin".to_string()),
            os_password: Some("devpass".to_string()),
            os_tenant_name: Some("demo".to_string()),
            os_auth_url: Some(server.base_url()),
            ..Default::default()
        };
        let client = get_client(ApiVersion::V1, &params).await.unwrap();
        assert_eq!(client.version(), ApiVersion::V1);
    }

    #[tokio::test]
    async fn incomplete_parameters_are_rejected_up_front() {
        let params = AuthParams {
            os_username: Some("admin".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            get_client(ApiVersion::V1, &params).await,
            Err(Error::MissingParameters)
        ));
    }
}
