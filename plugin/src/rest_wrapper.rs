use anyhow::Result;
use once_cell::sync::OnceCell;
use tuskar_client::{v1::V1Client, v2::V2Client, ApiVersion, AuthParams, Client};

static REST_SERVER: OnceCell<RestClient> = OnceCell::new();

/// REST client
pub struct RestClient {
    client: Client,
}

impl RestClient {
    /// Initialise the global client, authenticating if needed.
    pub async fn init(version: ApiVersion, params: &AuthParams) -> Result<()> {
        tracing::debug!(%version, "initialising the REST client");
        let client = tuskar_client::get_client(version, params).await?;
        REST_SERVER.get_or_init(|| RestClient { client });
        Ok(())
    }

    /// Initialise the global client from an already built one.
    pub fn init_with_client(client: Client) -> Result<()> {
        REST_SERVER.get_or_init(|| RestClient { client });
        Ok(())
    }

    /// Get the global client to use for REST calls.
    pub fn client() -> &'static Client {
        &REST_SERVER.get().unwrap().client
    }

    /// Get the v1 resource surface of the global client.
    pub fn v1() -> Result<&'static V1Client, tuskar_client::Error> {
        Self::client().v1()
    }

    /// Get the v2 resource surface of the global client.
    pub fn v2() -> Result<&'static V2Client, tuskar_client::Error> {
        Self::client().v2()
    }
}
