use crate::error::{self, Error};
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use snafu::ResultExt;
use std::time::Duration;

/// Agent string advertised on every request.
const USER_AGENT: &str = "tuskar-client";

/// JSON-over-HTTP transport shared by all resource clients.
///
/// Wraps a `reqwest::Client` together with the service endpoint, the auth
/// token and the response conventions of the management API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base: Url,
    token: Option<String>,
    client: Client,
}

impl HttpClient {
    /// Create a transport for the given service endpoint.
    pub fn new(
        endpoint: &str,
        token: Option<String>,
        timeout: Duration,
        insecure: bool,
    ) -> Result<Self, Error> {
        let base = Url::parse(endpoint).context(error::InvalidUrlSnafu { url: endpoint })?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .danger_accept_invalid_certs(insecure)
            .build()
            .context(error::BuildClientSnafu)?;
        Ok(Self {
            base,
            token,
            client,
        })
    }

    /// Concatenate the endpoint with a resource path.
    fn url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&full).context(error::InvalidUrlSnafu { url: full.as_str() })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.header("X-Auth-Token", token);
        }
        request
    }

    /// Send a request and map non-success statuses to errors.
    async fn send(
        &self,
        request: RequestBuilder,
        method: &'static str,
        url: &Url,
    ) -> Result<Response, Error> {
        tracing::debug!(%url, method, "sending request");
        let response = request.send().await.context(error::RequestSnafu {
            method,
            url: url.as_str(),
        })?;
        let status = response.status();
        tracing::debug!(%url, method, %status, "received response");
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::NOT_FOUND => error::NotFoundSnafu { url: url.as_str() }.fail(),
            StatusCode::MULTIPLE_CHOICES => {
                error::MultipleChoicesSnafu { url: url.as_str() }.fail()
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                error::ResponseSnafu {
                    url: url.as_str(),
                    status,
                    body,
                }
                .fail()
            }
        }
    }

    async fn decode<R>(response: Response, url: &Url) -> Result<R, Error>
    where
        R: DeserializeOwned + Default,
    {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .context(error::BodySnafu { url: url.as_str() })?;
        // 204/205 and bodyless successes decode to the default representation.
        if status == StatusCode::NO_CONTENT
            || status == StatusCode::RESET_CONTENT
            || bytes.is_empty()
        {
            return Ok(R::default());
        }
        serde_json::from_slice::<R>(&bytes).context(error::DecodeSnafu { url: url.as_str() })
    }

    /// GET a resource or collection.
    pub async fn get_json<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned + Default,
    {
        let url = self.url(path)?;
        let response = self
            .send(self.request(Method::GET, url.clone()), "GET", &url)
            .await?;
        Self::decode(response, &url).await
    }

    /// POST a JSON body, returning the resulting representation.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let url = self.url(path)?;
        let response = self
            .send(
                self.request(Method::POST, url.clone()).json(body),
                "POST",
                &url,
            )
            .await?;
        Self::decode(response, &url).await
    }

    /// PUT a JSON body, returning the updated representation.
    pub async fn put_json<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let url = self.url(path)?;
        let response = self
            .send(
                self.request(Method::PUT, url.clone()).json(body),
                "PUT",
                &url,
            )
            .await?;
        Self::decode(response, &url).await
    }

    /// PATCH a JSON body, returning the updated representation.
    pub async fn patch_json<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let url = self.url(path)?;
        let response = self
            .send(
                self.request(Method::PATCH, url.clone()).json(body),
                "PATCH",
                &url,
            )
            .await?;
        Self::decode(response, &url).await
    }

    /// DELETE a resource, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        self.send(self.request(Method::DELETE, url.clone()), "DELETE", &url)
            .await?;
        Ok(())
    }

    /// DELETE a resource, returning the updated representation.
    pub async fn delete_json<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned + Default,
    {
        let url = self.url(path)?;
        let response = self
            .send(self.request(Method::DELETE, url.clone()), "DELETE", &url)
            .await?;
        Self::decode(response, &url).await
    }
}
