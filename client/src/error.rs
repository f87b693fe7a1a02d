use snafu::Snafu;

/// All errors returned by the Tuskar API client.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Error when the HTTP client itself could not be constructed.
    #[snafu(display("Failed to build the HTTP client. Error {source}"))]
    BuildClient { source: reqwest::Error },

    /// Error when an endpoint or request URL is not parseable.
    #[snafu(display("Invalid URL '{url}'. Error {source}"))]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// Error when the request could not be sent at all.
    #[snafu(display("Failed to {method} {url}. Error {source}"))]
    Request {
        method: String,
        url: String,
        source: reqwest::Error,
    },

    /// Error when the response body could not be read.
    #[snafu(display("Failed to read the response body of {url}. Error {source}"))]
    Body {
        url: String,
        source: reqwest::Error,
    },

    /// Error when the response body is not the expected JSON.
    #[snafu(display("Failed to decode the response body of {url}. Error {source}"))]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// Error when the server reports a non-success status.
    #[snafu(display("Request to {url} failed with status {status}: {body}"))]
    Response {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// Error when the requested resource does not exist.
    #[snafu(display("Resource {url} not found"))]
    NotFound { url: String },

    /// The server answers with 300 when the requested API generation is not
    /// served at this endpoint.
    #[snafu(display("Requested version of the management API is not available at {url}"))]
    MultipleChoices { url: String },

    /// Error when a single-resource operation is attempted with an empty id.
    #[snafu(display("{resource} id must not be empty"))]
    EmptyId { resource: &'static str },

    /// Error when neither a token/endpoint pair nor a complete credential set
    /// was supplied.
    #[snafu(display(
        "A correct set of authentication parameters is required: either a token and \
        an endpoint, or username, password, tenant and auth URL"
    ))]
    MissingParameters,

    /// Error when the service catalog has no matching endpoint.
    #[snafu(display("No '{endpoint_type}' endpoint for service '{service_type}' in the catalog"))]
    EndpointNotFound {
        service_type: String,
        endpoint_type: String,
    },

    /// Error when an operation is issued against the wrong API generation.
    #[snafu(display("This operation requires API version {required}, client is version {actual}"))]
    UnsupportedVersion { required: String, actual: String },

    /// Error when an API version string is not recognised.
    #[snafu(display("Unknown API version '{version}', supported versions are 1, 1.0 and 2"))]
    UnknownVersion { version: String },
}
