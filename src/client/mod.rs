//! Executes [`Request`]s against the GitHub API.

use crate::request::{Capability, Request, RwMode};
use log::{debug, trace};
use reqwest::{header, Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

mod error;
mod pagination;
mod rate_limit;
mod repos;

pub use error::{Error, GithubClientError, GithubClientErrorType, Result};
pub use pagination::Pagination;
pub use rate_limit::Rate;
pub use repos::RepositoryClient;

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

const HEADER_LINK: &str = "Link";
const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";

const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";
const MEDIA_TYPE_JSON: &str = "application/json";

/// Page size requested when walking a paged request; the maximum GitHub allows
const PER_PAGE: &str = "100";

#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    github_api_token: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            github_api_token: None,
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn github_api_token<S: Into<String>>(mut self, github_api_token: S) -> Self {
        self.github_api_token = Some(github_api_token.into());
        self
    }

    /// Use the token in `GITHUB_TOKEN`, if it is set and no token was configured explicitly
    pub fn github_api_token_from_env(mut self) -> Self {
        if self.github_api_token.is_none() {
            self.github_api_token = std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty());
        }
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        // Catch a malformed base url here instead of on the first request
        Url::parse(&base_url)?;

        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());

        let mut client_builder = ReqwestClient::builder().user_agent(&user_agent);

        if let Some(token) = &self.github_api_token {
            let mut headers = header::HeaderMap::new();
            let mut value = header::HeaderValue::from_str(&format!("token {}", token))
                .map_err(|e| e.to_string())?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
            client_builder = client_builder.default_headers(headers);
        }

        let client = client_builder.build()?;

        Ok(Client {
            base_url,
            user_agent,
            github_api_token: self.github_api_token,
            client,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A decoded response body along with the pagination and rate limit information GitHub sent
/// with it
#[derive(Debug)]
pub struct Response<T> {
    pagination: Pagination,
    rate: Rate,
    body: T,
}

impl<T> Response<T> {
    pub fn new(pagination: Pagination, rate: Rate, body: T) -> Self {
        Self {
            pagination,
            rate,
            body,
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn rate(&self) -> &Rate {
        &self.rate
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    pub fn into_body(self) -> T {
        self.body
    }

    pub fn into_parts(self) -> (Pagination, Rate, T) {
        (self.pagination, self.rate, self.body)
    }
}

#[derive(Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitHub API,
    /// but can be overridden for use with GitHub Enterprise. Always
    /// terminated with a trailing slash.
    base_url: String,

    /// User agent string sent when communicating with GitHub APIs
    user_agent: String,

    /// API token to use when issuing requests to GitHub. Without one the
    /// client only issues read-only requests.
    github_api_token: Option<String>,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Executes `request` and decodes the response body.
    ///
    /// Only the first page of a paged request is fetched, use [`Client::execute_paged`] to
    /// collect more.
    pub async fn execute<M: RwMode, T: DeserializeOwned>(
        &self,
        request: &Request<M, T>,
    ) -> Result<Response<T>> {
        self.authorize(M::CAPABILITY)?;

        let url = request.url(&self.base_url)?;
        let response = self.send(request, url).await?;

        self.json(response).await
    }

    /// Executes a paged `request`, following `next` links until its fetch count is satisfied or
    /// there are no pages left. The returned pagination and rate are those of the last page.
    ///
    /// Links to a host other than the api's are refused with [`Error::ForeignPaginationLink`].
    pub async fn execute_paged<M: RwMode, T: DeserializeOwned>(
        &self,
        request: &Request<M, Vec<T>>,
    ) -> Result<Response<Vec<T>>> {
        self.authorize(M::CAPABILITY)?;

        let fetch_count = request.fetch_count().unwrap_or_default();
        let mut url = request.url(&self.base_url)?;
        let origin = url.origin();
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);

        let mut items = Vec::new();
        loop {
            let response = self.send(request, url).await?;
            let (pagination, rate, page) = self.json::<Vec<T>>(response).await?.into_parts();
            items.extend(page);

            match pagination.next_url {
                Some(next) if !fetch_count.is_satisfied_by(items.len()) => {
                    // The client's default headers carry the api token
                    if next.origin() != origin {
                        return Err(Error::ForeignPaginationLink(next));
                    }

                    trace!("{} items fetched, following {}", items.len(), next);
                    url = next;
                }
                _ => return Ok(Response::new(pagination, rate, items)),
            }
        }
    }

    pub fn repos(&self) -> RepositoryClient {
        RepositoryClient::new(self)
    }

    fn authorize(&self, capability: Capability) -> Result<()> {
        match capability {
            Capability::ReadWrite if self.github_api_token.is_none() => Err(Error::ReadOnlyClient),
            _ => Ok(()),
        }
    }

    async fn send<M, T>(&self, request: &Request<M, T>, url: Url) -> Result<reqwest::Response> {
        debug!("Github Request: {} {}", request.method(), url);

        let mut builder = self
            .client
            .request(request.method().into(), url)
            .header(header::ACCEPT, MEDIA_TYPE_V3);

        if let Some(body) = request.body() {
            builder = builder
                .header(header::CONTENT_TYPE, MEDIA_TYPE_JSON)
                .body(body.to_vec());
        }

        Ok(builder.send().await?)
    }

    // Process a response recieved from Github. This checks for things like hitting rate limits,
    // etc., and then deserializes the json response.
    async fn json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<Response<T>> {
        debug!("Github Response: {:#?}", response);

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::FORBIDDEN && Rate::is_exhausted(response.headers()) {
                return Err(Error::RateLimit);
            }

            let payload = response.text().await?;
            let error = serde_json::from_str(&payload).unwrap_or_else(|_| GithubClientError {
                message: Some(payload),
                ..GithubClientError::default()
            });
            return Err(Error::GithubClientError(status, error));
        }

        let pagination = Pagination::from_headers(response.headers());
        let rate = Rate::from_headers(response.headers());
        let payload = response.text().await?;

        Ok(Response::new(pagination, rate, decode(&payload)?))
    }
}

// Endpoints without content (e.g. `204 No Content`) decode as `null`, which is what `()` expects
fn decode<T: DeserializeOwned>(payload: &str) -> Result<T> {
    let payload = if payload.trim().is_empty() {
        "null"
    } else {
        payload
    };

    serde_json::from_str(payload).map_err(|e| {
        debug!("Error deserializing: {}\nContent: {}", e, payload);
        e.into()
    })
}
