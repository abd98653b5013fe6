//! Inert descriptions of GitHub API requests.
//!
//! A [`Request`] only says *what* to ask for: method, path segments, query string and an encoded
//! body. Executing it is the job of [`Client`](crate::client::Client).

use crate::client::{Error, Result};
use serde::Serialize;
use std::{fmt, marker::PhantomData};
use url::Url;

/// Already encoded path segments, joined with `/` when rendered
pub type Paths = Vec<String>;

/// Query parameters in order. A `None` value renders as a bare key.
pub type QueryString = Vec<(String, Option<String>)>;

/// Whether a request only reads state or may change it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    ReadOnly,
    ReadWrite,
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ReadOnly {}
    impl Sealed for super::ReadWrite {}
}

/// Type level capability of a [`Request`]
pub trait RwMode: sealed::Sealed {
    const CAPABILITY: Capability;
}

/// Marker for requests which don't modify anything
#[derive(Debug)]
pub enum ReadOnly {}

/// Marker for requests which create, change or delete resources
#[derive(Debug)]
pub enum ReadWrite {}

impl RwMode for ReadOnly {
    const CAPABILITY: Capability = Capability::ReadOnly;
}

impl RwMode for ReadWrite {
    const CAPABILITY: Capability = Capability::ReadWrite;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// How many items a paged request should collect before the executor stops following pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchCount {
    AtLeast(usize),
    All,
}

impl FetchCount {
    /// Returns true once `fetched` items satisfy this count
    pub fn is_satisfied_by(&self, fetched: usize) -> bool {
        match self {
            FetchCount::AtLeast(n) => fetched >= *n,
            FetchCount::All => false,
        }
    }
}

impl Default for FetchCount {
    fn default() -> Self {
        FetchCount::All
    }
}

/// A request against the GitHub API which has not been executed yet.
///
/// `M` is the capability ([`ReadOnly`] or [`ReadWrite`]) and `T` the type the response body
/// decodes into, `()` for endpoints returning no content.
pub struct Request<M, T> {
    method: Method,
    paths: Paths,
    query: QueryString,
    body: Option<Vec<u8>>,
    fetch_count: Option<FetchCount>,
    marker: PhantomData<(fn() -> M, fn() -> T)>,
}

/// A plain `GET` request
pub fn query<T>(paths: Paths, query: QueryString) -> Request<ReadOnly, T> {
    Request {
        method: Method::Get,
        paths,
        query,
        body: None,
        fetch_count: None,
        marker: PhantomData,
    }
}

/// A `GET` request whose results may span several pages
pub fn paged_query<T>(
    paths: Paths,
    query: QueryString,
    fetch_count: FetchCount,
) -> Request<ReadOnly, Vec<T>> {
    Request {
        method: Method::Get,
        paths,
        query,
        body: None,
        fetch_count: Some(fetch_count),
        marker: PhantomData,
    }
}

/// A mutating request. A `None` body sends no payload at all.
pub fn command<T>(method: Method, paths: Paths, body: Option<Vec<u8>>) -> Request<ReadWrite, T> {
    Request {
        method,
        paths,
        query: Vec::new(),
        body,
        fetch_count: None,
        marker: PhantomData,
    }
}

/// Encodes a request payload as JSON
pub(crate) fn encode<P: Serialize>(payload: &P) -> Vec<u8> {
    // Payloads are plain structs with string keys, which serde_json always encodes
    serde_json::to_vec(payload).expect("request payloads always encode as JSON")
}

impl<M: RwMode, T> Request<M, T> {
    pub fn capability(&self) -> Capability {
        M::CAPABILITY
    }
}

impl<M, T> Request<M, T> {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn query(&self) -> &[(String, Option<String>)] {
        &self.query
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn fetch_count(&self) -> Option<FetchCount> {
        self.fetch_count
    }

    pub fn is_paged(&self) -> bool {
        self.fetch_count.is_some()
    }

    /// The path relative to the API root, e.g. `repos/octocat/Hello-World`
    pub fn path(&self) -> String {
        self.paths.join("/")
    }

    /// Renders the full URL of this request against `base_url`, which must end with a `/`.
    ///
    /// Fails on empty and dot segments, which url parsing would collapse into a different path.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        if let Some(segment) = self.paths.iter().find(|s| !is_plain_segment(s)) {
            return Err(Error::InvalidPathSegment(segment.clone()));
        }

        let mut url = Url::parse(base_url)?.join(&self.path())?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                match value {
                    Some(value) => pairs.append_pair(key, value),
                    None => pairs.append_key_only(key),
                };
            }
        }

        Ok(url)
    }
}

// `.` and `..` are resolved as dot segments even when percent-encoded, in either case
fn is_plain_segment(segment: &str) -> bool {
    match urlencoding::decode(segment) {
        Ok(decoded) => !(decoded.is_empty() || decoded == "." || decoded == ".."),
        Err(_) => !segment.is_empty(),
    }
}

impl<M, T> fmt::Debug for Request<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("paths", &self.paths)
            .field("query", &self.query)
            .field("body", &self.body.as_deref().map(String::from_utf8_lossy))
            .field("fetch_count", &self.fetch_count)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::{command, paged_query, query, Capability, Error, FetchCount, Method, Request};

    fn paths(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn query_constructor() {
        let request: Request<_, ()> = query(paths(&["repos", "octocat", "Hello-World"]), vec![]);

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.path(), "repos/octocat/Hello-World");
        assert_eq!(request.capability(), Capability::ReadOnly);
        assert!(request.body().is_none());
        assert!(!request.is_paged());
    }

    #[test]
    fn paged_constructor_keeps_fetch_count() {
        let request = paged_query::<()>(paths(&["user", "repos"]), vec![], FetchCount::AtLeast(7));

        assert!(request.is_paged());
        assert_eq!(request.fetch_count(), Some(FetchCount::AtLeast(7)));
        assert_eq!(request.capability(), Capability::ReadOnly);
    }

    #[test]
    fn command_constructor() {
        let request: Request<_, ()> = command(
            Method::Post,
            paths(&["user", "repos"]),
            Some(b"{}".to_vec()),
        );

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.capability(), Capability::ReadWrite);
        assert_eq!(request.body(), Some(&b"{}"[..]));
        assert!(request.query().is_empty());
    }

    #[test]
    fn url_rendering() {
        let request: Request<_, ()> = query(
            paths(&["repos", "octocat", "my%20repo", "contributors"]),
            vec![
                ("anon".to_owned(), Some("true".to_owned())),
                ("flag".to_owned(), None),
            ],
        );

        let url = request.url("https://api.github.com/").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octocat/my%20repo/contributors?anon=true&flag"
        );

        let url = request.url("https://github.example.com/api/v3/").unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.example.com/api/v3/repos/octocat/my%20repo/contributors?anon=true&flag"
        );
    }

    #[test]
    fn dot_segments_are_rejected() {
        for segment in &[".", "..", "%2e", "%2E%2e", ".%2E", ""] {
            let request: Request<_, ()> = query(paths(&["repos", *segment, "user"]), vec![]);

            match request.url("https://api.github.com/") {
                Err(Error::InvalidPathSegment(s)) => assert_eq!(&s, segment),
                other => panic!("{:?} rendered as {:?}", segment, other),
            }
        }

        // Dots inside a name are fine
        let dotted = paths(&["repos", "octocat", "...", ".github"]);
        let request: Request<_, ()> = query(dotted, vec![]);
        assert_eq!(
            request.url("https://api.github.com/").unwrap().as_str(),
            "https://api.github.com/repos/octocat/.../.github"
        );
    }

    #[test]
    fn methods() {
        let methods = [Method::Get, Method::Post, Method::Patch, Method::Delete];
        let names: Vec<_> = methods.iter().map(Method::as_str).collect();
        assert_eq!(names, ["GET", "POST", "PATCH", "DELETE"]);

        for method in &methods {
            assert_eq!(reqwest::Method::from(*method).as_str(), method.as_str());
        }
    }

    #[test]
    fn fetch_count() {
        assert!(FetchCount::AtLeast(3).is_satisfied_by(3));
        assert!(!FetchCount::AtLeast(3).is_satisfied_by(2));
        assert!(!FetchCount::All.is_satisfied_by(usize::MAX));
    }
}
