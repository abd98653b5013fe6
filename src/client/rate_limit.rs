use crate::client::{HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};
use serde::Deserialize;

/// Rate limit status reported alongside every API response
#[derive(Debug, Default, Deserialize)]
pub struct Rate {
    pub limit: usize,
    pub remaining: usize,
    /// UTC epoch seconds at which the current window resets
    pub reset: usize,
}

impl Rate {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut rate = Self::default();

        if let Some(limit) = header_value(headers, HEADER_RATE_LIMIT) {
            rate.limit = limit;
        };

        if let Some(remaining) = header_value(headers, HEADER_RATE_REMAINING) {
            rate.remaining = remaining;
        };

        if let Some(reset) = header_value(headers, HEADER_RATE_RESET) {
            rate.reset = reset;
        };

        rate
    }

    /// Returns true if the headers announce a limit and no requests remain in this window
    pub(super) fn is_exhausted(headers: &reqwest::header::HeaderMap) -> bool {
        header_value(headers, HEADER_RATE_REMAINING) == Some(0)
    }
}

fn header_value(headers: &reqwest::header::HeaderMap, name: &str) -> Option<usize> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse().ok())
}
