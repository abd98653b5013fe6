use crate::client::HEADER_LINK;
use url::Url;

/// Represents `Pagination` information from a Github API request
#[derive(Debug, Default)]
pub struct Pagination {
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub first_page: Option<usize>,
    pub last_page: Option<usize>,

    /// Full url of the next page, used to continue a paged request
    pub next_url: Option<Url>,
}

impl Pagination {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut pagination = Self::default();

        let links = if let Some(links) = headers.get(HEADER_LINK).and_then(|h| h.to_str().ok()) {
            links
        } else {
            return pagination;
        };

        for link in links.split(',') {
            let segments: Vec<&str> = link.split(';').map(str::trim).collect();

            // Skip if we don't at least have href and rel
            if segments.len() < 2 {
                continue;
            }

            // Check if href segment is well formed and a valid url format
            let url = if segments[0].starts_with('<') && segments[0].ends_with('>') {
                if let Ok(url) = Url::parse(&segments[0][1..segments[0].len() - 1]) {
                    url
                } else {
                    continue;
                }
            } else {
                continue;
            };

            let page = url
                .query_pairs()
                .find_map(|(k, v)| if k == "page" { v.parse().ok() } else { None });

            for rel in &segments[1..] {
                match rel.trim() {
                    "rel=\"next\"" => {
                        pagination.next_page = page;
                        pagination.next_url = Some(url.clone());
                    }
                    "rel=\"prev\"" => {
                        pagination.prev_page = page;
                    }
                    "rel=\"first\"" => {
                        pagination.first_page = page;
                    }
                    "rel=\"last\"" => {
                        pagination.last_page = page;
                    }
                    _ => {}
                }
            }
        }

        pagination
    }
}

#[cfg(test)]
mod test {
    use super::{Pagination, HEADER_LINK};
    use reqwest::header::HeaderMap;

    #[test]
    fn pagination() {
        let mut headers = HeaderMap::new();
        let link = r#"<https://api.github.com/user/repos?page=3&per_page=100>; rel="next", <https://api.github.com/user/repos?page=50&per_page=100>; rel="last""#;
        headers.insert(HEADER_LINK, link.parse().unwrap());

        let p = Pagination::from_headers(&headers);
        assert_eq!(p.next_page, Some(3));
        assert_eq!(p.last_page, Some(50));
        assert_eq!(
            p.next_url.unwrap().as_str(),
            "https://api.github.com/user/repos?page=3&per_page=100"
        );
    }

    #[test]
    fn cursor_based_next_link() {
        let mut headers = HeaderMap::new();
        let link = r#"<https://api.github.com/repositories/1/contributors?after=Y3Vyc29y&per_page=100>; rel="next""#;
        headers.insert(HEADER_LINK, link.parse().unwrap());

        let p = Pagination::from_headers(&headers);
        assert_eq!(p.next_page, None);
        assert!(p.next_url.is_some());
    }

    #[test]
    fn last_page_has_no_next() {
        let mut headers = HeaderMap::new();
        let link = r#"<https://api.github.com/user/repos?page=1&per_page=100>; rel="first", <https://api.github.com/user/repos?page=49&per_page=100>; rel="prev""#;
        headers.insert(HEADER_LINK, link.parse().unwrap());

        let p = Pagination::from_headers(&headers);
        assert!(p.next_url.is_none());
        assert_eq!(p.first_page, Some(1));
        assert_eq!(p.prev_page, Some(49));

        assert!(Pagination::from_headers(&HeaderMap::new()).next_url.is_none());
    }
}
