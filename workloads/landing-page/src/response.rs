//! Status, headers and body mode for a page request.

use physio_core::{Method, RequestContext};

use crate::page::cache_control;
use crate::state::PageState;

/// Methods the page answers.
pub const ALLOWED_METHODS: &str = "GET, HEAD";
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Whether the page body follows the headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    Stream,
    Empty,
}

/// Everything decided before the first byte is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePlan {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: BodyMode,
}

impl ResponsePlan {
    /// Plan the response. Every plan echoes the request id.
    pub fn for_request(ctx: &RequestContext, state: &PageState) -> Self {
        let request_id = ("x-request-id".to_string(), ctx.request_id.to_string());

        match ctx.method {
            Method::Get | Method::Head => Self {
                status: 200,
                headers: vec![
                    ("content-type".to_string(), HTML_CONTENT_TYPE.to_string()),
                    request_id,
                    ("cache-control".to_string(), cache_control(state).to_string()),
                ],
                body: if ctx.method == Method::Head {
                    BodyMode::Empty
                } else {
                    BodyMode::Stream
                },
            },
            _ => Self {
                status: 405,
                headers: vec![("allow".to_string(), ALLOWED_METHODS.to_string()), request_id],
                body: BodyMode::Empty,
            },
        }
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Headers in the `(name, bytes)` form Spin's `Fields` takes.
    pub fn header_bytes(&self) -> Vec<(String, Vec<u8>)> {
        self.headers
            .iter()
            .map(|(k, v)| (k.clone(), v.as_bytes().to_vec()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PRIVATE_CACHE, PUBLIC_CACHE};
    use physio_content::PageContent;
    use physio_core::RequestId;

    fn plan(method: Method, path: &str) -> ResponsePlan {
        let ctx = RequestContext::from_path_with_query(method, path);
        let state = PageState::from_query(&ctx, PageContent::standard());
        ResponsePlan::for_request(&ctx, &state)
    }

    // === Method Tests ===

    #[test]
    fn test_get_streams_html() {
        let plan = plan(Method::Get, "/");
        assert_eq!(plan.status, 200);
        assert_eq!(plan.body, BodyMode::Stream);
        assert_eq!(plan.header("Content-Type"), Some(HTML_CONTENT_TYPE));
        assert_eq!(plan.header("cache-control"), Some(PUBLIC_CACHE));
        assert_eq!(plan.header("allow"), None);
    }

    #[test]
    fn test_head_sends_headers_only() {
        let plan = plan(Method::Head, "/?faq=2");
        assert_eq!(plan.status, 200);
        assert_eq!(plan.body, BodyMode::Empty);
        assert_eq!(plan.header("content-type"), Some(HTML_CONTENT_TYPE));
        assert_eq!(plan.header("cache-control"), Some(PRIVATE_CACHE));
    }

    #[test]
    fn test_other_methods_not_allowed() {
        for method in [Method::Post, Method::Put, Method::Delete, Method::Patch, Method::Options] {
            let plan = plan(method, "/");
            assert_eq!(plan.status, 405, "{}", method);
            assert_eq!(plan.body, BodyMode::Empty);
            assert_eq!(plan.header("allow"), Some("GET, HEAD"));
            assert_eq!(plan.header("content-type"), None);
        }
    }

    // === Request Id Tests ===

    #[test]
    fn test_upstream_request_id_echoed() {
        for method in [Method::Get, Method::Post] {
            let ctx = RequestContext::from_path_with_query(method, "/")
                .with_upstream_request_id(Some("edge-7"));
            let state = PageState::from_query(&ctx, PageContent::standard());
            let plan = ResponsePlan::for_request(&ctx, &state);
            assert_eq!(plan.header("x-request-id"), Some("edge-7"));
        }
    }

    #[test]
    fn test_generated_request_id_echoed() {
        let ctx = RequestContext::from_path_with_query(Method::Get, "/");
        let expected = ctx.request_id.to_string();
        let plan = ResponsePlan::for_request(&ctx, &PageState::default());
        assert_eq!(plan.header("x-request-id"), Some(expected.as_str()));
        assert_ne!(ctx.request_id, RequestId::from_string(""));
    }

    #[test]
    fn test_header_bytes_match_headers() {
        let plan = plan(Method::Post, "/");
        assert_eq!(
            plan.header_bytes()[0],
            ("allow".to_string(), b"GET, HEAD".to_vec())
        );
    }
}
