//! Stateless HTTP request builder and response parser for the feed API.
//!
//! # Design
//! `PostClient` holds only a `base_url` (which already includes the `/api`
//! prefix) and carries no mutable state between calls. Each operation is
//! split into a `build_*` method that produces an `HttpRequest` and a
//! `parse_*` method that consumes an `HttpResponse`. The caller executes the
//! actual HTTP round-trip, keeping the core deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Comment, CreateComment, CreatePost, LikeRequest, Post, PostId, UpdatePost};

/// Synchronous, stateless client for the post resource.
#[derive(Debug, Clone)]
pub struct PostClient {
    base_url: String,
}

impl PostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/posts".to_string())
    }

    pub fn build_get_post(&self, id: PostId) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/posts/{id}"))
    }

    pub fn build_create_post(&self, input: &CreatePost) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/posts".to_string(), input)
    }

    pub fn build_update_post(&self, id: PostId, input: &UpdatePost) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Patch, format!("/posts/{id}"), input)
    }

    pub fn build_delete_post(&self, id: PostId) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("/posts/{id}"))
    }

    pub fn build_list_comments(&self, post_id: PostId) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/posts/{post_id}/comments"))
    }

    pub fn build_create_comment(
        &self,
        post_id: PostId,
        input: &CreateComment,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, format!("/posts/{post_id}/comments"), input)
    }

    pub fn build_like_post(&self, post_id: PostId, user_name: &str) -> Result<HttpRequest, ApiError> {
        let input = LikeRequest {
            user_name: user_name.to_string(),
        };
        self.with_json(HttpMethod::Post, format!("/posts/{post_id}/likes"), &input)
    }

    pub fn build_unlike_post(&self, post_id: PostId, user_name: &str) -> HttpRequest {
        self.bare(
            HttpMethod::Delete,
            format!(
                "/posts/{post_id}/likes?userName={}",
                urlencoding::encode(user_name)
            ),
        )
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        decode(response)
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        decode(response)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        decode(response)
    }

    pub fn parse_update_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        decode(response)
    }

    /// 204 and every other 2xx count as success; the body is ignored.
    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_list_comments(&self, response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
        decode(response)
    }

    pub fn parse_create_comment(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        decode(response)
    }

    pub fn parse_like_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_unlike_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<B: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST_JSON: &str = r#"{"id":1,"userName":"alice","content":"hi","createdAt":"2025-04-01T09:30:00Z","updatedAt":"2025-04-01T09:30:00Z","likeCount":0,"commentCount":0}"#;

    fn client() -> PostClient {
        PostClient::new("http://localhost:8000/api")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_posts_produces_correct_request() {
        let req = client().build_list_posts();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/posts");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_post_produces_correct_request() {
        let req = client().build_get_post(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/posts/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_post_produces_correct_request() {
        let input = CreatePost {
            user_name: "alice".to_string(),
            content: "hi".to_string(),
        };
        let req = client().build_create_post(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/api/posts");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userName"], "alice");
        assert_eq!(body["content"], "hi");
    }

    #[test]
    fn build_update_post_uses_patch_and_skips_absent_fields() {
        let req = client().build_update_post(3, &UpdatePost::default()).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "http://localhost:8000/api/posts/3");
        assert_eq!(req.body.as_deref(), Some("{}"));

        let input = UpdatePost {
            content: Some("edited".to_string()),
        };
        let req = client().build_update_post(3, &input).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["content"], "edited");
    }

    #[test]
    fn build_delete_post_produces_correct_request() {
        let req = client().build_delete_post(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8000/api/posts/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_comment_requests_target_the_nested_resource() {
        let req = client().build_list_comments(5);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/posts/5/comments");

        let input = CreateComment {
            user_name: "bob".to_string(),
            content: "nice".to_string(),
        };
        let req = client().build_create_comment(5, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/api/posts/5/comments");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"userName": "bob", "content": "nice"}));
    }

    #[test]
    fn unlike_encodes_user_name_in_query() {
        let req = client().build_unlike_post(2, "kim & lee");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.path,
            "http://localhost:8000/api/posts/2/likes?userName=kim%20%26%20lee"
        );
    }

    #[test]
    fn like_sends_user_name_body() {
        let req = client().build_like_post(2, "carol").unwrap();
        assert_eq!(req.path, "http://localhost:8000/api/posts/2/likes");
        assert_eq!(req.body.as_deref(), Some(r#"{"userName":"carol"}"#));
    }

    #[test]
    fn parse_list_posts_success() {
        let posts = client()
            .parse_list_posts(response(200, &format!("[{POST_JSON}]")))
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_name, "alice");
    }

    #[test]
    fn parse_list_posts_empty() {
        let posts = client().parse_list_posts(response(200, "[]")).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn parse_list_posts_server_error() {
        let err = client().parse_list_posts(response(503, "down")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 503, .. }));
    }

    #[test]
    fn parse_get_post_not_found() {
        let err = client().parse_get_post(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_post_accepts_201() {
        let post = client().parse_create_post(response(201, POST_JSON)).unwrap();
        assert_eq!(post.content, "hi");
    }

    #[test]
    fn parse_create_post_carries_error_body() {
        let err = client()
            .parse_create_post(response(422, r#"{"detail":"content required"}"#))
            .unwrap_err();
        match err {
            ApiError::HttpError { status, body } => {
                assert_eq!(status, 422);
                assert!(body.contains("content required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_delete_post_accepts_204_and_200() {
        assert!(client().parse_delete_post(response(204, "")).is_ok());
        assert!(client().parse_delete_post(response(200, "{}")).is_ok());
    }

    #[test]
    fn parse_delete_post_server_error() {
        let err = client().parse_delete_post(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_like_post_already_liked() {
        let err = client()
            .parse_like_post(response(400, r#"{"message":"already liked"}"#))
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PostClient::new("http://localhost:8000/api/");
        let req = client.build_list_posts();
        assert_eq!(req.path, "http://localhost:8000/api/posts");
    }

    #[test]
    fn parse_list_posts_bad_json() {
        let err = client().parse_list_posts(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
