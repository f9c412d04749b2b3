//! One-call API operations over an injected transport.
//!
//! `PostApi` pairs a `PostClient` with a `Transport` so callers get
//! `list()` / `create()` / `delete()` style calls instead of driving the
//! build/execute/parse cycle by hand. Every call is fire-once.

use tracing::{debug, warn};

use crate::client::PostClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Comment, CreateComment, CreatePost, Post, PostId, UpdatePost};

#[derive(Debug, Clone)]
pub struct PostApi<T> {
    client: PostClient,
    transport: T,
}

impl<T: Transport> PostApi<T> {
    pub fn new(client: PostClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &PostClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.send(self.client.build_list_posts())?;
        self.client.parse_list_posts(response)
    }

    pub fn get(&self, id: PostId) -> Result<Post, ApiError> {
        let response = self.send(self.client.build_get_post(id))?;
        self.client.parse_get_post(response)
    }

    pub fn create(&self, input: &CreatePost) -> Result<Post, ApiError> {
        let response = self.send(self.client.build_create_post(input)?)?;
        self.client.parse_create_post(response)
    }

    pub fn update(&self, id: PostId, input: &UpdatePost) -> Result<Post, ApiError> {
        let response = self.send(self.client.build_update_post(id, input)?)?;
        self.client.parse_update_post(response)
    }

    pub fn delete(&self, id: PostId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_post(id))?;
        self.client.parse_delete_post(response)
    }

    pub fn comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError> {
        let response = self.send(self.client.build_list_comments(post_id))?;
        self.client.parse_list_comments(response)
    }

    pub fn create_comment(&self, post_id: PostId, input: &CreateComment) -> Result<Comment, ApiError> {
        let response = self.send(self.client.build_create_comment(post_id, input)?)?;
        self.client.parse_create_comment(response)
    }

    pub fn like(&self, post_id: PostId, user_name: &str) -> Result<(), ApiError> {
        let response = self.send(self.client.build_like_post(post_id, user_name)?)?;
        self.client.parse_like_post(response)
    }

    pub fn unlike(&self, post_id: PostId, user_name: &str) -> Result<(), ApiError> {
        let response = self.send(self.client.build_unlike_post(post_id, user_name))?;
        self.client.parse_unlike_post(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        debug!(method, path = %path, "sending request");
        match self.transport.execute(request) {
            Ok(response) => {
                if response.is_success() {
                    debug!(method, path = %path, status = response.status, "request succeeded");
                } else {
                    warn!(
                        method,
                        path = %path,
                        status = response.status,
                        body = %response.body,
                        "request failed"
                    );
                }
                Ok(response)
            }
            Err(err) => {
                warn!(method, path = %path, error = %err, "transport failed");
                Err(err)
            }
        }
    }
}
