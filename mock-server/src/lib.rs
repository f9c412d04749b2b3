use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub like_count: u32,
    pub comment_count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub user_name: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdatePost {
    pub content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub user_name: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateComment {
    pub content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub user_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlikeQuery {
    pub user_name: Option<String>,
}

#[derive(Clone, Debug)]
struct PostRow {
    id: u64,
    user_name: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// In-memory tables. Like and comment counts are derived, never stored.
#[derive(Debug, Default)]
pub struct Tables {
    posts: BTreeMap<u64, PostRow>,
    comments: BTreeMap<u64, Comment>,
    likes: BTreeSet<(u64, String)>,
    last_post_id: u64,
    last_comment_id: u64,
}

impl Tables {
    fn post(&self, id: u64) -> Result<Post, Failure> {
        self.posts
            .get(&id)
            .map(|row| self.view(row))
            .ok_or(Failure::post_not_found())
    }

    fn view(&self, row: &PostRow) -> Post {
        let like_count = self.likes.iter().filter(|(post_id, _)| *post_id == row.id).count();
        let comment_count = self.comments.values().filter(|c| c.post_id == row.id).count();
        Post {
            id: row.id,
            user_name: row.user_name.clone(),
            content: row.content.clone(),
            created_at: row.created_at,
            updated_at: row.updated_at,
            like_count: like_count as u32,
            comment_count: comment_count as u32,
        }
    }

    fn require_post(&self, id: u64) -> Result<(), Failure> {
        if self.posts.contains_key(&id) {
            Ok(())
        } else {
            Err(Failure::post_not_found())
        }
    }

    fn comment_mut(&mut self, post_id: u64, comment_id: u64) -> Result<&mut Comment, Failure> {
        self.comments
            .get_mut(&comment_id)
            .filter(|c| c.post_id == post_id)
            .ok_or(Failure::comment_not_found())
    }
}

/// Error response: a status plus `{"message": ...}`.
#[derive(Debug)]
pub struct Failure {
    status: StatusCode,
    message: &'static str,
}

impl Failure {
    fn post_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "post not found",
        }
    }

    fn comment_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "comment or post not found",
        }
    }

    fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "message": self.message }))).into_response()
    }
}

pub type Db = Arc<RwLock<Tables>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Tables::default()));
    Router::new().nest("/api", routes()).with_state(db)
}

fn routes() -> Router<Db> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).patch(update_post).delete(delete_post),
        )
        .route("/posts/{id}/comments", get(list_comments).post(create_comment))
        .route(
            "/posts/{id}/comments/{comment_id}",
            get(get_comment).patch(update_comment).delete(delete_comment),
        )
        .route("/posts/{id}/likes", post(like_post).delete(unlike_post))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let tables = db.read().await;
    Json(tables.posts.values().rev().map(|row| tables.view(row)).collect())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<CreatePost>,
) -> (StatusCode, Json<Post>) {
    let mut tables = db.write().await;
    tables.last_post_id += 1;
    let now = Utc::now();
    let row = PostRow {
        id: tables.last_post_id,
        user_name: input.user_name,
        content: input.content,
        created_at: now,
        updated_at: now,
    };
    let post = tables.view(&row);
    tables.posts.insert(row.id, row);
    info!(id = post.id, user = %post.user_name, "post created");
    (StatusCode::CREATED, Json(post))
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, Failure> {
    db.read().await.post(id).map(Json)
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdatePost>,
) -> Result<Json<Post>, Failure> {
    let mut tables = db.write().await;
    let row = tables.posts.get_mut(&id).ok_or(Failure::post_not_found())?;
    row.content = input.content;
    row.updated_at = Utc::now();
    tables.post(id).map(Json)
}

async fn delete_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, Failure> {
    let mut tables = db.write().await;
    tables.posts.remove(&id).ok_or(Failure::post_not_found())?;
    tables.comments.retain(|_, c| c.post_id != id);
    tables.likes.retain(|(post_id, _)| *post_id != id);
    info!(id, "post deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_comments(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Comment>>, Failure> {
    let tables = db.read().await;
    tables.require_post(id)?;
    Ok(Json(
        tables
            .comments
            .values()
            .filter(|c| c.post_id == id)
            .cloned()
            .collect(),
    ))
}

async fn create_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<CreateComment>,
) -> Result<(StatusCode, Json<Comment>), Failure> {
    let mut tables = db.write().await;
    tables.require_post(id)?;
    tables.last_comment_id += 1;
    let now = Utc::now();
    let comment = Comment {
        id: tables.last_comment_id,
        post_id: id,
        user_name: input.user_name,
        content: input.content,
        created_at: now,
        updated_at: now,
    };
    tables.comments.insert(comment.id, comment.clone());
    info!(post_id = id, comment_id = comment.id, "comment created");
    Ok((StatusCode::CREATED, Json(comment)))
}

async fn get_comment(
    State(db): State<Db>,
    Path((id, comment_id)): Path<(u64, u64)>,
) -> Result<Json<Comment>, Failure> {
    let tables = db.read().await;
    tables
        .comments
        .get(&comment_id)
        .filter(|c| c.post_id == id)
        .cloned()
        .map(Json)
        .ok_or(Failure::comment_not_found())
}

async fn update_comment(
    State(db): State<Db>,
    Path((id, comment_id)): Path<(u64, u64)>,
    Json(input): Json<UpdateComment>,
) -> Result<Json<Comment>, Failure> {
    let mut tables = db.write().await;
    let comment = tables.comment_mut(id, comment_id)?;
    comment.content = input.content;
    comment.updated_at = Utc::now();
    Ok(Json(comment.clone()))
}

async fn delete_comment(
    State(db): State<Db>,
    Path((id, comment_id)): Path<(u64, u64)>,
) -> Result<StatusCode, Failure> {
    let mut tables = db.write().await;
    tables.comment_mut(id, comment_id)?;
    tables.comments.remove(&comment_id);
    Ok(StatusCode::NO_CONTENT)
}

async fn like_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<LikeRequest>,
) -> Result<StatusCode, Failure> {
    let mut tables = db.write().await;
    tables.require_post(id)?;
    if !tables.likes.insert((id, input.user_name)) {
        return Err(Failure::bad_request("already liked"));
    }
    Ok(StatusCode::CREATED)
}

async fn unlike_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Query(query): Query<UnlikeQuery>,
) -> Result<StatusCode, Failure> {
    let user_name = query
        .user_name
        .filter(|name| !name.is_empty())
        .ok_or(Failure::bad_request("userName query parameter is required"))?;
    let mut tables = db.write().await;
    tables.require_post(id)?;
    if !tables.likes.remove(&(id, user_name)) {
        return Err(Failure::bad_request("not liked"));
    }
    Ok(StatusCode::NO_CONTENT)
}
