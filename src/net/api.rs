//! Typed wrappers for the blog REST endpoints.
//!
//! Each method only describes its endpoint and payload; credentials, error
//! notices and 401 handling live in the [`RequestPipeline`].
//!
//! ERROR HANDLING
//! ==============
//! Methods return `Result<_, ApiError>`. By the time a caller sees the error
//! it has already been shown to the user, so pages only react to it (reset a
//! button, keep a form open) rather than report it again.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::IgnoredAny;

use super::pipeline::RequestPipeline;
use super::transport::HttpRequest;
use super::types::{
    ApiError, Article, ArticleDraft, ArticlePage, ArticleQuery, Credentials, LoginData, PasswordChange, Registration,
    UserInfo,
};
use crate::state::session::SessionStore;

fn article_endpoint(id: u64) -> String {
    format!("/article/{id}")
}

/// Client for the blog API.
#[derive(Clone)]
pub struct ApiClient {
    pipeline: RequestPipeline,
}

impl ApiClient {
    #[must_use]
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        self.pipeline.session()
    }

    #[must_use]
    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    /// `POST /user/login`. Does not touch the session; see
    /// [`crate::state::auth::sign_in`].
    ///
    /// # Errors
    ///
    /// Returns the pipeline error. Wrong credentials come back as HTTP 401
    /// with an envelope; since the request carries no token this is `Api`
    /// with the server's reason, not a session expiry.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginData, ApiError> {
        self.pipeline.send(HttpRequest::post("/user/login").with_json(credentials)).await
    }

    /// `POST /user/register`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error (a taken username arrives as `Api`).
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.send_ignoring_data(HttpRequest::post("/user/register").with_json(registration)).await
    }

    /// `GET /user/info` for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn user_info(&self) -> Result<UserInfo, ApiError> {
        self.pipeline.send(HttpRequest::get("/user/info")).await
    }

    /// `PUT /user/password`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.send_ignoring_data(HttpRequest::put("/user/password").with_json(change)).await
    }

    /// `GET /article/list` with pagination and optional keyword.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn list_articles(&self, query: &ArticleQuery) -> Result<ArticlePage, ApiError> {
        self.pipeline.send(HttpRequest::get("/article/list").with_query(query.to_pairs())).await
    }

    /// `GET /article/:id`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error (a missing article arrives as `Api` 404).
    pub async fn article(&self, id: u64) -> Result<Article, ApiError> {
        self.pipeline.send(HttpRequest::get(article_endpoint(id))).await
    }

    /// `POST /article`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn create_article(&self, draft: &ArticleDraft) -> Result<(), ApiError> {
        self.send_ignoring_data(HttpRequest::post("/article").with_json(draft)).await
    }

    /// `PUT /article/:id`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn update_article(&self, id: u64, draft: &ArticleDraft) -> Result<(), ApiError> {
        self.send_ignoring_data(HttpRequest::put(article_endpoint(id)).with_json(draft)).await
    }

    /// `DELETE /article/:id`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn delete_article(&self, id: u64) -> Result<(), ApiError> {
        self.send_ignoring_data(HttpRequest::delete(article_endpoint(id))).await
    }

    /// Write endpoints answer with `data: null` or an echo of the record;
    /// either way the caller only needs success.
    async fn send_ignoring_data(&self, request: HttpRequest) -> Result<(), ApiError> {
        self.pipeline.send::<IgnoredAny>(request).await.map(|_| ())
    }
}
