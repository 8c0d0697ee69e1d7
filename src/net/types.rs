//! Wire DTOs for the blog API and the client-side error type.
//!
//! DESIGN
//! ======
//! Every response is wrapped in an [`Envelope`]. Ids and counters are
//! decoded leniently (integers or integral floats) because the server
//! serializes some numeric columns through generic JSON maps. Persisted
//! models embed ORM base fields with capitalized keys (`ID`, `CreatedAt`),
//! accepted here as aliases.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Envelope `code` that marks a successful call.
pub const SUCCESS_CODE: i64 = 200;

// =============================================================================
// ENVELOPE
// =============================================================================

/// The `{code, msg, data}` wrapper carried by every API response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: T,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

// =============================================================================
// USER
// =============================================================================

/// Profile of the signed-in user, persisted next to the token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, alias = "ID", deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub role: String,
}

/// Payload of a successful `POST /user/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub role: String,
}

impl LoginData {
    /// Profile fields of the login payload.
    #[must_use]
    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
            avatar: self.avatar.clone(),
            role: self.role.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

// =============================================================================
// ARTICLES
// =============================================================================

/// Author summary embedded in an article.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, alias = "ID", deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, alias = "ID", deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// A published (or draft) article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(alias = "ID", deserialize_with = "deserialize_u64_from_number")]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_img: String,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub category_id: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub user_id: u64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub view_count: u64,
    #[serde(default = "default_true")]
    pub is_publish: bool,
    #[serde(default)]
    pub user: Option<Author>,
    #[serde(default)]
    pub category: Option<Category>,
    /// ISO 8601 creation timestamp, if the server sent one.
    #[serde(default, alias = "CreatedAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "UpdatedAt")]
    pub updated_at: Option<String>,
}

/// Fields an author submits when creating or editing an article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub category_id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cover_img: String,
    #[serde(default = "default_true")]
    pub is_publish: bool,
}

impl Default for ArticleDraft {
    fn default() -> Self {
        Self { title: String::new(), content: String::new(), category_id: 1, cover_img: String::new(), is_publish: true }
    }
}

impl From<&Article> for ArticleDraft {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            category_id: article.category_id,
            cover_img: article.cover_img.clone(),
            is_publish: article.is_publish,
        }
    }
}

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination and search parameters for `GET /article/list`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleQuery {
    pub page: u32,
    pub size: u32,
    pub keyword: Option<String>,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, size: DEFAULT_PAGE_SIZE, keyword: None }
    }
}

impl ArticleQuery {
    /// Query-string pairs; a blank keyword is omitted.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_owned(), self.page.max(1).to_string()),
            ("size".to_owned(), self.size.max(1).to_string()),
        ];
        if let Some(keyword) = self.keyword.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
            pairs.push(("keyword".to_owned(), keyword.to_owned()));
        }
        pairs
    }
}

/// One page of articles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePage {
    #[serde(default)]
    pub list: Vec<Article>,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total: u64,
    #[serde(default = "default_page", deserialize_with = "deserialize_u32_from_number")]
    pub page: u32,
    #[serde(default = "default_page_size", deserialize_with = "deserialize_u32_from_number")]
    pub size: u32,
}

impl ArticlePage {
    /// Number of pages needed for `total` items; at least one.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        let size = u64::from(self.size.max(1));
        self.total.div_ceil(size).max(1)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.page_count()
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of an API call, after the pipeline has surfaced it to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// No response within the configured timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The server rejected the credentials; the session has been cleared.
    #[error("session expired")]
    Unauthorized,

    /// Non-2xx response without a usable envelope.
    #[error("server error: status {status}")]
    Http { status: u16 },

    /// Envelope with a non-success `code`.
    #[error("{msg}")]
    Api { code: i64, msg: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

// =============================================================================
// LENIENT NUMBERS
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_u64_from_number(deserializer)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u32")))
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
