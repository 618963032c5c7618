use crate::{CliClientResult, ClientError};

use std::time::Duration;

use log::{debug, error, warn};
use mf_config::Config;
use mf_core::{
    ApiErrorBody, Credentials, Director, Genre, LoginResponse, Movie, User, UserDetails,
    UserUpdate,
};
use mf_session::{PendingUpdate, SessionStore};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

/// HTTP client for the movie API.
///
/// Every remote call goes through here. Authenticated calls read the
/// bearer token from the session store at call time.
pub struct Client {
    pub base_url: Url,
    session: SessionStore,
    rollback_on_failure: bool,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://movieappskogaby.herokuapp.com/")
    /// * `session` - Store holding the bearer token and cached user
    pub fn new(base_url: &str, session: SessionStore) -> CliClientResult<Self> {
        let base_url = Url::parse(base_url).map_err(|_| ClientError::invalid_url(base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::invalid_url(base_url.as_str()));
        }

        Ok(Self {
            base_url,
            session,
            rollback_on_failure: false,
            client: ReqwestClient::new(),
        })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config, session: SessionStore) -> CliClientResult<Self> {
        Ok(Self::new(&config.api.base_url, session)?
            .with_timeout(Duration::from_secs(config.api.timeout_secs))?
            .with_rollback_on_failure(config.favorites.rollback_on_failure))
    }

    /// Apply a per-request timeout. A timed out request is a transport failure.
    pub fn with_timeout(mut self, timeout: Duration) -> CliClientResult<Self> {
        self.client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Undo optimistic favorite changes when the request fails.
    pub fn with_rollback_on_failure(mut self, rollback: bool) -> Self {
        self.rollback_on_failure = rollback;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Resolve path segments against the base URL, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> CliClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::invalid_url(self.base_url.as_str()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Build an unauthenticated request
    fn request(&self, method: Method, segments: &[&str]) -> CliClientResult<RequestBuilder> {
        let url = self.url(segments)?;
        debug!("{} {}", method, url);
        Ok(self.client.request(method, url))
    }

    /// Build a request carrying the stored bearer token
    fn authed(&self, method: Method, segments: &[&str]) -> CliClientResult<RequestBuilder> {
        let token = self.session.token()?.unwrap_or_default();
        if token.is_empty() {
            warn!("No token stored; sending request with an empty bearer credential");
        }
        Ok(self.request(method, segments)?.bearer_auth(token))
    }

    /// Execute request and normalize errors
    async fn execute(&self, req: RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await.map_err(|e| {
            error!("Some error occurred: {}", e);
            ClientError::from_reqwest(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Some error occurred: {}", e);
            ClientError::from_reqwest(e)
        })?;

        if !status.is_success() {
            if let Some(body) = ApiErrorBody::parse(&text)
                && let Some(message) = body.first_message()
            {
                return Err(ClientError::api_error(status.as_u16(), message));
            }

            error!(
                "Error status code {}, error body is: {}",
                status.as_u16(),
                text
            );
            return Err(ClientError::status_error(status.as_u16(), text));
        }

        Ok(extract_response_data(&text))
    }

    /// Settle an optimistic favorite change against the request outcome
    fn settle(
        &self,
        pending: PendingUpdate,
        result: CliClientResult<Value>,
    ) -> CliClientResult<Value> {
        match result {
            Ok(value) => {
                pending.confirm();
                Ok(value)
            }
            Err(e) if self.rollback_on_failure => {
                if let Err(rollback_err) = pending.rollback() {
                    warn!("Failed to roll back cached favorites: {}", rollback_err);
                }
                Err(e)
            }
            Err(e) => {
                pending.confirm();
                Err(e)
            }
        }
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Register a new account
    pub async fn register(&self, details: &UserDetails) -> CliClientResult<User> {
        let req = self.request(Method::POST, &["users"])?.json(details);
        decode_or_default(self.execute(req).await?)
    }

    /// Log in. The caller persists the returned token and user.
    pub async fn login(&self, credentials: &Credentials) -> CliClientResult<LoginResponse> {
        let req = self.request(Method::POST, &["login"])?.json(credentials);
        decode(self.execute(req).await?)
    }

    /// The cached user; an empty record when nobody is logged in
    pub fn cached_user(&self) -> CliClientResult<User> {
        Ok(self.session.cached_user()?)
    }

    /// Update the logged-in user. The caller overwrites the cached user with the result.
    pub async fn edit_user(&self, update: &UserUpdate) -> CliClientResult<User> {
        let user = self.session.cached_user()?;
        let req = self
            .authed(Method::PUT, &["users", user.username().unwrap_or_default()])?
            .json(update);
        decode_or_default(self.execute(req).await?)
    }

    /// Delete the logged-in user. The caller clears the session on success.
    pub async fn delete_user(&self) -> CliClientResult<Value> {
        let user = self.session.cached_user()?;
        let req = self.authed(Method::DELETE, &["users", user.id().unwrap_or_default()])?;
        self.execute(req).await
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// List all movies
    pub async fn list_movies(&self) -> CliClientResult<Vec<Movie>> {
        let req = self.authed(Method::GET, &["movies"])?;
        decode_or_default(self.execute(req).await?)
    }

    /// Get a movie by title
    pub async fn get_movie(&self, title: &str) -> CliClientResult<Movie> {
        let req = self.authed(Method::GET, &["movies", title])?;
        decode_or_default(self.execute(req).await?)
    }

    /// Get a director by name
    pub async fn get_director(&self, name: &str) -> CliClientResult<Director> {
        let req = self.authed(Method::GET, &["movies", "director", name])?;
        decode_or_default(self.execute(req).await?)
    }

    /// Get a genre by name
    pub async fn get_genre(&self, name: &str) -> CliClientResult<Genre> {
        let req = self.authed(Method::GET, &["movies", "genre", name])?;
        decode_or_default(self.execute(req).await?)
    }

    // =========================================================================
    // Favorite Operations
    // =========================================================================

    /// Favorite movie ids as the server currently has them
    pub async fn list_favorite_movies(&self) -> CliClientResult<Vec<String>> {
        let user = self.session.cached_user()?;
        let req = self.authed(Method::GET, &["users", user.username().unwrap_or_default()])?;
        let remote: User = decode_or_default(self.execute(req).await?)?;
        Ok(remote
            .favorite_movies()
            .into_iter()
            .map(String::from)
            .collect())
    }

    /// Add a favorite. The cached list changes before the request is sent.
    pub async fn add_favorite(&self, movie_id: &str) -> CliClientResult<Value> {
        let pending = self.session.add_favorite(movie_id)?;
        let username = pending.written().username().unwrap_or_default().to_string();

        let result = match self.authed(Method::POST, &["users", &username, "movies", movie_id]) {
            Ok(req) => self.execute(req.json(&json!({}))).await,
            Err(e) => Err(e),
        };
        self.settle(pending, result)
    }

    /// Remove a favorite. The cached list changes before the request is sent.
    pub async fn remove_favorite(&self, movie_id: &str) -> CliClientResult<Value> {
        let pending = self.session.remove_favorite(movie_id)?;
        let username = pending.written().username().unwrap_or_default().to_string();

        let result = match self.authed(Method::DELETE, &["users", &username, "movies", movie_id])
        {
            Ok(req) => self.execute(req).await,
            Err(e) => Err(e),
        };
        self.settle(pending, result)
    }

    /// Whether the cached user lists `movie_id` as a favorite. No network.
    pub fn is_favorite(&self, movie_id: &str) -> CliClientResult<bool> {
        Ok(self.session.is_favorite(movie_id)?)
    }
}

/// Turn a successful body into JSON. Empty or falsy bodies become `{}`;
/// plain-text bodies become a JSON string.
pub(crate) fn extract_response_data(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Value::Object(Map::new());
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) if is_falsy(&value) => Value::Object(Map::new()),
        Ok(value) => value,
        Err(_) => Value::String(text.to_string()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Validate a body against the expected record shape.
fn decode<T: DeserializeOwned>(value: Value) -> CliClientResult<T> {
    serde_json::from_value(value).map_err(|e| {
        error!("Response did not match the expected shape: {}", e);
        ClientError::from_json(e)
    })
}

/// Like `decode`, but `{}` stands for the empty record.
fn decode_or_default<T: DeserializeOwned + Default>(value: Value) -> CliClientResult<T> {
    match value {
        Value::Object(ref map) if map.is_empty() => Ok(T::default()),
        value => decode(value),
    }
}
