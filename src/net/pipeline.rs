//! Request pipeline: credential injection and response normalization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every API call in the app goes through [`RequestPipeline::send`], so call
//! sites only describe endpoints and payload shapes.
//!
//! REQUEST STAGE
//! =============
//! The API base is prefixed and, when the session holds a token, the
//! `Authorization: Bearer <token>` header is attached.
//!
//! RESPONSE STAGE
//! ==============
//! - no response (network, timeout): generic notice, error returned
//! - HTTP 401 on a request that carried a token: session cleared, one
//!   re-login confirmation, `Unauthorized`
//! - HTTP 401 without a token (failed login): treated like any other
//!   failure envelope, so the server's reason is shown
//! - envelope with `code != 200`: server `msg` (or a default) shown verbatim
//! - non-2xx without an envelope: generic notice
//! - envelope with `code == 200`: `data` decoded into the caller's type
//!
//! Nothing is retried; each failure ends the originating call.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::cell::Cell;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use super::notify::{Navigator, Notifier};
use super::transport::{AUTHORIZATION, HttpRequest, HttpResponse, Transport};
use super::types::{ApiError, Envelope};
use crate::config::ClientConfig;
use crate::state::session::SessionStore;

/// Shown when an envelope reports failure without a message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "request failed";
/// Shown for failures that never produced an envelope.
pub const SERVER_ERROR_MESSAGE: &str = "server error";
/// Confirmation shown once the server rejects the session.
pub const SESSION_EXPIRED_PROMPT: &str = "Your session has expired. Sign in again?";

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// The app's single HTTP client. Clones share the session, the transport and
/// the re-login gate.
#[derive(Clone)]
pub struct RequestPipeline {
    config: Rc<ClientConfig>,
    session: SessionStore,
    transport: Rc<dyn Transport>,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
    /// Set while a re-login prompt has been issued for the current signed-out
    /// period; re-armed by the next sign-in.
    relogin_prompted: Rc<Cell<bool>>,
}

impl RequestPipeline {
    pub fn new(
        config: ClientConfig,
        session: SessionStore,
        transport: Rc<dyn Transport>,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let relogin_prompted = Rc::new(Cell::new(false));
        let gate = Rc::clone(&relogin_prompted);
        session.subscribe(move |s| {
            if s.is_authenticated() {
                gate.set(false);
            }
        });
        Self { config: Rc::new(config), session, transport, notifier, navigator, relogin_prompted }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request stage: absolute path under the API base plus credentials.
    #[must_use]
    pub fn prepare(&self, mut request: HttpRequest) -> HttpRequest {
        request.path = format!("{}{}", self.config.api_base, request.path);
        let token = self.session.token();
        if !token.is_empty() {
            request.set_header(AUTHORIZATION, bearer(&token));
        }
        request
    }

    /// Send `request` and decode the envelope's `data` as `T`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure after it has been surfaced to the user.
    pub async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let request = self.prepare(request);
        let label = format!("{} {}", request.method.as_str(), request.path);
        let credentialed = request.header(AUTHORIZATION).is_some();
        match self.transport.send(request).await {
            Ok(response) => self.interpret(&label, credentialed, &response),
            Err(err) => {
                leptos::logging::warn!("{label} failed: {err}");
                self.notifier.error(&err.to_string());
                Err(err.into())
            }
        }
    }

    /// Response stage.
    ///
    /// A 401 only ends the session when the request presented one.
    fn interpret<T: DeserializeOwned>(
        &self,
        label: &str,
        credentialed: bool,
        response: &HttpResponse,
    ) -> Result<T, ApiError> {
        if response.status == 401 && credentialed {
            leptos::logging::warn!("{label} rejected with 401; clearing session");
            self.handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        let envelope = serde_json::from_str::<Envelope<serde_json::Value>>(&response.body).ok();
        match envelope {
            Some(envelope) if !envelope.is_success() => {
                let msg = if envelope.msg.trim().is_empty() { DEFAULT_FAILURE_MESSAGE.to_owned() } else { envelope.msg };
                leptos::logging::warn!("{label} failed: code={} msg={msg}", envelope.code);
                self.notifier.error(&msg);
                Err(ApiError::Api { code: envelope.code, msg })
            }
            Some(envelope) if response.is_success() => serde_json::from_value(envelope.data).map_err(|e| {
                leptos::logging::warn!("{label} returned unexpected data: {e}");
                self.notifier.error(SERVER_ERROR_MESSAGE);
                ApiError::Decode(e.to_string())
            }),
            _ if response.is_success() => {
                leptos::logging::warn!("{label} returned a body without an envelope");
                self.notifier.error(SERVER_ERROR_MESSAGE);
                Err(ApiError::Decode("missing response envelope".to_owned()))
            }
            _ => {
                leptos::logging::warn!("{label} failed with status {}", response.status);
                self.notifier.error(SERVER_ERROR_MESSAGE);
                Err(ApiError::Http { status: response.status })
            }
        }
    }

    /// Clear the session, then prompt once per signed-out period. Concurrent
    /// 401s after the first only clear (a no-op by then).
    fn handle_unauthorized(&self) {
        self.session.clear_user();
        if self.relogin_prompted.replace(true) {
            return;
        }
        if self.notifier.confirm(SESSION_EXPIRED_PROMPT) {
            self.navigator.navigate(&self.config.login_path);
        }
    }
}
