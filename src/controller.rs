//! Dialog controller
//!
//! Loads the caller's session, runs one pure transition and writes the
//! result back. Requests for the same session are not serialized; two
//! concurrent requests race and the last write wins.

use crate::dialog::{transition, DialogError, Session, Step};
use crate::store::SessionStore;
use std::time::Duration;

/// One USSD hop as received from the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UssdRequest {
    pub session_id: String,
    pub caller: String,
    /// Every input so far, joined by `*`
    pub input: String,
}

pub struct DialogController {
    sessions: SessionStore,
    ttl: Duration,
}

impl DialogController {
    pub fn new(sessions: SessionStore, ttl: Duration) -> Self {
        Self { sessions, ttl }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle one request and return the rendered `CON `/`END ` screen.
    ///
    /// The session is written back on every path, including failures, where
    /// the pre-request session is stored unchanged. A screen that ends the
    /// USSD session removes it instead.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError`] when the dialog reached a handler whose
    /// prerequisites were never collected.
    pub async fn handle(&self, request: &UssdRequest) -> Result<String, DialogError> {
        let session = match self.sessions.get(&request.session_id).await {
            Some(session) => session,
            None => {
                tracing::info!(session_id = %request.session_id, caller = %request.caller, "Starting new session");
                Session::new(request.session_id.clone(), request.caller.clone())
            }
        };

        let step = Step::from_input(&request.input);
        tracing::debug!(state = ?session.state, step = ?step, "Dispatching step");

        match transition(&session, step) {
            Ok(result) => {
                tracing::debug!(
                    from = ?session.state,
                    to = ?result.session.state,
                    terminal = result.screen.is_terminal(),
                    "Transition complete"
                );
                if result.screen.is_terminal() {
                    self.sessions.delete(&request.session_id).await;
                } else {
                    self.sessions
                        .put(&request.session_id, &result.session, self.ttl)
                        .await;
                }
                Ok(result.screen.render(result.session.locale))
            }
            Err(e) => {
                self.sessions.put(&request.session_id, &session, self.ttl).await;
                Err(e)
            }
        }
    }
}
