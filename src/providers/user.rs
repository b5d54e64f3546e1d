use super::{SessionUser, UserProvider};
use crate::auth::{load_user_from_session, session_token_from_cookie};
use crate::db::connection::Database;
use crate::errors::ServerError;

/// The user behind the request's `session` cookie, resolved once.
#[derive(Debug, Clone, Default)]
pub struct SessionUserProvider {
    user: Option<SessionUser>,
    token: Option<String>,
}

impl SessionUserProvider {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn resolve(
        db: &Database,
        cookie_header: Option<&str>,
        now: i64,
    ) -> Result<Self, ServerError> {
        let Some(token) = cookie_header.and_then(session_token_from_cookie) else {
            return Ok(Self::anonymous());
        };

        let user = db.with_conn(|conn| load_user_from_session(conn, token, now))?;
        Ok(match user {
            Some(user) => Self {
                user: Some(user),
                token: Some(token.to_string()),
            },
            None => Self::anonymous(),
        })
    }

    /// Raw session token, forwarded to the tours backend.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl UserProvider for SessionUserProvider {
    fn user(&self) -> Option<SessionUser> {
        self.user.clone()
    }
}
