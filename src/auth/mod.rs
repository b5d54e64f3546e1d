pub mod sessions;
pub mod token;

pub use sessions::{load_user_from_session, session_token_from_cookie, SESSION_COOKIE};
