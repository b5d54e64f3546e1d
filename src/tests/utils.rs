use crate::app_state::AppState;
use crate::auth::sessions::hash_session_token;
use crate::auth::token::{generate_token, SESSION_TOKEN_BYTES};
use crate::auth::SESSION_COOKIE;
use crate::db::connection::{init_db, Database};
use crate::domain::{Tour, ToursResponse};
use crate::errors::ServerError;
use crate::tours::{ToursApi, ToursConnector, ToursError};
use astra::{Body, Request, Response};
use chrono::Utc;
use http::Method;
use rand::rngs::OsRng;
use rusqlite::params;
use std::io::Read;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh database file with the production schema.
pub fn make_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{tag}_{}_{}.sqlite",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy());
    init_db(&db).expect("Failed to initialize DB");
    db
}

pub fn seed_user(db: &Database, email: &str) -> i64 {
    db.with_conn(|conn| {
        conn.execute(
            "insert into users (email, created_at) values (?, ?)",
            params![email, Utc::now().timestamp()],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    })
    .unwrap()
}

/// Returns the raw token to put in the `session` cookie.
pub fn seed_session(db: &Database, user_id: i64, expires_in: i64) -> String {
    let token = generate_token(&mut OsRng, SESSION_TOKEN_BYTES);
    let hash = hash_session_token(&token);
    let now = Utc::now().timestamp();

    db.with_conn(|conn| {
        conn.execute(
            r#"
            insert into sessions (user_id, token_hash, created_at, expires_at)
            values (?, ?, ?, ?)
            "#,
            params![user_id, hash.as_slice(), now, now + expires_in],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
    .unwrap();

    token
}

pub fn seed_listing(db: &Database, seller_id: i64, title: &str, price: Option<i64>) -> i64 {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            insert into listings (seller_id, title, street, city, state, zip, price, status, created_at)
            values (?, ?, '12 Elm St', 'Provo', 'UT', '84601', ?, 'active', ?)
            "#,
            params![seller_id, title, price, Utc::now().timestamp()],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    })
    .unwrap()
}

pub fn tour(id: &str) -> Tour {
    Tour {
        id: id.into(),
        street: format!("{id} Canyon Rd"),
        city: "Orem".into(),
        state: "UT".into(),
        zip: "84057".into(),
        scheduled_date: "2026-11-07".into(),
        scheduled_time: "11:00".into(),
        buyer_id: "42".into(),
        status: "scheduled".into(),
        notes: None,
    }
}

/// Tours backend stand-in that answers the same way for every seller.
pub struct ScriptedTours {
    outcome: Result<Vec<Tour>, u16>,
    tokens: Mutex<Vec<Option<String>>>,
}

impl ScriptedTours {
    pub fn ok(tours: Vec<Tour>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(tours),
            tokens: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(status),
            tokens: Mutex::new(Vec::new()),
        })
    }

    /// Session tokens the dashboard connected with, in order.
    pub fn tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }
}

struct ScriptedApi(Result<Vec<Tour>, u16>);

impl ToursApi for ScriptedApi {
    fn get_seller_tours(&self) -> Result<ToursResponse, ToursError> {
        match &self.0 {
            Ok(tours) => Ok(ToursResponse {
                tours: tours.clone(),
            }),
            Err(status) => Err(ToursError::Status { status: *status }),
        }
    }
}

impl ToursConnector for ScriptedTours {
    fn connect(&self, session_token: Option<&str>) -> Arc<dyn ToursApi> {
        self.tokens
            .lock()
            .unwrap()
            .push(session_token.map(str::to_string));
        Arc::new(ScriptedApi(self.outcome.clone()))
    }
}

/// Tours backend that hangs until the test sends each answer.
pub struct GatedTours {
    answers: Arc<Mutex<Receiver<Vec<Tour>>>>,
}

impl GatedTours {
    pub fn new() -> (Sender<Vec<Tour>>, Arc<Self>) {
        let (tx, rx) = mpsc::channel();
        let gated = Self {
            answers: Arc::new(Mutex::new(rx)),
        };
        (tx, Arc::new(gated))
    }
}

struct GatedApi(Arc<Mutex<Receiver<Vec<Tour>>>>);

impl ToursApi for GatedApi {
    fn get_seller_tours(&self) -> Result<ToursResponse, ToursError> {
        let tours = self
            .0
            .lock()
            .unwrap()
            .recv()
            .map_err(|e| ToursError::Network(e.to_string()))?;
        Ok(ToursResponse { tours })
    }
}

impl ToursConnector for GatedTours {
    fn connect(&self, _session_token: Option<&str>) -> Arc<dyn ToursApi> {
        Arc::new(GatedApi(Arc::clone(&self.answers)))
    }
}

pub fn app(db: Database, tours: Arc<ScriptedTours>) -> AppState {
    AppState::new(db, tours, None)
}

pub fn request(method: Method, uri: &str, session: Option<&str>) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();

    if let Some(token) = session {
        req.headers_mut().insert(
            "Cookie",
            format!("{SESSION_COOKIE}={token}").parse().unwrap(),
        );
    }
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
