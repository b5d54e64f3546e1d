use crate::config::Settings;
use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::tours::{HttpToursConnector, ToursConnector};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const DEFAULT_FRAGMENT_WAIT: Duration = Duration::from_secs(5);

/// Shared by every worker for the life of the server.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tours: Arc<dyn ToursConnector>,
    pub frontend_base: Option<Url>,
    /// Upper bound on how long a worker waits for the tours backend.
    pub fragment_wait: Duration,
}

impl AppState {
    pub fn new(db: Database, tours: Arc<dyn ToursConnector>, frontend_base: Option<Url>) -> Self {
        Self {
            db,
            tours,
            frontend_base,
            fragment_wait: DEFAULT_FRAGMENT_WAIT,
        }
    }

    pub fn with_fragment_wait(mut self, wait: Duration) -> Self {
        self.fragment_wait = wait;
        self
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ServerError> {
        let tours = HttpToursConnector::from_settings(settings)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let frontend_base = settings
            .frontend_base_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(|e| ServerError::Config(format!("frontend_base_url: {e}")))?;

        Ok(Self::new(
            Database::new(settings.database_path.clone()),
            Arc::new(tours),
            frontend_base,
        )
        .with_fragment_wait(settings.tours_fragment_wait))
    }
}
