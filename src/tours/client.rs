use super::ToursError;
use crate::config::Settings;
use crate::domain::ToursResponse;
use reqwest::blocking::Client;
use std::sync::Arc;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("seller-dashboard/", env!("CARGO_PKG_VERSION"));

/// Source of the current seller's upcoming tours.
pub trait ToursApi: Send + Sync {
    fn get_seller_tours(&self) -> Result<ToursResponse, ToursError>;
}

/// Builds a tours client scoped to one seller's session.
pub trait ToursConnector: Send + Sync {
    fn connect(&self, session_token: Option<&str>) -> Arc<dyn ToursApi>;
}

/// Talks to `GET {base}/tours/seller`.
pub struct HttpToursClient {
    client: Client,
    endpoint: Url,
    bearer: Option<String>,
}

impl HttpToursClient {
    pub fn new(client: Client, endpoint: Url, bearer: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            bearer,
        }
    }
}

impl ToursApi for HttpToursClient {
    fn get_seller_tours(&self) -> Result<ToursResponse, ToursError> {
        let mut req = self.client.get(self.endpoint.clone());
        if let Some(token) = &self.bearer {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .map_err(|e| ToursError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| ToursError::Network(e.to_string()))?;

        debug!(status, bytes = body.len(), "tours backend responded");
        parse_tours_response(status, &body)
    }
}

/// Map a raw backend answer onto the tours contract.
pub fn parse_tours_response(status: u16, body: &str) -> Result<ToursResponse, ToursError> {
    if !(200..300).contains(&status) {
        return Err(ToursError::Status { status });
    }
    serde_json::from_str(body).map_err(|e| ToursError::Decode(e.to_string()))
}

fn tours_endpoint(base: &Url) -> Result<Url, ToursError> {
    // Url::join drops the last segment unless the base ends with '/'.
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("tours/seller")
        .map_err(|e| ToursError::Client(e.to_string()))
}

/// Production connector: one shared reqwest client, one bearer per seller.
pub struct HttpToursConnector {
    client: Client,
    endpoint: Url,
}

impl HttpToursConnector {
    pub fn from_settings(settings: &Settings) -> Result<Self, ToursError> {
        let base = Url::parse(&settings.tours_api_base)
            .map_err(|e| ToursError::Client(e.to_string()))?;
        let endpoint = tours_endpoint(&base)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.tours_timeout)
            .build()
            .map_err(|e| ToursError::Client(e.to_string()))?;

        Ok(Self { client, endpoint })
    }
}

impl ToursConnector for HttpToursConnector {
    fn connect(&self, session_token: Option<&str>) -> Arc<dyn ToursApi> {
        Arc::new(HttpToursClient::new(
            self.client.clone(),
            self.endpoint.clone(),
            session_token.map(str::to_string),
        ))
    }
}
