//! HTTP client for the BikeShare backend (auth, events, prediction, profile).

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{
    Credentials, Event, NewEvent, PredictionInput, PredictionResponse, Profile, RootMessage,
    TokenResponse,
};
use serde::de::DeserializeOwned;

/// Backend operations the controller needs. [`ApiClient`] is the HTTP implementation.
#[allow(async_fn_in_trait)]
pub trait BikeShareApi {
    /// Returns the bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<String, ClientError>;
    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError>;
    async fn events(&self, token: &str) -> Result<Vec<Event>, ClientError>;
    async fn create_event(&self, token: &str, event: &NewEvent) -> Result<(), ClientError>;
    /// Returns the predicted demand.
    async fn predict(&self, token: &str, input: &PredictionInput) -> Result<f64, ClientError>;
    async fn profile(&self, token: &str) -> Result<Profile, ClientError>;
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

fn auth_headers(token: &str) -> Result<reqwest::header::HeaderMap, ClientError> {
    if token.is_empty() {
        return Err(ClientError::NotAuthenticated);
    }
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::AUTHORIZATION,
        format!("Bearer {}", token)
            .parse()
            .map_err(|_| ClientError::InvalidHeader)?,
    );
    Ok(headers)
}

/// Sends the request and decodes a 2xx body; anything else becomes [`ClientError::Status`].
async fn send_json<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> Result<T, ClientError> {
    let resp = req.send().await?;
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            body: text,
        });
    }
    Ok(serde_json::from_str(&text)?)
}

/// Like [`send_json`] for endpoints whose success body is not used.
async fn send_ok(req: reqwest::RequestBuilder) -> Result<(), ClientError> {
    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(())
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET / - connection test for the setup screen.
    pub async fn ping(&self) -> Result<String, ClientError> {
        let url = self.config.endpoint("/");
        let msg: RootMessage = send_json(self.http.get(&url)).await?;
        Ok(msg.message)
    }
}

impl BikeShareApi for ApiClient {
    /// POST /auth/login -> { access_token }
    async fn login(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let url = self.config.endpoint("/auth/login");
        tracing::info!("login: POST {} user={}", url, credentials.username);
        let token: TokenResponse = send_json(self.http.post(&url).json(credentials)).await?;
        Ok(token.access_token)
    }

    /// POST /auth/register
    async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let url = self.config.endpoint("/auth/register");
        tracing::info!("register: POST {} user={}", url, credentials.username);
        send_ok(self.http.post(&url).json(credentials)).await
    }

    /// GET /events
    async fn events(&self, token: &str) -> Result<Vec<Event>, ClientError> {
        let url = self.config.endpoint("/events");
        let headers = auth_headers(token)?;
        send_json(self.http.get(&url).headers(headers)).await
    }

    /// POST /events
    async fn create_event(&self, token: &str, event: &NewEvent) -> Result<(), ClientError> {
        let url = self.config.endpoint("/events");
        let headers = auth_headers(token)?;
        send_ok(self.http.post(&url).headers(headers).json(event)).await
    }

    /// POST /predict -> { predicted_demand }
    async fn predict(&self, token: &str, input: &PredictionInput) -> Result<f64, ClientError> {
        let url = self.config.endpoint("/predict");
        let headers = auth_headers(token)?;
        let resp: PredictionResponse =
            send_json(self.http.post(&url).headers(headers).json(input)).await?;
        Ok(resp.predicted_demand)
    }

    /// GET /profile
    async fn profile(&self, token: &str) -> Result<Profile, ClientError> {
        let url = self.config.endpoint("/profile");
        let headers = auth_headers(token)?;
        send_json(self.http.get(&url).headers(headers)).await
    }
}
