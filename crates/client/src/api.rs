use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use shared_types::{
    doctor_endpoint, ApiConfig, ApiError, Doctor, DoctorResponse, DoctorsResponse,
    FetchDoctorsParams,
};
use validator::Validate;

/// HTTP client for the doctors directory API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct DoctorsClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for DoctorsClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl DoctorsClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        }
    }

    /// Client for the API configured in `config.toml`.
    pub fn from_app_config() -> Self {
        Self::new(&crate::config::app_config().api)
    }

    /// Use `token` as the bearer credential for every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of doctors matching `params`.
    pub async fn fetch_doctors(
        &self,
        params: &FetchDoctorsParams,
    ) -> Result<DoctorsResponse, ApiError> {
        self.get_json(&params.endpoint()).await
    }

    /// Fetch a single doctor by id.
    pub async fn fetch_doctor_by_id(&self, id: &str) -> Result<Doctor, ApiError> {
        let resp: DoctorResponse = self.get_json(&doctor_endpoint(id)).await?;
        Ok(resp.doctor)
    }

    #[tracing::instrument(skip(self))]
    async fn get_json<T>(&self, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.http.get(&url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Doctors API request failed");
            ApiError::network()
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, status, "Failed to read doctors API response");
            ApiError::network()
        })?;

        if !(200..300).contains(&status) {
            let err = ApiError::from_response_body(status, &body);
            tracing::warn!(status, error = %err, "Doctors API returned an error");
            return Err(err);
        }

        let value: T = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(status, error = %e, "Doctors API response did not decode");
            ApiError::decode(status, e)
        })?;
        value.validate().map_err(|e| {
            tracing::warn!(status, error = %e, "Doctors API response failed validation");
            ApiError::decode(status, e)
        })?;

        tracing::debug!(status, "Doctors API request succeeded");
        Ok(value)
    }
}
