use std::{future::Future, time::Instant};

use metrics::{counter, histogram};
use proffy_core::{FilterCriteria, Teacher, decode_teachers};
use reqwest::Url;

use crate::{config::ClientConfig, error::SearchError};

/// Remote class search.
pub trait TeacherSearch: Send + Sync {
    /// Search classes matching `criteria`.
    fn search(
        &self,
        criteria: &FilterCriteria,
    ) -> impl Future<Output = Result<Vec<Teacher>, SearchError>> + Send;
}

/// HTTP client for `GET /classes`.
#[derive(Debug, Clone)]
pub struct ClassesClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ClassesClient {
    /// Create a client for the API rooted at `api_url`.
    ///
    /// `api_url` may carry a path prefix (`https://host/api`); `classes` is
    /// resolved below it.
    pub fn new(api_url: &str) -> Result<Self, SearchError> {
        Self::with_http_client(reqwest::Client::new(), api_url)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, SearchError> {
        Self::new(&config.api_url)
    }

    pub fn with_http_client(http: reqwest::Client, api_url: &str) -> Result<Self, SearchError> {
        let mut base = Url::parse(api_url)
            .map_err(|e| SearchError::InvalidUrl(format!("{api_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(SearchError::InvalidUrl(api_url.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let endpoint = base
            .join("classes")
            .map_err(|e| SearchError::InvalidUrl(format!("{api_url}: {e}")))?;

        Ok(Self { http, endpoint })
    }

    /// Full URL of the classes endpoint, without query
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(&self, criteria: &FilterCriteria) -> Result<Vec<Teacher>, SearchError> {
        // Every field is sent, empty or not
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(criteria)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status { status });
        }

        let body = response.text().await?;
        Ok(decode_teachers(&body)?)
    }
}

impl TeacherSearch for ClassesClient {
    async fn search(&self, criteria: &FilterCriteria) -> Result<Vec<Teacher>, SearchError> {
        let start = Instant::now();
        tracing::debug!(
            subject = %criteria.subject,
            week_day = %criteria.week_day,
            time = %criteria.time,
            unconstrained = criteria.is_unconstrained(),
            "Searching classes"
        );

        let result = self.fetch(criteria).await;

        let outcome = match &result {
            Ok(teachers) => {
                tracing::debug!(count = teachers.len(), "Class search succeeded");
                "success"
            }
            Err(e) => {
                tracing::warn!(error = %e, "Class search failed");
                "failure"
            }
        };
        counter!("proffy_search_requests_total", "outcome" => outcome).increment(1);
        histogram!("proffy_search_duration_seconds", "outcome" => outcome)
            .record(start.elapsed().as_secs_f64());

        result
    }
}
