//! External persistence collaborator.
//!
//! The mutated document is handed off with an opaque authorization value and
//! a target endpoint, both pass-through: this service never interprets
//! either. Upstream failure text is surfaced verbatim and nothing is
//! retried; the in-memory document stays as-is for correction and resubmit.

use std::time::Duration;

use reqwest::{header, Client};

use crate::errors::AppError;
use crate::models::Node;

pub struct Submitter {
    http: Client,
}

impl Submitter {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Internal(format!("building HTTP client: {}", err)))?;
        Ok(Self { http })
    }

    /// POST the document to the persistence endpoint. Returns the upstream
    /// status code on success.
    pub async fn submit(
        &self,
        url: &str,
        authorization: Option<&str>,
        document: &Node,
    ) -> Result<u16, AppError> {
        let mut request = self.http.post(url).json(document);
        if let Some(token) = authorization {
            request = request.header(header::AUTHORIZATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| AppError::Submission(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%status, url, "document submitted");
            return Ok(status.as_u16());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, url, "submission rejected by upstream");
        Err(AppError::Submission(if body.is_empty() {
            format!("upstream returned {}", status)
        } else {
            body
        }))
    }
}
