//! Reqwest-backed implementation of the backend API.
//!
//! One HTTP client with a bearer token and a flat request timeout. There is
//! deliberately no retry or backoff here: failures map to typed errors and
//! the flows decide what to surface.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::ApiClient;
use crate::config::ApiConfig;
use crate::error::NetworkResultExt;
use crate::models::{
    CreatePlanPayload, Milestone, MilestoneUpdate, Person, Plan, PlanFilter,
};
use crate::{Result, TrellisError};

/// Flat per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body shape the backend uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for the trellis backend.
#[derive(Debug)]
pub struct HttpApiClient {
    base_url: String,
    token: String,
    http: Client,
}

impl HttpApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// * `TrellisError::Configuration` - When no bearer token is configured
    /// * `TrellisError::Network` - When the HTTP client cannot be built
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let token = config.bearer_token()?.to_string();

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .network_context("Failed to construct HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turn a non-success response into a typed API error.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.message,
            Err(_) if text.is_empty() => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
            Err(_) => text,
        };

        Err(TrellisError::api_error(status.as_u16(), message))
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn resolve_current_user(&self) -> Result<Person> {
        let response = self
            .http
            .get(self.url("people/me"))
            .bearer_auth(&self.token)
            .send()
            .await
            .network_context("Failed to resolve the current user")?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .network_context("Failed to decode the current user")
    }

    async fn list_eligible_assignees(&self, manager_id: &str) -> Result<Vec<Person>> {
        let response = self
            .http
            .get(self.url("people/eligible"))
            .query(&[("manager", manager_id)])
            .bearer_auth(&self.token)
            .send()
            .await
            .network_context("Failed to fetch eligible assignees")?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .network_context("Failed to decode the assignee list")
    }

    async fn create_plan(&self, payload: &CreatePlanPayload) -> Result<Plan> {
        let response = self
            .http
            .post(self.url("plans"))
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await
            .network_context("Failed to create the plan")?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .network_context("Failed to decode the created plan")
    }

    async fn update_milestone(&self, id: &str, fields: &MilestoneUpdate) -> Result<Milestone> {
        let response = self
            .http
            .patch(self.url(&format!("milestones/{id}")))
            .bearer_auth(&self.token)
            .json(fields)
            .send()
            .await
            .network_context("Failed to update the milestone")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(TrellisError::MilestoneNotFound { id: id.to_string() });
        }

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .network_context("Failed to decode the updated milestone")
    }

    async fn fetch_plan(&self, id: &str) -> Result<Plan> {
        let response = self
            .http
            .get(self.url(&format!("plans/{id}")))
            .bearer_auth(&self.token)
            .send()
            .await
            .network_context("Failed to fetch the plan")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(TrellisError::PlanNotFound { id: id.to_string() });
        }

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .network_context("Failed to decode the plan")
    }

    async fn list_plans(&self, filter: &PlanFilter) -> Result<Vec<Plan>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(owner) = &filter.owner {
            query.push(("owner", owner.clone()));
        }
        if let Some(assignee) = &filter.assignee {
            query.push(("assignee", assignee.clone()));
        }
        if let Some(status) = filter.status {
            query.push(("status", status.as_str().to_string()));
        }

        let response = self
            .http
            .get(self.url("plans"))
            .query(&query)
            .bearer_auth(&self.token)
            .send()
            .await
            .network_context("Failed to list plans")?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .network_context("Failed to decode the plan list")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_token() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/api/v1".to_string(),
            token: None,
        };

        match HttpApiClient::from_config(&config) {
            Err(TrellisError::Configuration { message }) => {
                assert!(message.contains("TRELLIS_TOKEN"));
            }
            other => panic!("Expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_config_trims_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/api/v1/".to_string(),
            token: Some("secret".to_string()),
        };

        let client = HttpApiClient::from_config(&config).expect("client should build");
        assert_eq!(client.base_url, "http://localhost:8080/api/v1");
        assert_eq!(client.url("plans"), "http://localhost:8080/api/v1/plans");
    }
}
