use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::profile::{ProfileUpdater, UpdatePayload};
use crate::session::User;

use super::endpoints;

#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn update_profile(
        &self,
        payload: &UpdatePayload,
        access_token: &str,
    ) -> AppResult<User> {
        self.put_json(endpoints::profile_endpoint(), access_token, payload)
            .await
    }

    /// Binds a bearer token so the client can act as a [`ProfileUpdater`].
    pub fn authorized(&self, access_token: impl Into<String>) -> AuthorizedClient<'_> {
        AuthorizedClient {
            client: self,
            access_token: access_token.into(),
        }
    }

    async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        access_token: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%url, "PUT");
        let response = self
            .http
            .put(url)
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await?;

        self.parse_json_response(response).await
    }

    fn endpoint_url(&self, endpoint: &str) -> AppResult<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }

    async fn parse_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }
}

pub struct AuthorizedClient<'a> {
    client: &'a ProfileClient,
    access_token: String,
}

impl ProfileUpdater for AuthorizedClient<'_> {
    async fn update_profile(&self, payload: &UpdatePayload) -> AppResult<User> {
        self.client
            .update_profile(payload, &self.access_token)
            .await
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    status: Option<String>,
    message: Option<String>,
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let message = parse_api_error_message(body).unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            "no error details in response body".to_string()
        } else {
            body.to_string()
        }
    });

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return AppError::Session(format!(
            "profile api rejected the session ({status}): {message}. run `profilectl session import`"
        ));
    }

    AppError::Api(format!("profile update failed ({status}): {message}"))
}

fn parse_api_error_message(body: &str) -> Option<String> {
    let error = serde_json::from_str::<ApiErrorBody>(body).ok()?;
    match (error.message, error.status) {
        (Some(message), Some(status)) => Some(format!("{message}, status={status}")),
        (Some(message), None) => Some(message),
        (None, Some(status)) => Some(format!("status={status}")),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_endpoint_under_base_path() {
        let client = ProfileClient::new("https://api.example.com/v1/");
        let url = client
            .endpoint_url(endpoints::profile_endpoint())
            .expect("url should build");
        assert_eq!(url.as_str(), "https://api.example.com/v1/profile");
    }

    #[test]
    fn maps_unauthorized_as_session_error() {
        let error = map_api_error(
            StatusCode::UNAUTHORIZED,
            r#"{"status":"error","message":"Invalid JWT token"}"#,
        );

        match error {
            AppError::Session(message) => {
                assert!(message.contains("Invalid JWT token"));
            }
            other => panic!("expected session error, got {other:?}"),
        }
    }

    #[test]
    fn maps_bad_request_as_api_error() {
        let error = map_api_error(
            StatusCode::BAD_REQUEST,
            r#"{"status":"error","message":"Old password does not match."}"#,
        );

        match error {
            AppError::Api(message) => {
                assert!(message.contains("Old password does not match."));
                assert!(message.contains("400"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_raw_body() {
        let error = map_api_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(error.to_string().contains("upstream down"));

        let error = map_api_error(StatusCode::BAD_GATEWAY, "  ");
        assert!(error.to_string().contains("no error details"));
    }
}
