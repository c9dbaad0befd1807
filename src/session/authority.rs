use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::errors::BriefError;

/// What the session authority says about a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionVerdict {
    Valid,
    Expired,
    Invalid,
    /// The authority could not be asked. Not the same as a rejection.
    Unreachable,
}

/// External service that issues and validates access credentials.
#[async_trait]
pub trait SessionAuthority: Send + Sync {
    async fn validate(&self, credential: &str) -> SessionVerdict;

    /// # Errors
    ///
    /// Returns an error if the authority could not be reached.
    async fn revoke(&self, credential: &str) -> Result<(), BriefError>;
}

/// Token endpoint that answers `?get_token` with the currently issued token,
/// or with `INVALID` / `EXPIRED`.
pub struct HttpSessionAuthority {
    http: Client,
    endpoint: String,
}

impl HttpSessionAuthority {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, BriefError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            BriefError::HttpError(format!("Failed to build session HTTP client: {e}"))
        })?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    fn url_with_query(&self, query: &str) -> String {
        let sep = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{sep}{query}", self.endpoint)
    }
}

#[async_trait]
impl SessionAuthority for HttpSessionAuthority {
    async fn validate(&self, credential: &str) -> SessionVerdict {
        let response = match self.http.get(self.url_with_query("get_token")).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("Session authority request failed: {}", e);
                return SessionVerdict::Unreachable;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Session authority returned an error status");
            return SessionVerdict::Unreachable;
        }

        match response.text().await {
            Ok(body) => classify_authority_response(&body, credential),
            Err(e) => {
                error!("Failed to read session authority response: {}", e);
                SessionVerdict::Unreachable
            }
        }
    }

    async fn revoke(&self, credential: &str) -> Result<(), BriefError> {
        let response = self
            .http
            .get(self.url_with_query("logout=true"))
            .bearer_auth(credential)
            .send()
            .await
            .map_err(|e| BriefError::SessionError(format!("logout request failed: {e}")))?;
        info!(status = %response.status(), "Session revoked at authority");
        Ok(())
    }
}

/// Maps the authority's plain-text answer onto a verdict for `credential`.
#[must_use]
pub fn classify_authority_response(body: &str, credential: &str) -> SessionVerdict {
    let issued = body.trim();
    if issued.is_empty() || issued.eq_ignore_ascii_case("INVALID") {
        SessionVerdict::Invalid
    } else if issued.eq_ignore_ascii_case("EXPIRED") {
        SessionVerdict::Expired
    } else if issued == credential.trim() {
        SessionVerdict::Valid
    } else {
        SessionVerdict::Invalid
    }
}
