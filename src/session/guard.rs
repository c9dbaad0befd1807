use tracing::{info, warn};

use super::authority::{SessionAuthority, SessionVerdict};
use crate::errors::BriefError;

/// What the front end should do with a request after the session check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send the browser back to the login page.
    Redirect(String),
    /// Refuse without redirecting; the authority could not be consulted.
    Deny(String),
}

/// Single access policy in front of every protected route.
pub struct SessionGuard {
    authority: Box<dyn SessionAuthority>,
    login_url: String,
}

impl SessionGuard {
    #[must_use]
    pub fn new(authority: Box<dyn SessionAuthority>, login_url: impl Into<String>) -> Self {
        Self {
            authority,
            login_url: login_url.into(),
        }
    }

    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    pub async fn verdict(&self, credential: Option<&str>) -> SessionVerdict {
        match credential.map(str::trim).filter(|c| !c.is_empty()) {
            Some(c) => self.authority.validate(c).await,
            None => SessionVerdict::Invalid,
        }
    }

    pub async fn check(&self, credential: Option<&str>) -> GuardDecision {
        match self.verdict(credential).await {
            SessionVerdict::Valid => GuardDecision::Allow,
            SessionVerdict::Expired => {
                info!("Expired session; redirecting to login");
                GuardDecision::Redirect(self.login_url.clone())
            }
            SessionVerdict::Invalid => {
                info!("Invalid or missing session; redirecting to login");
                GuardDecision::Redirect(self.login_url.clone())
            }
            SessionVerdict::Unreachable => {
                warn!("Session authority unreachable; denying request");
                GuardDecision::Deny(
                    "Session service is unavailable. Please try again later.".to_string(),
                )
            }
        }
    }

    /// Best-effort logout at the authority. A blank credential is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the authority could not be reached.
    pub async fn logout(&self, credential: Option<&str>) -> Result<(), BriefError> {
        match credential.map(str::trim).filter(|c| !c.is_empty()) {
            Some(c) => self.authority.revoke(c).await,
            None => Ok(()),
        }
    }
}
