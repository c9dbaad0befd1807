use crate::ai::{Generator, LlmClient};
use crate::core::config::AppConfig;
use crate::errors::BriefError;
use crate::session::{HttpSessionAuthority, SessionGuard};
use crate::trending::Aggregator;
use crate::youtube::{TimedTextClient, YouTubeClient};

/// The dashboard's collaborators, built once per process.
pub struct Dashboard {
    aggregator: Aggregator,
    generator: Generator,
    guard: SessionGuard,
}

impl Dashboard {
    #[must_use]
    pub fn new(aggregator: Aggregator, generator: Generator, guard: SessionGuard) -> Self {
        Self {
            aggregator,
            generator,
            guard,
        }
    }

    /// Wires the HTTP-backed collaborators from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, BriefError> {
        let timeout = config.request_timeout();

        let catalog = YouTubeClient::new(config.youtube_api_key.clone(), timeout)?;
        let transcripts = TimedTextClient::new(config.transcript_lang.clone(), timeout)?;
        let llm = LlmClient::new(
            config.llm_api_key.clone(),
            config.llm_model.clone(),
            config.llm_base_url.clone(),
            timeout,
        )?;
        let authority = HttpSessionAuthority::new(config.session_authority_url.clone(), timeout)?;

        Ok(Self::new(
            Aggregator::new(Box::new(catalog), Box::new(transcripts)),
            Generator::new(Box::new(llm)),
            SessionGuard::new(Box::new(authority), config.login_redirect_url.clone()),
        ))
    }

    #[must_use]
    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    #[must_use]
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    #[must_use]
    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }
}
