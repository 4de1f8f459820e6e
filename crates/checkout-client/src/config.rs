//! Client configuration.

use std::time::Duration;

use crate::error::ClientError;
use crate::ticket::{TicketCache, DEFAULT_TICKET_TTL};

/// Production host of the Checkout platform.
pub const DEFAULT_HOST: &str = "http://platform.checkout.ru/";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("checkout-client/", env!("CARGO_PKG_VERSION"));

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the platform (default: [`DEFAULT_HOST`]).
    pub host: String,
    /// Request timeout (default: 30 seconds).
    pub timeout: Duration,
    /// Ticket validity window (default: one hour).
    pub ticket_ttl: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Ticket cache (default: the process-wide [`TicketCache::shared`]).
    pub ticket_cache: TicketCache,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
            ticket_ttl: DEFAULT_TICKET_TTL,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ticket_cache: TicketCache::shared(),
        }
    }
}

impl ClientOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the platform host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the ticket validity window.
    #[must_use]
    pub fn with_ticket_ttl(mut self, ttl: Duration) -> Self {
        self.ticket_ttl = ttl;
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a specific ticket cache instead of the shared one.
    #[must_use]
    pub fn with_ticket_cache(mut self, cache: TicketCache) -> Self {
        self.ticket_cache = cache;
        self
    }

    /// Load options from environment variables.
    ///
    /// Reads `CHECKOUT_HOST`, `CHECKOUT_TIMEOUT_SECONDS`,
    /// `CHECKOUT_TICKET_TTL_SECONDS` and `CHECKOUT_USER_AGENT`. Unset
    /// variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let mut options = Self::default();

        if let Some(host) = lookup("CHECKOUT_HOST") {
            options.host = host;
        }
        if let Some(secs) = lookup("CHECKOUT_TIMEOUT_SECONDS") {
            options.timeout = parse_seconds("CHECKOUT_TIMEOUT_SECONDS", &secs)?;
        }
        if let Some(secs) = lookup("CHECKOUT_TICKET_TTL_SECONDS") {
            options.ticket_ttl = parse_seconds("CHECKOUT_TICKET_TTL_SECONDS", &secs)?;
        }
        if let Some(user_agent) = lookup("CHECKOUT_USER_AGENT") {
            options.user_agent = user_agent;
        }

        Ok(options)
    }
}

fn parse_seconds(name: &str, value: &str) -> Result<Duration, ClientError> {
    value
        .trim()
        .parse()
        .map(Duration::from_secs)
        .map_err(|_| ClientError::Configuration(format!("{name} must be a whole number of seconds, got {value:?}")))
}
