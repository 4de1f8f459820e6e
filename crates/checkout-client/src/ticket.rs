//! Session ticket cache.
//!
//! GET requests authenticate with a short-lived ticket obtained from the
//! platform. Tickets are cached per API key and shared by every client that
//! holds the same [`TicketCache`] handle; by default that is the process-wide
//! cache returned by [`TicketCache::shared`], so two clients for one key pay
//! for a single ticket round trip.
//!
//! Expiry is checked lazily when a ticket is read. Any successful response
//! from the platform resets the clock through [`TicketCache::touch`], so a
//! client calling more often than once per window never refetches.
//!
//! Each key has its own async mutex held across the whole
//! read-check-refresh-write sequence. Concurrent callers that find a missing
//! or stale ticket wait for the first refresh instead of issuing their own.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::{Duration, Instant};

/// Default validity window of a ticket (one hour).
pub const DEFAULT_TICKET_TTL: Duration = Duration::from_secs(60 * 60);

static SHARED: OnceLock<TicketCache> = OnceLock::new();

#[derive(Clone)]
struct Ticket {
    value: String,
    issued_at: Instant,
}

type Slot = Arc<tokio::sync::Mutex<Option<Ticket>>>;

/// Cache of session tickets keyed by API key.
///
/// Cloning is cheap; clones share the same entries.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use checkout_client::TicketCache;
///
/// # async fn example() -> Result<(), std::convert::Infallible> {
/// let cache = TicketCache::new();
///
/// let ticket = cache
///     .get_or_refresh("api-key", Duration::from_secs(3600), || async {
///         Ok::<_, std::convert::Infallible>("fresh-ticket".to_string())
///     })
///     .await?;
/// assert_eq!(ticket, "fresh-ticket");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct TicketCache {
    slots: Arc<Mutex<HashMap<String, Slot>>>,
}

impl TicketCache {
    /// Create an empty cache, independent of the shared one.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the process-wide cache.
    ///
    /// Initialised on first use and never dropped. Clear it with
    /// [`TicketCache::clear`] after rotating credentials.
    #[must_use]
    pub fn shared() -> Self {
        SHARED.get_or_init(Self::new).clone()
    }

    /// Return the cached ticket for `credential`, fetching a new one when it
    /// is missing or at least `ttl` old.
    ///
    /// The fetched ticket is stored with the current time. If `fetch` fails
    /// the entry is left untouched and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns whatever `fetch` returns on failure.
    pub async fn get_or_refresh<F, Fut, E>(
        &self,
        credential: &str,
        ttl: Duration,
        fetch: F,
    ) -> Result<String, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, E>>,
    {
        let slot = self.slot(credential);
        let mut entry = slot.lock().await;

        let stale = match entry.as_ref() {
            Some(ticket) if ticket.issued_at.elapsed() < ttl => {
                tracing::debug!("Using cached session ticket");
                return Ok(ticket.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        let value = fetch().await?;
        tracing::info!(stale, "Fetched session ticket");

        *entry = Some(Ticket {
            value: value.clone(),
            issued_at: Instant::now(),
        });
        Ok(value)
    }

    /// Reset the expiry clock of the ticket for `credential`.
    ///
    /// Does nothing when no ticket is cached.
    pub async fn touch(&self, credential: &str) {
        let Some(slot) = self.existing_slot(credential) else {
            return;
        };
        let mut entry = slot.lock().await;
        if let Some(ticket) = entry.as_mut() {
            ticket.issued_at = Instant::now();
        }
    }

    /// Whether a ticket is currently cached for `credential`, fresh or not.
    pub async fn contains(&self, credential: &str) -> bool {
        match self.existing_slot(credential) {
            Some(slot) => slot.lock().await.is_some(),
            None => false,
        }
    }

    /// Drop the ticket for `credential`. Returns whether an entry existed.
    pub fn invalidate(&self, credential: &str) -> bool {
        self.lock_slots().remove(credential).is_some()
    }

    /// Drop every cached ticket.
    pub fn clear(&self) {
        self.lock_slots().clear();
    }

    fn slot(&self, credential: &str) -> Slot {
        let mut slots = self.lock_slots();
        Arc::clone(slots.entry(credential.to_string()).or_default())
    }

    fn existing_slot(&self, credential: &str) -> Option<Slot> {
        self.lock_slots().get(credential).map(Arc::clone)
    }

    fn lock_slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TicketCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketCache")
            .field("credentials", &self.lock_slots().len())
            .finish()
    }
}
