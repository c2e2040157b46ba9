//! In-memory session store: opaque token -> authenticated identity + flash slot.
//!
//! Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
//! shared across the application. Time is injected through [`Clock`] so
//! expiry behaviour is deterministic under test.

use std::collections::HashMap;

use campusbuddy_core::types::{DbId, Timestamp};
use chrono::Duration;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Source of the current time. Production uses [`SystemClock`]; tests
/// substitute a manual clock to step past session expiry without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// [`Clock`] backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now()
    }
}

/// Snapshot of the authenticated user bound to a session.
///
/// This is a copy taken at login, not a live view of the `users` row.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
}

/// Flash slot: severity (e.g. `"success"`, `"error"`) -> ordered messages.
pub type FlashMap = HashMap<String, Vec<String>>;

struct SessionEntry {
    identity: Identity,
    expires_at: Timestamp,
    flash: FlashMap,
}

/// Keyed store of active sessions.
///
/// Tokens are opaque UUID v4 strings generated server-side. Expiration is
/// fixed at creation; lookups do NOT extend it (no sliding expiration).
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    clock: Box<dyn Clock>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a store with the given TTL, using the system clock.
    pub fn new(ttl_secs: i64) -> Self {
        Self::with_clock(ttl_secs, Box::new(SystemClock))
    }

    /// Create a store with an explicit clock.
    pub fn with_clock(ttl_secs: i64, clock: Box<dyn Clock>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            clock,
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Bind a fresh token to `identity` and return it.
    ///
    /// Entries past expiry are swept here, so abandoned sessions do not
    /// accumulate in the map across the process lifetime.
    pub async fn create(&self, identity: Identity) -> String {
        let token = Uuid::new_v4().to_string();
        let now = self.clock.now();
        let entry = SessionEntry {
            identity,
            expires_at: now + self.ttl,
            flash: FlashMap::new(),
        };
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, existing| existing.expires_at > now);
        sessions.insert(token.clone(), entry);
        token
    }

    /// Resolve a token to its identity.
    ///
    /// Returns `None` for unknown tokens and for tokens at or past their
    /// expiry; an expired entry is removed when observed.
    pub async fn lookup(&self, token: &str) -> Option<Identity> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(token) {
            Some(entry) if entry.expires_at > self.clock.now() => Some(entry.identity.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Remove a session. Destroying an absent token is a no-op.
    pub async fn destroy(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Queue a flash message under the given severity.
    ///
    /// Silently ignored for unknown tokens; a flash on a dead session has
    /// nowhere to be rendered.
    pub async fn set_flash(&self, token: &str, severity: &str, message: &str) {
        let mut sessions = self.sessions.write().await;
        if let Some(entry) = sessions.get_mut(token) {
            entry
                .flash
                .entry(severity.to_string())
                .or_default()
                .push(message.to_string());
        }
    }

    /// Return the flash slot and clear it in the same locked section, so
    /// each message is observed at most once.
    pub async fn take_flash(&self, token: &str) -> FlashMap {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(token) {
            Some(entry) => std::mem::take(&mut entry.flash),
            None => FlashMap::new(),
        }
    }

    /// Number of live sessions. Expired entries are dropped along the way,
    /// so the health endpoint doubles as a sweep.
    pub async fn active_count(&self) -> usize {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, entry| entry.expires_at > now);
        sessions.len()
    }

    /// Raw entry count, including any not-yet-swept expired sessions.
    #[cfg(test)]
    async fn stored_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Manually stepped clock for deterministic expiry tests.
    struct ManualClock {
        now: Mutex<Timestamp>,
    }

    impl ManualClock {
        fn starting_at(now: Timestamp) -> Self {
            Self { now: Mutex::new(now) }
        }

        fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now = *now + by;
        }
    }

    impl Clock for &'static ManualClock {
        fn now(&self) -> Timestamp {
            *self.now.lock().unwrap()
        }
    }

    fn identity() -> Identity {
        Identity {
            id: 1,
            email: "a@x.com".into(),
            display_name: "Alice".into(),
        }
    }

    fn store_with_manual_clock(ttl_secs: i64) -> (SessionStore, &'static ManualClock) {
        let clock: &'static ManualClock = Box::leak(Box::new(ManualClock::starting_at(
            chrono::Utc::now(),
        )));
        (SessionStore::with_clock(ttl_secs, Box::new(clock)), clock)
    }

    #[tokio::test]
    async fn lookup_returns_identity_before_expiry() {
        let (store, clock) = store_with_manual_clock(3600);
        let token = store.create(identity()).await;

        clock.advance(Duration::seconds(3599));
        let found = store.lookup(&token).await;
        assert_eq!(found.unwrap().email, "a@x.com");
    }

    #[tokio::test]
    async fn lookup_returns_none_at_and_after_expiry() {
        let (store, clock) = store_with_manual_clock(3600);
        let token = store.create(identity()).await;

        // Exactly at expiry the session is already gone.
        clock.advance(Duration::seconds(3600));
        assert!(store.lookup(&token).await.is_none());

        clock.advance(Duration::seconds(1));
        assert!(store.lookup(&token).await.is_none());
    }

    #[tokio::test]
    async fn lookup_does_not_extend_expiry() {
        let (store, clock) = store_with_manual_clock(100);
        let token = store.create(identity()).await;

        // Repeated lookups must not slide the deadline.
        clock.advance(Duration::seconds(60));
        assert!(store.lookup(&token).await.is_some());
        clock.advance(Duration::seconds(60));
        assert!(store.lookup(&token).await.is_none());
    }

    #[tokio::test]
    async fn unknown_token_is_absent() {
        let (store, _clock) = store_with_manual_clock(3600);
        assert!(store.lookup("no-such-token").await.is_none());
    }

    #[tokio::test]
    async fn destroy_is_idempotent() {
        let (store, _clock) = store_with_manual_clock(3600);
        let token = store.create(identity()).await;

        store.destroy(&token).await;
        assert!(store.lookup(&token).await.is_none());

        // Destroying an already-absent token must not panic or error.
        store.destroy(&token).await;
    }

    #[tokio::test]
    async fn take_flash_returns_messages_exactly_once() {
        let (store, _clock) = store_with_manual_clock(3600);
        let token = store.create(identity()).await;

        store.set_flash(&token, "success", "Welcome back").await;
        store.set_flash(&token, "success", "You have mail").await;
        store.set_flash(&token, "error", "Something failed").await;

        let flash = store.take_flash(&token).await;
        assert_eq!(
            flash.get("success").unwrap(),
            &vec!["Welcome back".to_string(), "You have mail".to_string()]
        );
        assert_eq!(flash.get("error").unwrap().len(), 1);

        // Second take observes an empty slot.
        let flash = store.take_flash(&token).await;
        assert!(flash.is_empty());
    }

    #[tokio::test]
    async fn flash_on_unknown_token_is_dropped() {
        let (store, _clock) = store_with_manual_clock(3600);
        store.set_flash("ghost", "success", "never seen").await;
        assert!(store.take_flash("ghost").await.is_empty());
    }

    #[tokio::test]
    async fn active_count_excludes_expired_sessions() {
        let (store, clock) = store_with_manual_clock(100);
        let _first = store.create(identity()).await;
        clock.advance(Duration::seconds(60));
        let _second = store.create(identity()).await;

        assert_eq!(store.active_count().await, 2);
        clock.advance(Duration::seconds(60));
        assert_eq!(store.active_count().await, 1);
        // The expired entry is physically gone, not just filtered out.
        assert_eq!(store.stored_count().await, 1);
    }

    /// Abandoned sessions (never looked up again) must not pile up: the
    /// sweep in `create` removes everything past expiry.
    #[tokio::test]
    async fn create_sweeps_abandoned_expired_sessions() {
        let (store, clock) = store_with_manual_clock(100);
        for _ in 0..10 {
            store.create(identity()).await;
        }
        assert_eq!(store.stored_count().await, 10);

        clock.advance(Duration::seconds(101));
        let _fresh = store.create(identity()).await;
        assert_eq!(store.stored_count().await, 1);
    }
}
