//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{FileKeyValueStore, LiveAuthClient, LiveClock, LiveIdGenerator};
use crate::adapters::memory::{MemoryKeyValueStore, OfflineAuthClient};
use crate::adapters::recording::{
    RecordingAuthClient, RecordingClock, RecordingIdGenerator, RecordingKeyValueStore,
};
use crate::adapters::replaying::{
    ReplayingAuthClient, ReplayingClock, ReplayingIdGenerator, ReplayingKeyValueStore,
};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::Config;
use crate::ports::auth::{AuthClient, AuthFuture, Credentials};
use crate::ports::clock::Clock;
use crate::ports::id_gen::IdGenerator;
use crate::ports::kv_store::KeyValueStore;

/// Bundles all port trait objects into a single context.
///
/// Everything that touches the outside world goes through one of these
/// fields, so the task list can run against live, in-memory, recording
/// or replaying adapters without change.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Local key-value storage for tasks and session tokens.
    pub kv: Box<dyn KeyValueStore>,
    /// Source of new task ids.
    pub id_gen: Box<dyn IdGenerator>,
    /// Token endpoint client used by the login flow.
    pub auth: Box<dyn AuthClient>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(
        clock: Box<dyn Clock>,
        kv: Box<dyn KeyValueStore>,
        id_gen: Box<dyn IdGenerator>,
        auth: Box<dyn AuthClient>,
    ) -> Self {
        Self { clock, kv, id_gen, auth }
    }

    /// Creates a live context: system clock, JSON-file storage at
    /// `config.store_path`, timestamp ids and the HTTP token endpoint.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self {
            clock: Box::new(LiveClock),
            kv: Box::new(FileKeyValueStore::new(&config.store_path)),
            id_gen: Box::new(LiveIdGenerator::new()),
            auth: Box::new(LiveAuthClient::new(&config.api_url)),
        }
    }

    /// Creates a context with empty in-memory storage and no auth endpoint.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            clock: Box::new(LiveClock),
            kv: Box::new(MemoryKeyValueStore::new()),
            id_gen: Box::new(LiveIdGenerator::new()),
            auth: Box::new(OfflineAuthClient),
        }
    }

    /// Creates a live context whose port calls are recorded to per-port
    /// cassettes under `root`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(root: &Path, config: &Config) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root)?;
        let live = Self::live(config);

        let ctx = Self {
            clock: Box::new(RecordingClock::new(live.clock, Arc::clone(&session.clock))),
            kv: Box::new(RecordingKeyValueStore::new(live.kv, Arc::clone(&session.kv))),
            id_gen: Box::new(RecordingIdGenerator::new(live.id_gen, Arc::clone(&session.id_gen))),
            auth: Box::new(RecordingAuthClient::new(live.auth, Arc::clone(&session.auth))),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from one cassette holding every port.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = CassetteConfig::load_cassette(path)?;

        // Separate replayers keep per-port queues independent.
        Ok(Self {
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            kv: Box::new(ReplayingKeyValueStore::new(CassetteReplayer::new(&cassette))),
            id_gen: Box::new(ReplayingIdGenerator::new(CassetteReplayer::new(&cassette))),
            auth: Box::new(ReplayingAuthClient::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette panic with a clear message when
    /// called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
            kv: match replayers.kv {
                Some(r) => Box::new(ReplayingKeyValueStore::new(r)),
                None => Box::new(PanickingKeyValueStore),
            },
            id_gen: match replayers.id_gen {
                Some(r) => Box::new(ReplayingIdGenerator::new(r)),
                None => Box::new(PanickingIdGenerator),
            },
            auth: match replayers.auth {
                Some(r) => Box::new(ReplayingAuthClient::new(r)),
                None => Box::new(PanickingAuthClient),
            },
        })
    }
}

// --- Panicking adapters for unconfigured ports ---

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        panic!("Clock port not configured in CassetteConfig: no cassette loaded for clock");
    }
}

struct PanickingKeyValueStore;
impl KeyValueStore for PanickingKeyValueStore {
    fn get(&self, _key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        panic!("KeyValueStore port not configured in CassetteConfig: no cassette loaded for kv");
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        panic!("KeyValueStore port not configured in CassetteConfig: no cassette loaded for kv");
    }
    fn remove(&self, _key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        panic!("KeyValueStore port not configured in CassetteConfig: no cassette loaded for kv");
    }
}

struct PanickingIdGenerator;
impl IdGenerator for PanickingIdGenerator {
    fn next_id(&self) -> u64 {
        panic!("IdGenerator port not configured in CassetteConfig: no cassette loaded for id_gen");
    }
}

struct PanickingAuthClient;
impl AuthClient for PanickingAuthClient {
    fn obtain_tokens(&self, _credentials: &Credentials) -> AuthFuture<'_> {
        panic!("AuthClient port not configured in CassetteConfig: no cassette loaded for auth");
    }
}
