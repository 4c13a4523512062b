//! In-process adapters with no external side effects.

pub mod auth;
pub mod id_gen;
pub mod kv_store;

pub use auth::OfflineAuthClient;
pub use id_gen::SequentialIdGenerator;
pub use kv_store::MemoryKeyValueStore;
